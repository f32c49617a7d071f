//! Black-Scholes pricing model for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Greeks are out of scope here; the model exists as the convergence
//! benchmark for the binomial lattice.

use num_traits::Float;

use lattice_core::math::distributions::norm_cdf;
use lattice_core::types::PayoffType;

use super::error::AnalyticalError;
use crate::instruments::OptionSpec;

/// Black-Scholes model for European option pricing.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use lattice_pricing::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0);
/// let put = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K·exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes the d₁ term: (ln(S/K) + (r + σ²/2)T) / (σ√T).
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let half = T::from(0.5).unwrap();
        let sqrt_t = expiry.sqrt();
        let vol_sqrt_t = self.volatility * sqrt_t;

        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d₂ term: d₁ - σ√T.
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes the European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes the European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }
}

/// Closed-form price for a European [`OptionSpec`].
///
/// Used as the validation benchmark the lattice converges to.
///
/// # Errors
/// - `AnalyticalError::UnsupportedExerciseStyle` for American specs
/// - `AnalyticalError::InvalidVolatility` for zero volatility (the
///   lognormal closed form needs σ > 0)
///
/// # Examples
/// ```
/// use lattice_core::types::PayoffType;
/// use lattice_pricing::analytical::price_european;
/// use lattice_pricing::instruments::OptionSpec;
///
/// let spec = OptionSpec::new(PayoffType::Call, 100.0_f64, 100.0, 0.05, 0.2, 1.0).unwrap();
/// let price = price_european(&spec).unwrap();
/// assert!((price - 10.4506).abs() < 1e-3);
/// ```
pub fn price_european<T: Float>(spec: &OptionSpec<T>) -> Result<T, AnalyticalError> {
    if !spec.exercise_style().is_european() {
        return Err(AnalyticalError::UnsupportedExerciseStyle {
            style: format!("{:?}", spec.exercise_style()),
        });
    }

    let bs = BlackScholes::new(spec.spot(), spec.rate(), spec.volatility())?;

    Ok(match spec.payoff_type() {
        PayoffType::Call => bs.price_call(spec.strike(), spec.maturity()),
        PayoffType::Put => bs.price_put(spec.strike(), spec.maturity()),
    })
}
