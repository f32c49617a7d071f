//! Vanilla option specification.
//!
//! This module provides [`OptionSpec`], the validated value type describing
//! one vanilla option pricing request.

use num_traits::Float;

use lattice_core::types::{ExerciseStyle, PayoffType};

use super::error::InstrumentError;

/// Default number of tree steps when none is given.
pub const DEFAULT_STEPS: usize = 200;

/// Complete specification of a vanilla option pricing request.
///
/// Bundles the contract terms (payoff type, strike, maturity, exercise
/// style) with the market parameters (spot, rate, volatility) and the tree
/// resolution. All invariants are checked at construction so downstream
/// pricing never sees invalid input.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Invariants
/// - spot > 0, strike > 0, maturity > 0
/// - volatility >= 0 (zero is allowed and collapses the tree to the
///   deterministic forward)
/// - steps >= 1
///
/// # Examples
/// ```
/// use lattice_core::types::{ExerciseStyle, PayoffType};
/// use lattice_pricing::instruments::OptionSpec;
///
/// let spec = OptionSpec::new(PayoffType::Call, 100.0_f64, 105.0, 0.05, 0.2, 0.5)
///     .unwrap()
///     .with_steps(500)
///     .unwrap()
///     .with_exercise_style(ExerciseStyle::American);
///
/// assert_eq!(spec.steps(), 500);
/// assert!(spec.exercise_style().is_american());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionSpec<T: Float> {
    payoff_type: PayoffType,
    spot: T,
    strike: T,
    rate: T,
    volatility: T,
    maturity: T,
    steps: usize,
    exercise_style: ExerciseStyle,
}

impl<T: Float> OptionSpec<T> {
    /// Creates a new option specification with validation.
    ///
    /// Defaults to [`DEFAULT_STEPS`] tree steps and European exercise,
    /// matching the conventional usage of the CRR model.
    ///
    /// # Arguments
    /// * `payoff_type` - Call or Put
    /// * `spot` - Spot price at t = 0 (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `rate` - Constant riskless short rate (annualised, may be negative)
    /// * `volatility` - Constant volatility of the underlying (must be non-negative)
    /// * `maturity` - Horizon in year fractions (must be positive)
    ///
    /// # Errors
    /// - `InstrumentError::InvalidSpot` if spot <= 0
    /// - `InstrumentError::InvalidStrike` if strike <= 0
    /// - `InstrumentError::InvalidMaturity` if maturity <= 0
    /// - `InstrumentError::InvalidVolatility` if volatility < 0
    ///
    /// # Examples
    /// ```
    /// use lattice_core::types::PayoffType;
    /// use lattice_pricing::instruments::OptionSpec;
    ///
    /// let spec = OptionSpec::new(PayoffType::Call, 100.0_f64, 100.0, 0.05, 0.2, 1.0);
    /// assert!(spec.is_ok());
    ///
    /// let invalid = OptionSpec::new(PayoffType::Call, -100.0_f64, 100.0, 0.05, 0.2, 1.0);
    /// assert!(invalid.is_err());
    /// ```
    pub fn new(
        payoff_type: PayoffType,
        spot: T,
        strike: T,
        rate: T,
        volatility: T,
        maturity: T,
    ) -> Result<Self, InstrumentError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(InstrumentError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if strike <= zero {
            return Err(InstrumentError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }

        if maturity <= zero {
            return Err(InstrumentError::InvalidMaturity {
                maturity: maturity.to_f64().unwrap_or(f64::NAN),
            });
        }

        if volatility < zero {
            return Err(InstrumentError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            payoff_type,
            spot,
            strike,
            rate,
            volatility,
            maturity,
            steps: DEFAULT_STEPS,
            exercise_style: ExerciseStyle::European,
        })
    }

    /// Sets the number of tree steps.
    ///
    /// # Errors
    /// - `InstrumentError::InvalidStepCount` if steps == 0
    pub fn with_steps(mut self, steps: usize) -> Result<Self, InstrumentError> {
        if steps == 0 {
            return Err(InstrumentError::InvalidStepCount { steps });
        }
        self.steps = steps;
        Ok(self)
    }

    /// Sets the exercise style.
    pub fn with_exercise_style(mut self, exercise_style: ExerciseStyle) -> Self {
        self.exercise_style = exercise_style;
        self
    }

    /// Returns the payoff type.
    #[inline]
    pub fn payoff_type(&self) -> PayoffType {
        self.payoff_type
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
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

    /// Returns the maturity in years.
    #[inline]
    pub fn maturity(&self) -> T {
        self.maturity
    }

    /// Returns the number of tree steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the exercise style.
    #[inline]
    pub fn exercise_style(&self) -> ExerciseStyle {
        self.exercise_style
    }

    /// Intrinsic payoff at the given underlying price.
    #[inline]
    pub fn payoff(&self, spot: T) -> T {
        self.payoff_type.evaluate(spot, self.strike)
    }
}
