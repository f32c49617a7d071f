//! Payoff type definitions.
//!
//! This module provides the vanilla payoff types (Call, Put) with
//! exact intrinsic-value evaluation.

use num_traits::Float;

/// Type of option payoff.
///
/// Provides intrinsic payoff evaluation for the two vanilla payoffs.
///
/// # Variants
/// - `Call`: max(S - K, 0) payoff
/// - `Put`: max(K - S, 0) payoff
///
/// # Examples
/// ```
/// use lattice_core::types::PayoffType;
///
/// let call = PayoffType::Call;
/// let payoff = call.evaluate(110.0_f64, 100.0);
/// assert_eq!(payoff, 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PayoffType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl PayoffType {
    /// Evaluate the intrinsic payoff for given spot and strike.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (S)
    /// * `strike` - Strike price (K)
    ///
    /// # Returns
    /// The intrinsic value, always non-negative.
    ///
    /// # Examples
    /// ```
    /// use lattice_core::types::PayoffType;
    ///
    /// // In-the-money call
    /// assert_eq!(PayoffType::Call.evaluate(110.0_f64, 100.0), 10.0);
    ///
    /// // Out-of-the-money put
    /// assert_eq!(PayoffType::Put.evaluate(110.0_f64, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn evaluate<T: Float>(&self, spot: T, strike: T) -> T {
        let zero = T::zero();
        match self {
            PayoffType::Call => (spot - strike).max(zero),
            PayoffType::Put => (strike - spot).max(zero),
        }
    }

    /// Returns whether this is a call payoff.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, PayoffType::Call)
    }

    /// Returns whether this is a put payoff.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, PayoffType::Put)
    }
}
