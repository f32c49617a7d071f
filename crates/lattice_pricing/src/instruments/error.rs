//! Error types for option contract construction.
//!
//! This module provides:
//! - `InstrumentError`: Errors from `OptionSpec` validation

use lattice_core::types::PricingError;
use thiserror::Error;

/// Option specification errors.
///
/// Provides structured error handling for `OptionSpec` construction with
/// one variant per structural invariant.
///
/// # Variants
/// - `InvalidSpot`: Non-positive spot price
/// - `InvalidStrike`: Non-positive strike price
/// - `InvalidMaturity`: Non-positive maturity
/// - `InvalidVolatility`: Negative volatility
/// - `InvalidStepCount`: Zero tree steps
///
/// # Examples
/// ```
/// use lattice_pricing::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InstrumentError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike price value
        strike: f64,
    },

    /// Invalid maturity (non-positive).
    #[error("Invalid maturity: T = {maturity}")]
    InvalidMaturity {
        /// The invalid maturity value in years
        maturity: f64,
    },

    /// Invalid volatility (negative).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid step count (zero).
    #[error("Invalid step count: N = {steps}")]
    InvalidStepCount {
        /// The invalid step count
        steps: usize,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
