//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to closed-form pricing models

use lattice_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidSpot`: Non-positive spot price
/// - `InvalidVolatility`: Non-positive volatility (the lognormal model
///   needs strictly positive volatility, unlike the lattice)
/// - `UnsupportedExerciseStyle`: Exercise style without a closed form
///
/// # Examples
/// ```
/// use lattice_pricing::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: 0.0 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Exercise style without a closed-form solution.
    #[error("Unsupported exercise style: {style}")]
    UnsupportedExerciseStyle {
        /// Description of the unsupported exercise style
        style: String,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidSpot { .. } | AnalyticalError::InvalidVolatility { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
            AnalyticalError::UnsupportedExerciseStyle { .. } => {
                PricingError::UnsupportedInstrument(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_unsupported_exercise_style_display() {
        let err = AnalyticalError::UnsupportedExerciseStyle {
            style: "American".to_string(),
        };
        assert_eq!(format!("{}", err), "Unsupported exercise style: American");
    }

    #[test]
    fn test_invalid_input_to_pricing_error() {
        let err = AnalyticalError::InvalidVolatility { volatility: 0.0 };
        let pricing_err: PricingError = err.into();
        assert!(matches!(pricing_err, PricingError::InvalidInput(_)));
    }

    #[test]
    fn test_unsupported_style_to_pricing_error() {
        let err = AnalyticalError::UnsupportedExerciseStyle {
            style: "American".to_string(),
        };
        let pricing_err: PricingError = err.into();
        match pricing_err {
            PricingError::UnsupportedInstrument(msg) => {
                assert!(msg.contains("American"));
            }
            _ => panic!("Expected UnsupportedInstrument variant"),
        }
    }
}
