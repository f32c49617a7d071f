//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Top-level categorised errors from pricing operations

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode. Per-module errors in the
/// pricing layer convert into this taxonomy via `From` implementations.
///
/// # Variants
/// - `InvalidInput`: Invalid instrument or market parameters
/// - `NumericalInstability`: Computation encountered numerical issues
/// - `UnsupportedInstrument`: Instrument type not supported by a model
///
/// # Examples
/// ```
/// use lattice_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Instrument type not supported
    #[error("Unsupported instrument: {0}")]
    UnsupportedInstrument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = PricingError::InvalidInput("steps = 0".to_string());
        assert_eq!(format!("{}", err), "Invalid input: steps = 0");
    }

    #[test]
    fn test_numerical_instability_display() {
        let err = PricingError::NumericalInstability("u == d".to_string());
        assert_eq!(format!("{}", err), "Numerical instability: u == d");
    }

    #[test]
    fn test_unsupported_instrument_display() {
        let err = PricingError::UnsupportedInstrument("Bermudan".to_string());
        assert_eq!(format!("{}", err), "Unsupported instrument: Bermudan");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidInput("spot".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::InvalidInput("spot".to_string());
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
