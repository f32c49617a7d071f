//! Core value types for lattice pricing.
//!
//! This module provides:
//! - [`PayoffType`]: Call/Put payoff enumeration with intrinsic evaluation
//! - [`ExerciseStyle`]: European/American exercise enumeration
//! - [`PricingError`]: Categorised top-level pricing errors

pub mod error;
pub mod exercise;
pub mod payoff;

pub use error::PricingError;
pub use exercise::ExerciseStyle;
pub use payoff::PayoffType;
