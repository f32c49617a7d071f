//! Analytical pricing formulas for European options.
//!
//! This module provides the closed-form Black-Scholes model used as the
//! validation benchmark for the lattice pricer: for a European option the
//! CRR tree value converges to the Black-Scholes value as the step count
//! grows.

mod black_scholes;
mod error;

pub use black_scholes::{price_european, BlackScholes};
pub use error::AnalyticalError;
