//! Option contract definitions.
//!
//! This module provides the validated [`OptionSpec`] value type consumed by
//! the lattice pricer, together with its structured construction errors.
//!
//! # Architecture
//!
//! Validation happens once, at construction: a successfully built
//! `OptionSpec` always satisfies the lattice invariants (positive spot,
//! strike, and maturity; non-negative volatility; at least one step), so
//! pricing itself never has to re-check inputs.

mod error;
mod option;

pub use error::InstrumentError;
pub use option::{OptionSpec, DEFAULT_STEPS};
