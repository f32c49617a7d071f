//! # Lattice Pricing (L2: Pricing Logic)
//!
//! Cox-Ross-Rubinstein binomial tree pricing for vanilla options.
//!
//! This crate provides:
//! - Validated option specifications ([`instruments::OptionSpec`])
//! - The CRR backward-induction kernel ([`lattice::crr`])
//! - Parallel batch evaluation ([`lattice::batch`])
//! - Closed-form Black-Scholes reference prices for validation ([`analytical`])
//!
//! ## Design Principles
//!
//! - **Validate at construction**: an `OptionSpec` cannot hold a
//!   non-positive spot, strike, or maturity, a negative volatility, or a
//!   zero step count, so the pricing kernel itself is infallible
//! - **Generic over `T: Float`** throughout
//! - **Builder-style defaults**: 200 steps, European exercise
//!
//! ## Usage Example
//!
//! ```
//! use lattice_core::types::{ExerciseStyle, PayoffType};
//! use lattice_pricing::instruments::OptionSpec;
//! use lattice_pricing::lattice::crr;
//!
//! let call = OptionSpec::new(PayoffType::Call, 100.0_f64, 100.0, 0.05, 0.2, 1.0).unwrap();
//! let price = crr::price(&call);
//! assert!((price - 10.45).abs() < 0.05);
//!
//! let put = OptionSpec::new(PayoffType::Put, 100.0_f64, 100.0, 0.05, 0.2, 1.0).unwrap();
//! let european = crr::price(&put);
//! let american = crr::price(&put.with_exercise_style(ExerciseStyle::American));
//! assert!(american >= european);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod lattice;

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
