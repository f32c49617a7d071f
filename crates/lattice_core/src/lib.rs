//! # lattice_core: Foundation Types for Binomial Lattice Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! lattice_core is the bottom layer of the two-crate workspace, providing:
//! - Payoff and exercise style value types (`types::payoff`, `types::exercise`)
//! - Categorised pricing errors (`types::error`)
//! - Standard normal distribution functions (`math::distributions`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 depends on no other lattice_* crate, with minimal external
//! dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error derives
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use lattice_core::math::distributions::norm_cdf;
//! use lattice_core::types::{ExerciseStyle, PayoffType};
//!
//! // Intrinsic payoff of a call struck at 100 with spot at 110
//! let payoff = PayoffType::Call.evaluate(110.0_f64, 100.0);
//! assert_eq!(payoff, 10.0);
//!
//! // Exercise styles are a two-valued enumeration
//! let style = ExerciseStyle::American;
//! assert!(style.allows_early_exercise());
//!
//! // Standard normal CDF
//! let phi = norm_cdf(0.0_f64);
//! # assert!((phi - 0.5).abs() < 1e-7);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `PayoffType` and `ExerciseStyle`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
