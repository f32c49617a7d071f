//! Binomial lattice pricing engines.
//!
//! This module provides:
//! - [`crr`]: The Cox-Ross-Rubinstein backward-induction kernel
//! - [`batch`]: Rayon-parallel evaluation of many pricing requests

pub mod batch;
pub mod crr;

pub use batch::{price_batch, price_batch_with, BatchConfig, DEFAULT_PARALLEL_THRESHOLD};
pub use crr::price;
