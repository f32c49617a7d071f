//! Rayon-parallel batch pricing.
//!
//! Each lattice evaluation is a pure function of its `OptionSpec` with no
//! shared state, so a batch of pricing requests is embarrassingly parallel.
//! Small batches are priced sequentially to avoid paying the fork-join
//! overhead for work that fits in a few microseconds.

use num_traits::Float;
use rayon::prelude::*;

use super::crr;
use crate::instruments::OptionSpec;

/// Default number of requests below which a batch is priced sequentially.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Configuration for batch pricing.
///
/// # Examples
/// ```
/// use lattice_pricing::lattice::BatchConfig;
///
/// let config = BatchConfig::new().with_parallel_threshold(128);
/// assert_eq!(config.parallel_threshold, 128);
/// ```
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Minimum batch size before rayon parallelism is engaged.
    pub parallel_threshold: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl BatchConfig {
    /// Creates a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the parallel threshold.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

/// Prices a batch of options with the default configuration.
///
/// Results are returned in input order.
///
/// # Examples
/// ```
/// use lattice_core::types::PayoffType;
/// use lattice_pricing::instruments::OptionSpec;
/// use lattice_pricing::lattice::{crr, price_batch};
///
/// let specs: Vec<_> = (80..=120)
///     .step_by(10)
///     .map(|k| OptionSpec::new(PayoffType::Call, 100.0_f64, k as f64, 0.05, 0.2, 1.0).unwrap())
///     .collect();
///
/// let prices = price_batch(&specs);
/// assert_eq!(prices.len(), specs.len());
/// assert_eq!(prices[0], crr::price(&specs[0]));
/// ```
pub fn price_batch<T>(specs: &[OptionSpec<T>]) -> Vec<T>
where
    T: Float + Send + Sync,
{
    price_batch_with(specs, &BatchConfig::default())
}

/// Prices a batch of options with an explicit configuration.
pub fn price_batch_with<T>(specs: &[OptionSpec<T>], config: &BatchConfig) -> Vec<T>
where
    T: Float + Send + Sync,
{
    if specs.len() < config.parallel_threshold {
        specs.iter().map(crr::price).collect()
    } else {
        specs.par_iter().map(crr::price).collect()
    }
}
