//! Batch processing utilities for parallel indicator computation.
//!
//! Computes many indicator requests, or the same requests over many candle
//! series (one per currency pair, say), using Rayon when the `parallel`
//! feature is enabled. Without the feature everything runs sequentially.
//! Either way the results are identical to
//! [`DirectExecutor`](crate::plan::DirectExecutor) and keep request order.
//!
//! # Feature Flag
//!
//! ```toml
//! [dependencies]
//! fxta = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! # Example
//!
//! ```
//! use fxta::batch::BatchProcessor;
//! use fxta::candle::Candle;
//! use fxta::config::EngineConfig;
//! use fxta::plan::IndicatorRequest;
//!
//! let eurusd: Vec<Candle> = (0..30).map(|i| Candle::new(i, 1.08, 1.09, 1.07, 1.085, 10.0)).collect();
//! let gbpusd: Vec<Candle> = (0..30).map(|i| Candle::new(i, 1.27, 1.28, 1.26, 1.275, 10.0)).collect();
//!
//! let results = BatchProcessor::new(EngineConfig::default())
//!     .execute_many(&[eurusd, gbpusd], &[IndicatorRequest::new("MA10")])
//!     .unwrap();
//!
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[1].get("MA10").unwrap().output.len(), 30);
//! ```

use tracing::debug;

use crate::candle::{Candle, CandleColumns};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::plan::direct_mode::{compute_request, prepare, Outcome};
use crate::plan::{IndicatorRequest, IndicatorSet, Registry};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Batch processor for parallel indicator computation.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    config: EngineConfig,
    registry: Registry,
    /// Minimum number of work items to use parallel processing.
    /// Smaller batches are processed sequentially.
    min_parallel_threshold: usize,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl BatchProcessor {
    /// Creates a batch processor over the standard registry.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            registry: Registry::standard(),
            min_parallel_threshold: 4,
        }
    }

    /// Replaces the registry used to resolve identifiers.
    #[must_use]
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Sets the minimum number of work items required to go parallel.
    #[must_use]
    pub const fn min_parallel_threshold(mut self, threshold: usize) -> Self {
        self.min_parallel_threshold = threshold;
        self
    }

    /// Returns the parallel threshold.
    #[must_use]
    pub const fn get_min_parallel_threshold(&self) -> usize {
        self.min_parallel_threshold
    }

    /// Computes every request over one candle series, spreading the requests
    /// over the thread pool.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedCandle` if candle validation is enabled and a
    /// candle is malformed.
    pub fn execute(&self, candles: &[Candle], requests: &[IndicatorRequest]) -> Result<IndicatorSet> {
        let (columns, price) = prepare(&self.config, candles)?;
        let outcomes = self.compute_all(&columns, &price, requests);
        Ok(IndicatorSet::from_outcomes(outcomes))
    }

    /// Computes the same requests over several candle series, one
    /// [`IndicatorSet`] per series in input order.
    ///
    /// # Errors
    ///
    /// Returns the first candle validation error encountered.
    pub fn execute_many(
        &self,
        series: &[Vec<Candle>],
        requests: &[IndicatorRequest],
    ) -> Result<Vec<IndicatorSet>> {
        debug!(series = series.len(), requests = requests.len(), "batch execution");
        self.process(series, |candles| {
            let (columns, price) = prepare(&self.config, candles)?;
            let outcomes = requests
                .iter()
                .map(|request| compute_request(&self.registry, request, &columns, &price));
            Ok(IndicatorSet::from_outcomes(outcomes))
        })
    }

    #[cfg(feature = "parallel")]
    fn compute_all(&self, columns: &CandleColumns, price: &[f64], requests: &[IndicatorRequest]) -> Vec<Outcome> {
        if requests.len() < self.min_parallel_threshold {
            requests
                .iter()
                .map(|request| compute_request(&self.registry, request, columns, price))
                .collect()
        } else {
            requests
                .par_iter()
                .map(|request| compute_request(&self.registry, request, columns, price))
                .collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn compute_all(&self, columns: &CandleColumns, price: &[f64], requests: &[IndicatorRequest]) -> Vec<Outcome> {
        requests
            .iter()
            .map(|request| compute_request(&self.registry, request, columns, price))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn process<F, R>(&self, series: &[Vec<Candle>], f: F) -> Result<Vec<R>>
    where
        F: Fn(&[Candle]) -> Result<R> + Send + Sync,
        R: Send,
    {
        if series.len() < self.min_parallel_threshold {
            series.iter().map(|s| f(s)).collect()
        } else {
            series.par_iter().map(|s| f(s)).collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn process<F, R>(&self, series: &[Vec<Candle>], f: F) -> Result<Vec<R>>
    where
        F: Fn(&[Candle]) -> Result<R>,
    {
        series.iter().map(|s| f(s)).collect()
    }
}
