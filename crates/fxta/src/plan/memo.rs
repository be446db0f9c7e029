//! Memoized execution.
//!
//! A dashboard recomputes its indicator set on every render, usually with
//! the same candles and the same requests. [`MemoizedExecutor`] keeps the
//! last result together with its inputs and returns it unchanged until the
//! candles or the requests change. A 64-bit fingerprint rejects most misses
//! cheaply; a matching fingerprint is confirmed against the stored inputs.
//!
//! # Example
//!
//! ```
//! use fxta::candle::Candle;
//! use fxta::config::EngineConfig;
//! use fxta::plan::{IndicatorRequest, MemoizedExecutor};
//!
//! let mut candles: Vec<Candle> = (0..40)
//!     .map(|i| Candle::new(i64::from(i), 1.0, 1.1, 0.9, 1.05, 10.0))
//!     .collect();
//! let requests = [IndicatorRequest::new("ema")];
//!
//! let mut memo = MemoizedExecutor::new(EngineConfig::default());
//! memo.execute(&candles, &requests).unwrap();
//! memo.execute(&candles, &requests).unwrap();
//! assert_eq!(memo.stats().hits, 1);
//!
//! candles.push(Candle::new(40, 1.05, 1.2, 1.0, 1.15, 12.0));
//! memo.execute(&candles, &requests).unwrap();
//! assert_eq!(memo.stats().misses, 2);
//! ```

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::debug;

use super::direct_mode::{DirectExecutor, IndicatorRequest, IndicatorSet};
use super::registry::Registry;
use crate::candle::Candle;
use crate::config::EngineConfig;
use crate::error::Result;

/// Cache hit and miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Calls answered from the cache.
    pub hits: u64,
    /// Calls that recomputed.
    pub misses: u64,
}

/// Last computation and the inputs it was computed from.
#[derive(Debug, Clone)]
struct CacheEntry {
    key: u64,
    candles: Vec<Candle>,
    requests: Vec<IndicatorRequest>,
    set: IndicatorSet,
}

impl CacheEntry {
    fn matches(&self, key: u64, candles: &[Candle], requests: &[IndicatorRequest]) -> bool {
        self.key == key && self.requests == requests && same_candles(&self.candles, candles)
    }
}

/// Executor that reuses its last result while the inputs are unchanged.
///
/// Only the most recent input is remembered. Errors are not cached.
#[derive(Debug, Clone)]
pub struct MemoizedExecutor {
    inner: DirectExecutor,
    cached: Option<CacheEntry>,
    stats: CacheStats,
}

impl MemoizedExecutor {
    /// Creates a memoizing executor over the standard registry.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::from_executor(DirectExecutor::new(config))
    }

    /// Wraps an existing executor.
    #[must_use]
    pub const fn from_executor(inner: DirectExecutor) -> Self {
        Self {
            inner,
            cached: None,
            stats: CacheStats { hits: 0, misses: 0 },
        }
    }

    /// Replaces the registry and drops the cached result.
    pub fn set_registry(&mut self, registry: Registry) {
        self.inner = self.inner.clone().with_registry(registry);
        self.invalidate();
    }

    /// The wrapped executor.
    #[must_use]
    pub const fn executor(&self) -> &DirectExecutor {
        &self.inner
    }

    /// Hit and miss counters since creation.
    #[must_use]
    pub const fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Drops the cached result.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Computes every request over `candles`, or returns the cached result
    /// if neither the candles nor the requests changed since the last call.
    ///
    /// # Errors
    ///
    /// Same as [`DirectExecutor::execute`].
    pub fn execute(&mut self, candles: &[Candle], requests: &[IndicatorRequest]) -> Result<&IndicatorSet> {
        let key = fingerprint(self.inner.config(), candles, requests);
        let entry = match self.cached.take() {
            Some(entry) if entry.matches(key, candles, requests) => {
                self.stats.hits += 1;
                debug!(key, "indicator cache hit");
                entry
            }
            previous => {
                if previous.is_some_and(|entry| entry.key == key) {
                    debug!(key, "fingerprint collision, recomputing");
                }
                self.stats.misses += 1;
                CacheEntry {
                    key,
                    candles: candles.to_vec(),
                    requests: requests.to_vec(),
                    set: self.inner.execute(candles, requests)?,
                }
            }
        };
        Ok(&self.cached.insert(entry).set)
    }
}

/// Bitwise equality, consistent with [`fingerprint`].
fn same_candles(a: &[Candle], b: &[Candle]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(x, y)| {
            x.time == y.time
                && [x.open, x.high, x.low, x.close, x.volume]
                    .iter()
                    .zip([y.open, y.high, y.low, y.close, y.volume])
                    .all(|(p, q)| p.to_bits() == q.to_bits())
        })
}

/// Hash of everything a computation depends on.
///
/// Prices are hashed by bit pattern so `-0.0` and `0.0` differ, which only
/// costs a spurious recompute.
fn fingerprint(config: &EngineConfig, candles: &[Candle], requests: &[IndicatorRequest]) -> u64 {
    let mut hasher = DefaultHasher::new();
    config.hash(&mut hasher);

    candles.len().hash(&mut hasher);
    for c in candles {
        c.time.hash(&mut hasher);
        for value in [c.open, c.high, c.low, c.close, c.volume] {
            value.to_bits().hash(&mut hasher);
        }
    }

    requests.len().hash(&mut hasher);
    for request in requests {
        request.id.hash(&mut hasher);
        request.params.len().hash(&mut hasher);
        for (name, value) in &request.params {
            name.hash(&mut hasher);
            value.to_bits().hash(&mut hasher);
        }
    }
    hasher.finish()
}
