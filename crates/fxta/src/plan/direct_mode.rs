//! Direct mode multi-indicator computation.
//!
//! Each requested indicator is resolved through the [`Registry`] and computed
//! independently over the same candle columns. A request whose identifier is
//! unknown is skipped; a request that fails (bad parameter override) is
//! recorded in [`IndicatorSet::failures`] and does not stop the others.
//!
//! # Example
//!
//! ```
//! use fxta::candle::Candle;
//! use fxta::config::EngineConfig;
//! use fxta::plan::direct_mode::{DirectExecutor, IndicatorRequest};
//!
//! let candles: Vec<Candle> = (0..60)
//!     .map(|i| {
//!         let p = 1.2 + f64::from(i % 7) * 0.001;
//!         Candle::new(i64::from(i) * 300, p, p + 0.003, p - 0.003, p, 500.0)
//!     })
//!     .collect();
//!
//! let requests = vec![
//!     IndicatorRequest::new("BB"),
//!     IndicatorRequest::new("macd").with_param("signal", 5.0),
//!     IndicatorRequest::new("not-an-indicator"),
//!     IndicatorRequest::new("rsi").with_param("period", 0.0),
//! ];
//!
//! let set = DirectExecutor::new(EngineConfig::default())
//!     .execute(&candles, &requests)
//!     .unwrap();
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.failures.len(), 1);
//! assert_eq!(set.failures[0].id, "rsi");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::registry::Registry;
use super::spec::{IndicatorKind, IndicatorOutput, IndicatorSpec, Pane};
use crate::candle::{validate_candles, Candle, CandleColumns};
use crate::config::EngineConfig;
use crate::error::{Error, Result};

/// A request to compute an indicator by identifier.
///
/// `params` overrides the defaults registered for `id`; names follow
/// [`IndicatorKind::param_names`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRequest {
    /// Canonical identifier or alias.
    pub id: String,
    /// Parameter overrides by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, f64>,
}

impl IndicatorRequest {
    /// Creates a request with default parameters.
    ///
    /// # Example
    ///
    /// ```
    /// use fxta::plan::direct_mode::IndicatorRequest;
    ///
    /// let request = IndicatorRequest::new("MA20");
    /// assert_eq!(request.id, "MA20");
    /// assert!(request.params.is_empty());
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            params: BTreeMap::new(),
        }
    }

    /// Adds a parameter override.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: f64) -> Self {
        self.params.insert(name.into(), value);
        self
    }
}

/// One computed indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedIndicator {
    /// Identifier as requested (alias or canonical).
    pub id: String,
    /// Resolved specification, overrides applied.
    pub spec: IndicatorSpec,
    /// Drawing pane.
    pub pane: Pane,
    /// Computed series, index-aligned with the candles.
    pub output: IndicatorOutput,
}

impl ComputedIndicator {
    /// Kind of the computed indicator.
    #[must_use]
    pub const fn kind(&self) -> IndicatorKind {
        self.spec.kind()
    }
}

/// A request that resolved but could not be computed.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorFailure {
    /// Identifier as requested.
    pub id: String,
    /// Why it failed.
    pub error: Error,
}

/// Ordered results of one executor call.
///
/// `indicators` follows request order, with unknown and failed requests
/// left out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorSet {
    /// Successfully computed indicators.
    pub indicators: Vec<ComputedIndicator>,
    /// Requests that failed.
    pub failures: Vec<IndicatorFailure>,
}

impl IndicatorSet {
    /// First computed indicator requested as `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ComputedIndicator> {
        self.indicators.iter().find(|c| c.id == id)
    }

    /// Returns the number of computed indicators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    /// Returns true if nothing was computed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    /// Iterates over computed indicators in request order.
    pub fn iter(&self) -> std::slice::Iter<'_, ComputedIndicator> {
        self.indicators.iter()
    }

    /// Computed indicators drawn in `pane`, in request order.
    pub fn in_pane(&self, pane: Pane) -> impl Iterator<Item = &ComputedIndicator> {
        self.indicators.iter().filter(move |c| c.pane == pane)
    }

    pub(crate) fn from_outcomes(outcomes: impl IntoIterator<Item = Outcome>) -> Self {
        let mut set = Self::default();
        for outcome in outcomes {
            match outcome {
                Outcome::Computed(computed) => set.indicators.push(computed),
                Outcome::Failed(failure) => set.failures.push(failure),
                Outcome::Omitted => {}
            }
        }
        set
    }
}

impl<'a> IntoIterator for &'a IndicatorSet {
    type Item = &'a ComputedIndicator;
    type IntoIter = std::slice::Iter<'a, ComputedIndicator>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// What happened to a single request.
#[derive(Debug)]
pub(crate) enum Outcome {
    Computed(ComputedIndicator),
    Failed(IndicatorFailure),
    Omitted,
}

/// Resolves and computes one request over prepared columns.
pub(crate) fn compute_request(
    registry: &Registry,
    request: &IndicatorRequest,
    columns: &CandleColumns,
    price: &[f64],
) -> Outcome {
    let spec = match registry.resolve(&request.id, &request.params) {
        Ok(Some(spec)) => spec,
        Ok(None) => {
            debug!(id = %request.id, "omitting unknown indicator");
            return Outcome::Omitted;
        }
        Err(error) => return failed(request, error),
    };

    match spec.compute(columns, price) {
        Ok(output) => {
            trace!(id = %request.id, kind = %spec.kind(), len = output.len(), "computed indicator");
            Outcome::Computed(ComputedIndicator {
                id: request.id.clone(),
                spec,
                pane: spec.pane(),
                output,
            })
        }
        Err(error) => failed(request, error),
    }
}

fn failed(request: &IndicatorRequest, error: Error) -> Outcome {
    warn!(id = %request.id, %error, "indicator failed");
    Outcome::Failed(IndicatorFailure {
        id: request.id.clone(),
        error,
    })
}

/// Validates candles when configured and builds the column view plus the
/// configured price column.
pub(crate) fn prepare(config: &EngineConfig, candles: &[Candle]) -> Result<(CandleColumns, Vec<f64>)> {
    if config.validate_candles {
        validate_candles(candles)?;
    }
    let columns = CandleColumns::from_candles(candles);
    let price = columns.price(config.price_source);
    Ok((columns, price))
}

/// Executor that computes each requested indicator independently.
#[derive(Debug, Clone)]
pub struct DirectExecutor {
    config: EngineConfig,
    registry: Registry,
}

impl Default for DirectExecutor {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl DirectExecutor {
    /// Creates an executor over the standard registry.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            registry: Registry::standard(),
        }
    }

    /// Replaces the registry used to resolve identifiers.
    #[must_use]
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// The engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The registry used to resolve identifiers.
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Computes every request over `candles`.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedCandle` if candle validation is enabled and a
    /// candle violates the OHLCV invariants. Per-request problems are
    /// reported in [`IndicatorSet::failures`] instead.
    pub fn execute(&self, candles: &[Candle], requests: &[IndicatorRequest]) -> Result<IndicatorSet> {
        let (columns, price) = prepare(&self.config, candles)?;
        Ok(self.execute_columns(&columns, &price, requests))
    }

    /// Computes every request over an already prepared column view.
    ///
    /// No candle validation happens here. `price` must have the same length
    /// as `columns`.
    #[must_use]
    pub fn execute_columns(
        &self,
        columns: &CandleColumns,
        price: &[f64],
        requests: &[IndicatorRequest],
    ) -> IndicatorSet {
        let set = IndicatorSet::from_outcomes(
            requests
                .iter()
                .map(|request| compute_request(&self.registry, request, columns, price)),
        );
        debug!(
            requested = requests.len(),
            computed = set.len(),
            failed = set.failures.len(),
            candles = columns.len(),
            "direct execution finished"
        );
        set
    }
}
