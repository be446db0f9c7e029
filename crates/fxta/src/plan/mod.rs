//! Identifier-based indicator dispatch.
//!
//! The dashboard asks for indicators by string identifier, optionally with
//! parameter overrides. This module turns such requests into computed,
//! index-aligned series:
//!
//! 1. **IndicatorSpec**: a typed, configured indicator plus its metadata
//!    (pane, category, display precision)
//! 2. **Registry**: identifiers and legacy aliases mapped to specs
//! 3. **DirectExecutor**: computes each request independently
//! 4. **MemoizedExecutor**: reuses the last result while inputs are unchanged
//!
//! For parallel evaluation of many requests see [`crate::batch`].
//!
//! ```
//! use fxta::candle::Candle;
//! use fxta::config::EngineConfig;
//! use fxta::plan::{DirectExecutor, IndicatorRequest, Pane};
//!
//! let candles: Vec<Candle> = (0..50)
//!     .map(|i| Candle::new(i64::from(i), 1.0, 1.02, 0.98, 1.01, 100.0))
//!     .collect();
//!
//! let set = DirectExecutor::default()
//!     .execute(&candles, &[IndicatorRequest::new("EMA12"), IndicatorRequest::new("cci")])
//!     .unwrap();
//!
//! let overlays: Vec<_> = set.in_pane(Pane::Overlay).map(|c| c.id.as_str()).collect();
//! assert_eq!(overlays, ["EMA12"]);
//! ```

pub mod direct_mode;
pub mod memo;
pub mod registry;
pub mod spec;

// Re-export commonly used types for convenient access
pub use registry::{catalog, CatalogEntry, Registry};
pub use spec::{Category, IndicatorKind, IndicatorOutput, IndicatorSpec, Pane};

pub use direct_mode::{ComputedIndicator, DirectExecutor, IndicatorFailure, IndicatorRequest, IndicatorSet};
pub use memo::{CacheStats, MemoizedExecutor};
