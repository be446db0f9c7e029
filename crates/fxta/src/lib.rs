//! fxta: technical-indicator engine for OHLCV candle series
//!
//! This crate computes the indicator battery of a forex dashboard (moving
//! averages, oscillators, volatility bands and volume indicators) over an
//! ordered sequence of candles. Every output series is index-aligned with the
//! input: `series[i]` describes candle `i`, and positions inside an
//! indicator's warm-up period are `None`.
//!
//! # Features
//!
//! - **Aligned output**: output length always equals input length
//! - **Total**: short input is never an error; warm-up positions are `None`
//! - **Deterministic**: no clocks, no randomness, no state between calls
//! - **Generics**: single-series functions work with both `f32` and `f64`
//!
//! # Quick Start
//!
//! ```
//! use fxta::indicators::sma;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = sma(&data, 3).unwrap();
//!
//! assert_eq!(result, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
//! ```
//!
//! # Dispatch by identifier
//!
//! The dashboard requests indicators by string identifier. The
//! [`plan`] module resolves identifiers (including legacy aliases such as
//! `MA20`) to a typed [`IndicatorSpec`](plan::IndicatorSpec) and computes them
//! over a candle slice:
//!
//! ```
//! use fxta::candle::Candle;
//! use fxta::config::EngineConfig;
//! use fxta::plan::{DirectExecutor, IndicatorRequest, Pane};
//!
//! let candles: Vec<Candle> = (0..30)
//!     .map(|i| {
//!         let p = 1.10 + f64::from(i) * 0.001;
//!         Candle::new(1_700_000_000 + i64::from(i) * 60, p, p + 0.002, p - 0.002, p + 0.001, 1_000.0)
//!     })
//!     .collect();
//!
//! let executor = DirectExecutor::new(EngineConfig::default());
//! let set = executor
//!     .execute(&candles, &[IndicatorRequest::new("MA20"), IndicatorRequest::new("rsi")])
//!     .unwrap();
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.get("MA20").unwrap().pane, Pane::Overlay);
//! assert_eq!(set.get("rsi").unwrap().pane, Pane::Oscillator);
//! ```
//!
//! # Error Handling
//!
//! Indicator functions return [`Result`] only for invalid parameters
//! (zero periods, mismatched input lengths). Insufficient history is
//! represented by `None`:
//!
//! ```
//! use fxta::indicators::sma;
//!
//! let short_data = vec![1.0_f64, 2.0];
//! let result = sma(&short_data, 10).unwrap();
//! assert_eq!(result, vec![None, None]);
//!
//! assert!(sma(&short_data, 0).is_err());
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod candle;
pub mod config;
pub mod error;
pub mod indicators;
pub mod kernels;
pub mod plan;
pub mod prelude;
pub mod series;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use candle::{Candle, CandleColumns, PriceSource};
pub use config::EngineConfig;
pub use error::{Error, Result};
pub use series::Series;
pub use traits::SeriesElement;
pub use utils::{approx_eq, count_defined, count_undefined_prefix, series_approx_eq, EPSILON, LOOSE_EPSILON};
