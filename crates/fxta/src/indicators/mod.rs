//! Technical analysis indicators.
//!
//! # Overview
//!
//! All indicators in this module share the following properties:
//!
//! - **Generic**: Work with both `f32` and `f64` via the
//!   [`SeriesElement`](crate::traits::SeriesElement) trait
//! - **Aligned**: output length equals input length; warm-up positions are `None`
//! - **Total**: short or empty input yields undefined or empty output, not an error
//! - **Stateless**: every call recomputes from the full input
//!
//! # Indicator Categories
//!
//! ## Trend
//!
//! - [`sma`], [`ema`], [`wma`] - moving averages
//! - [`bollinger`] - Bollinger Bands
//! - [`vwap`] - cumulative Volume Weighted Average Price
//! - [`keltner`] - Keltner Channels
//! - [`donchian`] - Donchian Channels
//! - [`ichimoku`] - Ichimoku Cloud
//! - [`sar`] - Parabolic SAR
//!
//! ## Oscillators
//!
//! - [`rsi`] - Relative Strength Index
//! - [`macd`] - Moving Average Convergence Divergence
//! - [`stochastic`] - Stochastic Oscillator
//! - [`cci`] - Commodity Channel Index
//! - [`williams_r`] - Williams %R
//! - [`mom`] - Momentum
//! - [`mfi`] - Money Flow Index
//!
//! ## Volatility
//!
//! - [`atr`] - Average True Range (and [`true_range`])
//! - [`stddev`] - rolling population standard deviation
//!
//! ## Volume
//!
//! - [`obv`] - On-Balance Volume
//! - [`ad`] - Accumulation/Distribution Line
//!
//! # Example
//!
//! ```
//! use fxta::indicators::{ema, rsi, sma};
//!
//! let prices = vec![44.0_f64, 44.5, 43.5, 44.5, 44.0, 43.0, 42.5, 43.5, 44.5, 45.0];
//!
//! let sma_result = sma(&prices, 5).unwrap();
//! let ema_result = ema(&prices, 5).unwrap();
//! let rsi_result = rsi(&prices, 5).unwrap();
//!
//! assert_eq!(sma_result.len(), prices.len());
//! assert!(ema_result[3].is_none());
//! assert!(rsi_result[5].is_some());
//! ```
//!
//! # Error Handling
//!
//! Indicators return [`Result`](crate::error::Result) to report:
//!
//! - Invalid period values ([`InvalidPeriod`](crate::error::Error::InvalidPeriod))
//! - Multi-series inputs of unequal length
//!   ([`LengthMismatch`](crate::error::Error::LengthMismatch))

pub mod ad;
pub mod atr;
pub mod bollinger;
pub mod cci;
pub mod donchian;
pub mod ema;
pub mod ichimoku;
pub mod keltner;
pub mod macd;
pub mod mfi;
pub mod mom;
pub mod obv;
pub mod rsi;
pub mod sar;
pub mod sma;
pub mod stddev;
pub mod stochastic;
pub mod vwap;
pub mod williams_r;
pub mod wma;

// Re-export indicator functions and configuration types for convenient access.

pub use ad::ad;
pub use atr::{atr, atr_lookback, true_range, Atr};
pub use bollinger::{bollinger, bollinger_lookback, Bollinger};
pub use cci::{cci, cci_lookback, Cci};
pub use donchian::{donchian, donchian_lookback, Donchian};
pub use ema::{ema, ema_lookback, Ema};
pub use ichimoku::{ichimoku, range_midpoint, Ichimoku, IchimokuOutput};
pub use keltner::{keltner, Keltner};
pub use macd::{macd, macd_line_lookback, macd_signal_lookback, Macd, MacdOutput};
pub use mfi::{mfi, mfi_lookback, Mfi};
pub use mom::{mom, mom_lookback, Momentum};
pub use obv::obv;
pub use rsi::{rsi, rsi_lookback, Rsi};
pub use sar::{sar, sar_lookback, ParabolicSar};
pub use sma::{sma, sma_lookback, Sma};
pub use stddev::{stddev, stddev_lookback, StdDev};
pub use stochastic::{
    stochastic, stochastic_d_lookback, stochastic_k_lookback, Stochastic, StochasticOutput,
};
pub use vwap::vwap;
pub use williams_r::{williams_r, williams_r_lookback, WilliamsR};
pub use wma::{wma, wma_lookback, Wma};
