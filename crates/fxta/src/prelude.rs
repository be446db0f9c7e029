//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use fxta::prelude::*;
//!
//! let closes = vec![1.10_f64, 1.11, 1.12, 1.11, 1.13, 1.14, 1.12, 1.15];
//!
//! let sma_result = sma(&closes, 3).unwrap();
//! let ema_result = ema(&closes, 3).unwrap();
//! let bands = bollinger(&closes, 4, 2.0).unwrap();
//!
//! assert_eq!(sma_result.len(), closes.len());
//! assert!(ema_result[2].is_some());
//! assert!(bands.upper[3] >= bands.lower[3]);
//! ```

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::SeriesElement;

// Data model
pub use crate::candle::{Candle, CandleColumns, PriceSource};
pub use crate::config::EngineConfig;
pub use crate::series::{BandOutput, Series};

// Indicator functions
pub use crate::indicators::{
    ad, atr, bollinger, cci, donchian, ema, ichimoku, keltner, macd, mfi, mom, obv, rsi, sar, sma,
    stddev, stochastic, true_range, vwap, williams_r, wma,
};

// Multi-output types
pub use crate::indicators::{IchimokuOutput, MacdOutput, StochasticOutput};

// Configuration types
pub use crate::indicators::{
    Atr, Bollinger, Cci, Donchian, Ema, Ichimoku, Keltner, Macd, Mfi, Momentum, ParabolicSar, Rsi,
    Sma, StdDev, Stochastic, WilliamsR, Wma,
};

// Lookback functions
pub use crate::indicators::{
    atr_lookback, bollinger_lookback, cci_lookback, donchian_lookback, ema_lookback,
    macd_line_lookback, macd_signal_lookback, mfi_lookback, mom_lookback, rsi_lookback,
    sar_lookback, sma_lookback, stddev_lookback, stochastic_d_lookback, stochastic_k_lookback,
    williams_r_lookback, wma_lookback,
};

// Rolling extrema functions
pub use crate::kernels::rolling_extrema::{rolling_max, rolling_min};

// Dispatch
pub use crate::batch::BatchProcessor;
pub use crate::plan::{
    DirectExecutor, IndicatorKind, IndicatorOutput, IndicatorRequest, IndicatorSet, IndicatorSpec,
    MemoizedExecutor, Pane, Registry,
};
