//! Engine configuration.
//!
//! [`EngineConfig`] is passed explicitly into every executor; nothing in the
//! crate reads global state. The struct is serde-friendly so front ends can
//! load it from a file, and every field has a default so partial documents
//! deserialize.
//!
//! ```
//! use fxta::config::EngineConfig;
//! use fxta::candle::PriceSource;
//!
//! let config: EngineConfig = serde_json::from_str(r#"{ "price_source": "typical" }"#).unwrap();
//! assert!(config.validate_candles);
//! assert_eq!(config.price_source, PriceSource::Typical);
//! ```

use serde::{Deserialize, Serialize};

use crate::candle::PriceSource;

/// Options shared by every indicator computed in one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Reject candles that violate the OHLCV invariants before computing.
    pub validate_candles: bool,
    /// Price column fed to single-series indicators (SMA, EMA, WMA, standard
    /// deviation, RSI, momentum, Bollinger Bands, MACD).
    pub price_source: PriceSource,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            validate_candles: true,
            price_source: PriceSource::Close,
        }
    }
}

impl EngineConfig {
    /// Sets whether candles are validated before computing.
    #[must_use]
    pub const fn with_validation(mut self, validate: bool) -> Self {
        self.validate_candles = validate;
        self
    }

    /// Sets the price column for single-series indicators.
    #[must_use]
    pub const fn with_price_source(mut self, source: PriceSource) -> Self {
        self.price_source = source;
        self
    }
}
