//! OHLCV candles and their column view.
//!
//! Candles are produced by an upstream collaborator (a market-data feed or
//! the dashboard's mock generator) and read by the engine. Indicators work on
//! columns, so [`CandleColumns`] splits a candle slice into one vector per
//! field, following a columnar layout.
//!
//! # Example
//!
//! ```
//! use fxta::candle::{Candle, CandleColumns, PriceSource};
//!
//! let candles = vec![
//!     Candle::new(60, 1.0, 3.0, 0.0, 2.0, 10.0),
//!     Candle::new(120, 2.0, 4.0, 1.0, 3.0, 20.0),
//! ];
//! let columns = CandleColumns::from_candles(&candles);
//!
//! assert_eq!(columns.close, vec![2.0, 3.0]);
//! assert_eq!(columns.price(PriceSource::Median), vec![1.5, 2.5]);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One time interval's open, high, low and close price plus traded volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Interval start, epoch seconds.
    pub time: i64,
    /// Opening price.
    pub open: f64,
    /// Highest traded price.
    pub high: f64,
    /// Lowest traded price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume, never negative.
    pub volume: f64,
}

impl Candle {
    /// Creates a candle from its fields.
    #[must_use]
    pub const fn new(time: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Typical price: `(high + low + close) / 3`.
    #[inline]
    #[must_use]
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    /// Checks the per-candle invariants, ignoring ordering against neighbours.
    fn check(&self) -> std::result::Result<(), String> {
        let fields = [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
            ("volume", self.volume),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("{name} is not finite ({value})"));
        }
        if self.high < self.low {
            return Err(format!("high {} is below low {}", self.high, self.low));
        }
        let body_low = self.open.min(self.close);
        let body_high = self.open.max(self.close);
        if body_low < self.low {
            return Err(format!(
                "open/close {body_low} is below low {}",
                self.low
            ));
        }
        if body_high > self.high {
            return Err(format!(
                "open/close {body_high} is above high {}",
                self.high
            ));
        }
        if self.volume < 0.0 {
            return Err(format!("volume {} is negative", self.volume));
        }
        Ok(())
    }
}

/// Validates a candle sequence against the OHLCV invariants.
///
/// Checks, per candle, `low ≤ min(open, close) ≤ max(open, close) ≤ high`,
/// finite prices and non-negative volume, and across the sequence that `time`
/// is strictly increasing.
///
/// # Errors
///
/// Returns `Error::MalformedCandle` for the first candle that violates an
/// invariant.
///
/// # Example
///
/// ```
/// use fxta::candle::{validate_candles, Candle};
///
/// let good = [Candle::new(1, 1.0, 2.0, 0.5, 1.5, 10.0)];
/// assert!(validate_candles(&good).is_ok());
///
/// let inverted = [Candle::new(1, 1.0, 0.5, 2.0, 1.5, 10.0)];
/// assert!(validate_candles(&inverted).is_err());
/// ```
pub fn validate_candles(candles: &[Candle]) -> Result<()> {
    for (index, candle) in candles.iter().enumerate() {
        candle
            .check()
            .map_err(|reason| Error::MalformedCandle { index, reason })?;

        if index > 0 {
            let prev = candles[index - 1].time;
            if candle.time <= prev {
                return Err(Error::MalformedCandle {
                    index,
                    reason: format!("time {} does not follow previous time {prev}", candle.time),
                });
            }
        }
    }
    Ok(())
}

/// Which price column feeds the single-series indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    /// Closing price.
    #[default]
    Close,
    /// Opening price.
    Open,
    /// High price.
    High,
    /// Low price.
    Low,
    /// `(high + low + close) / 3`.
    Typical,
    /// `(high + low) / 2`.
    Median,
}

impl PriceSource {
    /// Lowercase name of the source.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Typical => "typical",
            Self::Median => "median",
        }
    }
}

impl std::str::FromStr for PriceSource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "close" => Ok(Self::Close),
            "open" => Ok(Self::Open),
            "high" => Ok(Self::High),
            "low" => Ok(Self::Low),
            "typical" | "hlc3" => Ok(Self::Typical),
            "median" | "hl2" => Ok(Self::Median),
            other => Err(format!(
                "unknown price source '{other}' (expected close, open, high, low, typical or median)"
            )),
        }
    }
}

/// Columnar view of a candle slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandleColumns {
    /// Interval start times.
    pub time: Vec<i64>,
    /// Opening prices.
    pub open: Vec<f64>,
    /// High prices.
    pub high: Vec<f64>,
    /// Low prices.
    pub low: Vec<f64>,
    /// Closing prices.
    pub close: Vec<f64>,
    /// Volumes.
    pub volume: Vec<f64>,
}

impl CandleColumns {
    /// Splits candles into columns.
    #[must_use]
    pub fn from_candles(candles: &[Candle]) -> Self {
        let n = candles.len();
        let mut columns = Self {
            time: Vec::with_capacity(n),
            open: Vec::with_capacity(n),
            high: Vec::with_capacity(n),
            low: Vec::with_capacity(n),
            close: Vec::with_capacity(n),
            volume: Vec::with_capacity(n),
        };
        for c in candles {
            columns.time.push(c.time);
            columns.open.push(c.open);
            columns.high.push(c.high);
            columns.low.push(c.low);
            columns.close.push(c.close);
            columns.volume.push(c.volume);
        }
        columns
    }

    /// Returns the number of candles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Returns true if there are no candles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Typical price column, `(high + low + close) / 3`.
    #[must_use]
    pub fn typical(&self) -> Vec<f64> {
        typical_prices(&self.high, &self.low, &self.close)
    }

    /// Median price column, `(high + low) / 2`.
    #[must_use]
    pub fn median(&self) -> Vec<f64> {
        self.high
            .iter()
            .zip(&self.low)
            .map(|(h, l)| (h + l) / 2.0)
            .collect()
    }

    /// The price column selected by `source`.
    #[must_use]
    pub fn price(&self, source: PriceSource) -> Vec<f64> {
        match source {
            PriceSource::Close => self.close.clone(),
            PriceSource::Open => self.open.clone(),
            PriceSource::High => self.high.clone(),
            PriceSource::Low => self.low.clone(),
            PriceSource::Typical => self.typical(),
            PriceSource::Median => self.median(),
        }
    }
}

/// Typical price `(high + low + close) / 3` for aligned columns.
///
/// Used by CCI, MFI and VWAP. The caller guarantees equal lengths; extra
/// elements in longer slices are ignored.
#[must_use]
pub fn typical_prices<T: crate::traits::SeriesElement>(high: &[T], low: &[T], close: &[T]) -> Vec<T> {
    high.iter()
        .zip(low)
        .zip(close)
        .map(|((&h, &l), &c)| (h + l + c) / T::three())
        .collect()
}
