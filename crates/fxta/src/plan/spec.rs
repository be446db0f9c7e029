//! Indicator specification types.
//!
//! [`IndicatorKind`] names the closed set of supported indicators together
//! with their dashboard metadata (identifier, display name, pane, category,
//! display precision). [`IndicatorSpec`] is one configured instance: a kind
//! plus its typed parameter struct. [`IndicatorOutput`] is the fixed-shape
//! result each kind produces.
//!
//! # Example
//!
//! ```
//! use fxta::indicators::Bollinger;
//! use fxta::plan::spec::{IndicatorKind, IndicatorSpec, Pane};
//!
//! let spec = IndicatorSpec::Bollinger(Bollinger::new().period(10));
//! assert_eq!(spec.kind(), IndicatorKind::Bollinger);
//! assert_eq!(spec.pane(), Pane::Overlay);
//! assert_eq!(spec.kind().component_names(), &["upper", "middle", "lower"]);
//!
//! let default_rsi = IndicatorSpec::default_for(IndicatorKind::Rsi);
//! assert_eq!(default_rsi.params(), vec![("period", 14.0)]);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::candle::CandleColumns;
use crate::error::{Error, Result};
use crate::indicators::{
    ad, obv, vwap, Atr, Bollinger, Cci, Donchian, Ema, Ichimoku, IchimokuOutput, Keltner, Macd,
    MacdOutput, Mfi, Momentum, ParabolicSar, Rsi, Sma, StdDev, Stochastic, StochasticOutput,
    WilliamsR, Wma,
};
use crate::series::{BandOutput, Series};

/// Where a chart draws an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pane {
    /// Drawn on the price chart, sharing its scale.
    Overlay,
    /// Drawn in a separate sub-chart with its own scale.
    Oscillator,
}

impl Pane {
    /// Lowercase name of the pane.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Overlay => "overlay",
            Self::Oscillator => "oscillator",
        }
    }
}

impl fmt::Display for Pane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Catalog grouping of an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Price-following overlays.
    Trend,
    /// Bounded or zero-centred momentum oscillators.
    Oscillator,
    /// Cumulative volume indicators.
    Volume,
    /// Dispersion measures.
    Volatility,
}

impl Category {
    /// Lowercase name of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Trend => "trend",
            Self::Oscillator => "oscillator",
            Self::Volume => "volume",
            Self::Volatility => "volatility",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enumeration of supported indicator types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    /// Simple Moving Average
    Sma,
    /// Exponential Moving Average
    Ema,
    /// Weighted Moving Average
    Wma,
    /// Bollinger Bands
    Bollinger,
    /// Volume Weighted Average Price
    Vwap,
    /// Keltner Channels
    Keltner,
    /// Donchian Channels
    Donchian,
    /// Ichimoku Cloud
    Ichimoku,
    /// Parabolic SAR
    ParabolicSar,
    /// Relative Strength Index
    Rsi,
    /// Moving Average Convergence Divergence
    Macd,
    /// Stochastic Oscillator
    Stochastic,
    /// Commodity Channel Index
    Cci,
    /// Williams %R
    WilliamsR,
    /// Momentum
    Momentum,
    /// Average True Range
    Atr,
    /// Money Flow Index
    Mfi,
    /// On-Balance Volume
    Obv,
    /// Accumulation/Distribution Line
    AdLine,
    /// Rolling Standard Deviation
    StdDev,
}

impl IndicatorKind {
    /// Every kind, in catalog order.
    pub const ALL: [Self; 20] = [
        Self::Sma,
        Self::Ema,
        Self::Wma,
        Self::Bollinger,
        Self::Vwap,
        Self::Keltner,
        Self::Donchian,
        Self::Ichimoku,
        Self::ParabolicSar,
        Self::Rsi,
        Self::Macd,
        Self::Stochastic,
        Self::Cci,
        Self::WilliamsR,
        Self::Momentum,
        Self::Atr,
        Self::Mfi,
        Self::Obv,
        Self::AdLine,
        Self::StdDev,
    ];

    /// Canonical request identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Sma => "sma",
            Self::Ema => "ema",
            Self::Wma => "wma",
            Self::Bollinger => "bollinger",
            Self::Vwap => "vwap",
            Self::Keltner => "keltner",
            Self::Donchian => "donchian",
            Self::Ichimoku => "ichimoku",
            Self::ParabolicSar => "parabolic",
            Self::Rsi => "rsi",
            Self::Macd => "macd",
            Self::Stochastic => "stochastic",
            Self::Cci => "cci",
            Self::WilliamsR => "williams",
            Self::Momentum => "momentum",
            Self::Atr => "atr",
            Self::Mfi => "mfi",
            Self::Obv => "obv",
            Self::AdLine => "adl",
            Self::StdDev => "stddev",
        }
    }

    /// Looks up a kind by its canonical identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    /// Returns the display name of the indicator.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sma => "SMA",
            Self::Ema => "EMA",
            Self::Wma => "WMA",
            Self::Bollinger => "Bollinger Bands",
            Self::Vwap => "VWAP",
            Self::Keltner => "Keltner Channels",
            Self::Donchian => "Donchian Channels",
            Self::Ichimoku => "Ichimoku Cloud",
            Self::ParabolicSar => "Parabolic SAR",
            Self::Rsi => "RSI",
            Self::Macd => "MACD",
            Self::Stochastic => "Stochastic",
            Self::Cci => "CCI",
            Self::WilliamsR => "Williams %R",
            Self::Momentum => "Momentum",
            Self::Atr => "ATR",
            Self::Mfi => "MFI",
            Self::Obv => "OBV",
            Self::AdLine => "A/D Line",
            Self::StdDev => "Std Dev",
        }
    }

    /// One-line description for catalog listings.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Sma => "Simple Moving Average",
            Self::Ema => "Exponential Moving Average",
            Self::Wma => "Weighted Moving Average",
            Self::Bollinger => "Volatility bands",
            Self::Vwap => "Volume Weighted Average Price",
            Self::Keltner => "Volatility envelope",
            Self::Donchian => "High/Low channels",
            Self::Ichimoku => "Support/Resistance",
            Self::ParabolicSar => "Trend direction",
            Self::Rsi => "Relative Strength Index",
            Self::Macd => "Moving Average Convergence Divergence",
            Self::Stochastic => "Momentum oscillator",
            Self::Cci => "Commodity Channel Index",
            Self::WilliamsR => "Momentum indicator",
            Self::Momentum => "Rate of price change",
            Self::Atr => "Average True Range",
            Self::Mfi => "Money Flow Index",
            Self::Obv => "On-Balance Volume",
            Self::AdLine => "Accumulation/Distribution",
            Self::StdDev => "Rolling standard deviation",
        }
    }

    /// Pane the indicator is drawn in.
    #[must_use]
    pub const fn pane(self) -> Pane {
        match self {
            Self::Sma
            | Self::Ema
            | Self::Wma
            | Self::Bollinger
            | Self::Vwap
            | Self::Keltner
            | Self::Donchian
            | Self::Ichimoku
            | Self::ParabolicSar => Pane::Overlay,
            _ => Pane::Oscillator,
        }
    }

    /// Catalog category.
    #[must_use]
    pub const fn category(self) -> Category {
        match self.pane() {
            Pane::Overlay => Category::Trend,
            Pane::Oscillator => match self {
                Self::Obv | Self::AdLine => Category::Volume,
                Self::StdDev => Category::Volatility,
                _ => Category::Oscillator,
            },
        }
    }

    /// Decimal places the dashboard displays for this indicator's values.
    ///
    /// Informational only; computed values are never rounded.
    #[must_use]
    pub const fn display_precision(self) -> usize {
        match self {
            Self::Rsi | Self::Stochastic | Self::Cci | Self::WilliamsR | Self::Mfi => 2,
            Self::Macd | Self::Atr | Self::Momentum | Self::StdDev => 6,
            Self::AdLine | Self::Obv => 0,
            _ => 5,
        }
    }

    /// Names of the output components, in output order.
    #[must_use]
    pub const fn component_names(self) -> &'static [&'static str] {
        match self {
            Self::Bollinger | Self::Keltner | Self::Donchian => &["upper", "middle", "lower"],
            Self::Macd => &["macd", "signal", "histogram"],
            Self::Stochastic => &["k", "d"],
            Self::Ichimoku => &["tenkan", "kijun", "senkou_a", "senkou_b", "chikou"],
            _ => &["value"],
        }
    }

    /// Returns the number of output series produced by this indicator.
    #[must_use]
    pub const fn output_count(self) -> usize {
        self.component_names().len()
    }

    /// Names of the parameters this indicator accepts, in display order.
    #[must_use]
    pub const fn param_names(self) -> &'static [&'static str] {
        match self {
            Self::Sma
            | Self::Ema
            | Self::Wma
            | Self::Donchian
            | Self::Rsi
            | Self::Cci
            | Self::WilliamsR
            | Self::Momentum
            | Self::Atr
            | Self::Mfi
            | Self::StdDev => &["period"],
            Self::Bollinger => &["period", "multiplier"],
            Self::Keltner => &["ema_period", "atr_period", "multiplier"],
            Self::Ichimoku => &["tenkan", "kijun", "senkou_b"],
            Self::ParabolicSar => &["af_start", "af_step", "af_max"],
            Self::Macd => &["fast", "slow", "signal"],
            Self::Stochastic => &["k_period", "d_period"],
            Self::Vwap | Self::Obv | Self::AdLine => &[],
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A configured indicator: its kind plus typed parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorSpec {
    /// Simple Moving Average
    Sma(Sma),
    /// Exponential Moving Average
    Ema(Ema),
    /// Weighted Moving Average
    Wma(Wma),
    /// Bollinger Bands
    Bollinger(Bollinger),
    /// Volume Weighted Average Price
    Vwap,
    /// Keltner Channels
    Keltner(Keltner),
    /// Donchian Channels
    Donchian(Donchian),
    /// Ichimoku Cloud
    Ichimoku(Ichimoku),
    /// Parabolic SAR
    ParabolicSar(ParabolicSar),
    /// Relative Strength Index
    Rsi(Rsi),
    /// MACD
    Macd(Macd),
    /// Stochastic Oscillator
    Stochastic(Stochastic),
    /// Commodity Channel Index
    Cci(Cci),
    /// Williams %R
    WilliamsR(WilliamsR),
    /// Momentum
    Momentum(Momentum),
    /// Average True Range
    Atr(Atr),
    /// Money Flow Index
    Mfi(Mfi),
    /// On-Balance Volume
    Obv,
    /// Accumulation/Distribution Line
    AdLine,
    /// Rolling Standard Deviation
    StdDev(StdDev),
}

impl IndicatorSpec {
    /// `kind` configured with its default parameters.
    #[must_use]
    pub fn default_for(kind: IndicatorKind) -> Self {
        match kind {
            IndicatorKind::Sma => Self::Sma(Sma::default()),
            IndicatorKind::Ema => Self::Ema(Ema::default()),
            IndicatorKind::Wma => Self::Wma(Wma::default()),
            IndicatorKind::Bollinger => Self::Bollinger(Bollinger::default()),
            IndicatorKind::Vwap => Self::Vwap,
            IndicatorKind::Keltner => Self::Keltner(Keltner::default()),
            IndicatorKind::Donchian => Self::Donchian(Donchian::default()),
            IndicatorKind::Ichimoku => Self::Ichimoku(Ichimoku::default()),
            IndicatorKind::ParabolicSar => Self::ParabolicSar(ParabolicSar::default()),
            IndicatorKind::Rsi => Self::Rsi(Rsi::default()),
            IndicatorKind::Macd => Self::Macd(Macd::default()),
            IndicatorKind::Stochastic => Self::Stochastic(Stochastic::default()),
            IndicatorKind::Cci => Self::Cci(Cci::default()),
            IndicatorKind::WilliamsR => Self::WilliamsR(WilliamsR::default()),
            IndicatorKind::Momentum => Self::Momentum(Momentum::default()),
            IndicatorKind::Atr => Self::Atr(Atr::default()),
            IndicatorKind::Mfi => Self::Mfi(Mfi::default()),
            IndicatorKind::Obv => Self::Obv,
            IndicatorKind::AdLine => Self::AdLine,
            IndicatorKind::StdDev => Self::StdDev(StdDev::default()),
        }
    }

    /// The kind of this spec.
    #[must_use]
    pub const fn kind(&self) -> IndicatorKind {
        match self {
            Self::Sma(_) => IndicatorKind::Sma,
            Self::Ema(_) => IndicatorKind::Ema,
            Self::Wma(_) => IndicatorKind::Wma,
            Self::Bollinger(_) => IndicatorKind::Bollinger,
            Self::Vwap => IndicatorKind::Vwap,
            Self::Keltner(_) => IndicatorKind::Keltner,
            Self::Donchian(_) => IndicatorKind::Donchian,
            Self::Ichimoku(_) => IndicatorKind::Ichimoku,
            Self::ParabolicSar(_) => IndicatorKind::ParabolicSar,
            Self::Rsi(_) => IndicatorKind::Rsi,
            Self::Macd(_) => IndicatorKind::Macd,
            Self::Stochastic(_) => IndicatorKind::Stochastic,
            Self::Cci(_) => IndicatorKind::Cci,
            Self::WilliamsR(_) => IndicatorKind::WilliamsR,
            Self::Momentum(_) => IndicatorKind::Momentum,
            Self::Atr(_) => IndicatorKind::Atr,
            Self::Mfi(_) => IndicatorKind::Mfi,
            Self::Obv => IndicatorKind::Obv,
            Self::AdLine => IndicatorKind::AdLine,
            Self::StdDev(_) => IndicatorKind::StdDev,
        }
    }

    /// Pane the indicator is drawn in.
    #[must_use]
    pub const fn pane(&self) -> Pane {
        self.kind().pane()
    }

    /// Current parameter values, named as in [`IndicatorKind::param_names`].
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, f64)> {
        match self {
            Self::Sma(c) => vec![("period", c.get_period() as f64)],
            Self::Ema(c) => vec![("period", c.get_period() as f64)],
            Self::Wma(c) => vec![("period", c.get_period() as f64)],
            Self::Bollinger(c) => vec![
                ("period", c.get_period() as f64),
                ("multiplier", c.get_multiplier()),
            ],
            Self::Keltner(c) => vec![
                ("ema_period", c.get_ema_period() as f64),
                ("atr_period", c.get_atr_period() as f64),
                ("multiplier", c.get_multiplier()),
            ],
            Self::Donchian(c) => vec![("period", c.get_period() as f64)],
            Self::Ichimoku(c) => vec![
                ("tenkan", c.get_tenkan() as f64),
                ("kijun", c.get_kijun() as f64),
                ("senkou_b", c.get_senkou_b() as f64),
            ],
            Self::ParabolicSar(c) => vec![
                ("af_start", c.get_af_start()),
                ("af_step", c.get_af_step()),
                ("af_max", c.get_af_max()),
            ],
            Self::Rsi(c) => vec![("period", c.get_period() as f64)],
            Self::Macd(c) => vec![
                ("fast", c.get_fast_period() as f64),
                ("slow", c.get_slow_period() as f64),
                ("signal", c.get_signal_period() as f64),
            ],
            Self::Stochastic(c) => vec![
                ("k_period", c.get_k_period() as f64),
                ("d_period", c.get_d_period() as f64),
            ],
            Self::Cci(c) => vec![("period", c.get_period() as f64)],
            Self::WilliamsR(c) => vec![("period", c.get_period() as f64)],
            Self::Momentum(c) => vec![("period", c.get_period() as f64)],
            Self::Atr(c) => vec![("period", c.get_period() as f64)],
            Self::Mfi(c) => vec![("period", c.get_period() as f64)],
            Self::StdDev(c) => vec![("period", c.get_period() as f64)],
            Self::Vwap | Self::Obv | Self::AdLine => Vec::new(),
        }
    }

    /// Returns a copy with one named parameter replaced.
    ///
    /// Period parameters must be whole numbers of at least 1; the
    /// multiplier and acceleration-factor parameters must be finite and
    /// positive.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if the indicator has no parameter
    /// called `name`, or `value` is outside its domain.
    ///
    /// # Example
    ///
    /// ```
    /// use fxta::plan::spec::{IndicatorKind, IndicatorSpec};
    ///
    /// let macd = IndicatorSpec::default_for(IndicatorKind::Macd)
    ///     .with_param("fast", 8.0)
    ///     .unwrap();
    /// assert_eq!(macd.params()[0], ("fast", 8.0));
    ///
    /// assert!(macd.with_param("fast", 2.5).is_err());
    /// assert!(macd.with_param("period", 10.0).is_err());
    /// ```
    pub fn with_param(&self, name: &str, value: f64) -> Result<Self> {
        let kind = self.kind();
        let period = || whole_period(kind, name, value);
        let factor = || positive_factor(kind, name, value);

        let spec = match (*self, name) {
            (Self::Sma(c), "period") => Self::Sma(c.period(period()?)),
            (Self::Ema(c), "period") => Self::Ema(c.period(period()?)),
            (Self::Wma(c), "period") => Self::Wma(c.period(period()?)),
            (Self::StdDev(c), "period") => Self::StdDev(c.period(period()?)),
            (Self::Rsi(c), "period") => Self::Rsi(c.period(period()?)),
            (Self::Momentum(c), "period") => Self::Momentum(c.period(period()?)),
            (Self::Donchian(c), "period") => Self::Donchian(c.period(period()?)),
            (Self::Cci(c), "period") => Self::Cci(c.period(period()?)),
            (Self::WilliamsR(c), "period") => Self::WilliamsR(c.period(period()?)),
            (Self::Atr(c), "period") => Self::Atr(c.period(period()?)),
            (Self::Mfi(c), "period") => Self::Mfi(c.period(period()?)),
            (Self::Bollinger(c), "period") => Self::Bollinger(c.period(period()?)),
            (Self::Bollinger(c), "multiplier") => Self::Bollinger(c.multiplier(factor()?)),
            (Self::Keltner(c), "ema_period") => Self::Keltner(c.ema_period(period()?)),
            (Self::Keltner(c), "atr_period") => Self::Keltner(c.atr_period(period()?)),
            (Self::Keltner(c), "multiplier") => Self::Keltner(c.multiplier(factor()?)),
            (Self::Ichimoku(c), "tenkan") => Self::Ichimoku(c.tenkan(period()?)),
            (Self::Ichimoku(c), "kijun") => Self::Ichimoku(c.kijun(period()?)),
            (Self::Ichimoku(c), "senkou_b") => Self::Ichimoku(c.senkou_b(period()?)),
            (Self::ParabolicSar(c), "af_start") => Self::ParabolicSar(c.af_start(factor()?)),
            (Self::ParabolicSar(c), "af_step") => Self::ParabolicSar(c.af_step(factor()?)),
            (Self::ParabolicSar(c), "af_max") => Self::ParabolicSar(c.af_max(factor()?)),
            (Self::Macd(c), "fast") => Self::Macd(c.fast_period(period()?)),
            (Self::Macd(c), "slow") => Self::Macd(c.slow_period(period()?)),
            (Self::Macd(c), "signal") => Self::Macd(c.signal_period(period()?)),
            (Self::Stochastic(c), "k_period") => Self::Stochastic(c.k_period(period()?)),
            (Self::Stochastic(c), "d_period") => Self::Stochastic(c.d_period(period()?)),
            _ => {
                return Err(Error::InvalidParameter {
                    indicator: kind.id().to_string(),
                    name: name.to_string(),
                    value,
                    reason: "unknown parameter",
                })
            }
        };
        Ok(spec)
    }

    /// Computes this indicator over a candle column view.
    ///
    /// `price` is the column single-series indicators read (see
    /// [`PriceSource`](crate::candle::PriceSource)); it must have the same
    /// length as `columns`.
    ///
    /// # Errors
    ///
    /// Returns the indicator's error for invalid periods or mismatched
    /// lengths.
    pub fn compute(&self, columns: &CandleColumns, price: &[f64]) -> Result<IndicatorOutput> {
        let (high, low, close, volume) = (&columns.high, &columns.low, &columns.close, &columns.volume);
        let output = match self {
            Self::Sma(c) => IndicatorOutput::Line(c.compute(price)?),
            Self::Ema(c) => IndicatorOutput::Line(c.compute(price)?),
            Self::Wma(c) => IndicatorOutput::Line(c.compute(price)?),
            Self::StdDev(c) => IndicatorOutput::Line(c.compute(price)?),
            Self::Rsi(c) => IndicatorOutput::Line(c.compute(price)?),
            Self::Momentum(c) => IndicatorOutput::Line(c.compute(price)?),
            Self::Bollinger(c) => IndicatorOutput::Bands(c.compute(price)?),
            Self::Macd(c) => IndicatorOutput::Macd(c.compute(price)?),
            Self::Keltner(c) => IndicatorOutput::Bands(c.compute(high, low, close)?),
            Self::Donchian(c) => IndicatorOutput::Bands(c.compute(high, low)?),
            Self::Ichimoku(c) => IndicatorOutput::Ichimoku(c.compute(high, low, close)?),
            Self::ParabolicSar(c) => IndicatorOutput::Line(c.compute(high, low)?),
            Self::Stochastic(c) => IndicatorOutput::Stochastic(c.compute(high, low, close)?),
            Self::Cci(c) => IndicatorOutput::Line(c.compute(high, low, close)?),
            Self::WilliamsR(c) => IndicatorOutput::Line(c.compute(high, low, close)?),
            Self::Atr(c) => IndicatorOutput::Line(c.compute(high, low, close)?),
            Self::Mfi(c) => IndicatorOutput::Line(c.compute(high, low, close, volume)?),
            Self::Vwap => IndicatorOutput::Line(vwap(high, low, close, volume)?),
            Self::Obv => IndicatorOutput::Line(obv(close, volume)?),
            Self::AdLine => IndicatorOutput::Line(ad(high, low, close, volume)?),
        };
        Ok(output)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_period(kind: IndicatorKind, name: &str, value: f64) -> Result<usize> {
    if !value.is_finite() || value < 1.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(Error::InvalidParameter {
            indicator: kind.id().to_string(),
            name: name.to_string(),
            value,
            reason: "periods must be whole numbers of at least 1",
        });
    }
    Ok(value as usize)
}

fn positive_factor(kind: IndicatorKind, name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidParameter {
            indicator: kind.id().to_string(),
            name: name.to_string(),
            value,
            reason: "must be finite and greater than 0",
        });
    }
    Ok(value)
}

/// Result of computing one indicator. The shape is fixed per kind.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorOutput<T = f64> {
    /// A single line.
    Line(Series<T>),
    /// Upper, middle and lower band.
    Bands(BandOutput<T>),
    /// MACD line, signal and histogram.
    Macd(MacdOutput<T>),
    /// %K and %D.
    Stochastic(StochasticOutput<T>),
    /// The five Ichimoku lines.
    Ichimoku(IchimokuOutput<T>),
}

impl<T> IndicatorOutput<T> {
    /// Output components as `(name, series)` pairs, in output order.
    #[must_use]
    pub fn components(&self) -> Vec<(&'static str, &Series<T>)> {
        match self {
            Self::Line(line) => vec![("value", line)],
            Self::Bands(b) => vec![("upper", &b.upper), ("middle", &b.middle), ("lower", &b.lower)],
            Self::Macd(m) => vec![
                ("macd", &m.macd_line),
                ("signal", &m.signal_line),
                ("histogram", &m.histogram),
            ],
            Self::Stochastic(s) => vec![("k", &s.k), ("d", &s.d)],
            Self::Ichimoku(i) => vec![
                ("tenkan", &i.tenkan),
                ("kijun", &i.kijun),
                ("senkou_a", &i.senkou_a),
                ("senkou_b", &i.senkou_b),
                ("chikou", &i.chikou),
            ],
        }
    }

    /// Looks up one component by name.
    #[must_use]
    pub fn component(&self, name: &str) -> Option<&Series<T>> {
        self.components()
            .into_iter()
            .find_map(|(n, series)| (n == name).then_some(series))
    }

    /// The series of a single-line output.
    #[must_use]
    pub const fn as_line(&self) -> Option<&Series<T>> {
        match self {
            Self::Line(line) => Some(line),
            _ => None,
        }
    }

    /// Length shared by every component.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Line(line) => line.len(),
            Self::Bands(b) => b.middle.len(),
            Self::Macd(m) => m.macd_line.len(),
            Self::Stochastic(s) => s.k.len(),
            Self::Ichimoku(i) => i.chikou.len(),
        }
    }

    /// Returns true if the output covers no candles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
