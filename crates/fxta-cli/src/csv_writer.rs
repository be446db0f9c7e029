//! Output writers for candles and computed indicators.
//!
//! # CSV Layout
//!
//! One row per candle. The first column is `time`, followed by one column
//! per indicator component: `<id>` for single-line indicators and
//! `<id>.<component>` for multi-output ones (`BB.upper`, `macd.signal`).
//! Undefined (warm-up) values are written as empty cells.
//!
//! # JSON Layout
//!
//! An array with one object per indicator:
//!
//! ```json
//! [{"id": "rsi", "kind": "rsi", "pane": "oscillator",
//!   "params": {"period": 14.0}, "components": {"value": [null, 51.2]}}]
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use csv::WriterBuilder;
use fxta::plan::{ComputedIndicator, IndicatorSet, Pane};
use fxta::Candle;
use serde::{Serialize, Serializer};

use crate::error::{CliError, Result};

/// Where output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDest {
    /// Standard output.
    Stdout,
    /// A file, created or truncated.
    File(PathBuf),
}

impl OutputDest {
    /// `None` means stdout.
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// Opens the destination for writing.
    ///
    /// # Errors
    ///
    /// Returns `CliError::FileError` if the file cannot be created.
    pub fn writer(&self) -> Result<Box<dyn Write>> {
        match self {
            Self::Stdout => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
            Self::File(path) => {
                let file = File::create(path).map_err(|source| CliError::FileError {
                    path: path.display().to_string(),
                    source,
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

/// Rounds `value` to `digits` decimal places.
#[must_use]
pub fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10_f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    if scale.is_finite() {
        (value * scale).round() / scale
    } else {
        value
    }
}

/// Writes candles as `time,open,high,low,close,volume` CSV.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_candles_csv<W: Write>(candles: &[Candle], writer: W) -> Result<()> {
    let mut csv = WriterBuilder::new().from_writer(writer);
    csv.write_record(["time", "open", "high", "low", "close", "volume"])?;
    for c in candles {
        csv.write_record([
            c.time.to_string(),
            c.open.to_string(),
            c.high.to_string(),
            c.low.to_string(),
            c.close.to_string(),
            c.volume.to_string(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Column prefix per indicator: the requested id, or, when an id occurs more
/// than once, the id with its parameters (`sma(period=5)`), numbered if even
/// that repeats.
fn indicator_labels(set: &IndicatorSet) -> Vec<String> {
    let count = |id: &str| set.iter().filter(|other| other.id == id).count();
    let mut seen: HashMap<String, usize> = HashMap::new();
    set.iter()
        .map(|indicator| {
            let mut label = indicator.id.clone();
            if count(&indicator.id) > 1 {
                let params: Vec<String> = indicator
                    .spec
                    .params()
                    .into_iter()
                    .map(|(name, value)| format!("{name}={value}"))
                    .collect();
                label = format!("{label}({})", params.join(","));
            }
            let n = seen.entry(label.clone()).or_insert(0);
            *n += 1;
            if *n > 1 {
                label = format!("{label}#{n}");
            }
            label
        })
        .collect()
}

fn column_name(indicator: &ComputedIndicator, label: &str, component: &str) -> String {
    if indicator.kind().output_count() == 1 {
        label.to_string()
    } else {
        format!("{label}.{component}")
    }
}

/// Writes computed indicators as CSV aligned with `times`.
///
/// `round` limits the number of decimals; `None` writes full precision.
///
/// # Errors
///
/// Returns an error if writing fails or a series length differs from
/// `times`.
pub fn write_indicators_csv<W: Write>(
    times: &[i64],
    set: &IndicatorSet,
    round: Option<u32>,
    writer: W,
) -> Result<()> {
    let mut header = vec!["time".to_string()];
    let mut columns = Vec::new();
    for (indicator, label) in set.iter().zip(indicator_labels(set)) {
        for (name, series) in indicator.output.components() {
            if series.len() != times.len() {
                return Err(fxta::Error::LengthMismatch {
                    description: format!(
                        "{} has {} values for {} candles",
                        column_name(indicator, &label, name),
                        series.len(),
                        times.len()
                    ),
                }
                .into());
            }
            header.push(column_name(indicator, &label, name));
            columns.push(series);
        }
    }

    let mut csv = WriterBuilder::new().from_writer(writer);
    csv.write_record(&header)?;
    for (row, time) in times.iter().enumerate() {
        let mut record = Vec::with_capacity(header.len());
        record.push(time.to_string());
        record.extend(columns.iter().map(|series| match series[row] {
            Some(v) => round.map_or(v, |d| round_to(v, d)).to_string(),
            None => String::new(),
        }));
        csv.write_record(&record)?;
    }
    csv.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonIndicator<'a> {
    id: &'a str,
    kind: &'static str,
    pane: Pane,
    #[serde(serialize_with = "ordered_map")]
    params: Vec<(&'static str, f64)>,
    #[serde(serialize_with = "ordered_map")]
    components: Vec<(&'static str, Vec<Option<f64>>)>,
}

/// Serializes pairs as a JSON object, keeping their order.
fn ordered_map<S, V>(
    pairs: &[(&'static str, V)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize,
{
    serializer.collect_map(pairs.iter().map(|(name, value)| (name, value)))
}

/// Writes computed indicators as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_indicators_json<W: Write>(set: &IndicatorSet, round: Option<u32>, mut writer: W) -> Result<()> {
    let entries: Vec<JsonIndicator<'_>> = set
        .iter()
        .map(|indicator| JsonIndicator {
            id: &indicator.id,
            kind: indicator.kind().id(),
            pane: indicator.pane,
            params: indicator.spec.params(),
            components: indicator
                .output
                .components()
                .into_iter()
                .map(|(name, series)| {
                    let values = series
                        .iter()
                        .map(|v| v.map(|v| round.map_or(v, |d| round_to(v, d))))
                        .collect();
                    (name, values)
                })
                .collect(),
        })
        .collect();
    serde_json::to_writer_pretty(&mut writer, &entries)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
