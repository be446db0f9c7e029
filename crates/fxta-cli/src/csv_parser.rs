//! CSV parsing for candle input.
//!
//! # Column Detection
//!
//! Columns are matched by header name (case-insensitive, surrounding
//! whitespace ignored), in any order:
//!
//! - `time`, `timestamp`, `date`, `datetime` → candle time (integer epoch seconds)
//! - `open`, `high`, `low`, `close`
//! - `volume`, `vol` → volume (optional; missing means 0)
//!
//! Other columns are ignored.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use fxta::Candle;
use tracing::debug;

use crate::error::{CliError, Result};

/// Positions of the candle fields in a CSV record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnMap {
    time: usize,
    open: usize,
    high: usize,
    low: usize,
    close: usize,
    volume: Option<usize>,
}

/// Normalize a column header name for matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.contains(&normalize_header(h).as_str()))
        };
        let require = |names: &[&str]| {
            find(names).ok_or_else(|| CliError::CsvParseError {
                message: format!("missing '{}' column", names[0]),
                line: Some(1),
            })
        };

        Ok(Self {
            time: require(&["time", "timestamp", "date", "datetime"])?,
            open: require(&["open"])?,
            high: require(&["high"])?,
            low: require(&["low"])?,
            close: require(&["close"])?,
            volume: find(&["volume", "vol"]),
        })
    }
}

fn field<'r>(record: &'r StringRecord, idx: usize, name: &str, line: usize) -> Result<&'r str> {
    match record.get(idx).map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(CliError::CsvParseError {
            message: format!("missing {name} value"),
            line: Some(line),
        }),
    }
}

fn parse_price(record: &StringRecord, idx: usize, name: &str, line: usize) -> Result<f64> {
    let raw = field(record, idx, name, line)?;
    raw.parse::<f64>().map_err(|_| CliError::CsvParseError {
        message: format!("cannot parse {name} '{raw}' as number"),
        line: Some(line),
    })
}

fn parse_time(record: &StringRecord, idx: usize, line: usize) -> Result<i64> {
    let raw = field(record, idx, "time", line)?;
    raw.parse::<i64>().map_err(|_| CliError::CsvParseError {
        message: format!("cannot parse time '{raw}' as integer epoch seconds"),
        line: Some(line),
    })
}

/// Reads candles from a CSV file.
///
/// # Errors
///
/// Returns `CliError::FileError` if the file cannot be opened, or
/// `CliError::CsvParseError` if the CSV is malformed.
pub fn read_candles<P: AsRef<Path>>(path: P) -> Result<Vec<Candle>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CliError::FileError {
        path: path.display().to_string(),
        source,
    })?;
    let candles = read_candles_from_reader(BufReader::new(file))?;
    debug!(path = %path.display(), candles = candles.len(), "read candle file");
    Ok(candles)
}

/// Reads candles from any CSV source.
///
/// # Errors
///
/// Returns `CliError::CsvParseError` if the header is missing a required
/// column or a row cannot be parsed.
pub fn read_candles_from_reader<R: Read>(reader: R) -> Result<Vec<Candle>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = ColumnMap::from_headers(&headers)?;
    if columns.volume.is_none() {
        debug!("no volume column, using 0");
    }

    let mut candles = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record
            .position()
            .and_then(|p| usize::try_from(p.line()).ok())
            .unwrap_or(candles.len() + 2);

        let volume = match columns.volume {
            Some(idx) => parse_price(&record, idx, "volume", line)?,
            None => 0.0,
        };
        candles.push(Candle::new(
            parse_time(&record, columns.time, line)?,
            parse_price(&record, columns.open, "open", line)?,
            parse_price(&record, columns.high, "high", line)?,
            parse_price(&record, columns.low, "low", line)?,
            parse_price(&record, columns.close, "close", line)?,
            volume,
        ));
    }
    Ok(candles)
}
