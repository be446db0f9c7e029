//! CLI error types for file I/O, parsing, configuration and engine errors.
//!
//! Error messages are meant to be actionable: they say what went wrong and,
//! where possible, how to fix it.

use std::io;

use thiserror::Error;

/// CLI error type encompassing all possible error conditions.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or writing a named file failed.
    #[error("I/O error with file '{path}': {source}. Check that the path exists and is accessible")]
    FileError {
        /// Path that caused the error.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An I/O error on stdout or another unnamed stream.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// The candle CSV could not be parsed.
    #[error(
        "CSV parse error{}: {message}. Expected a header row with time,open,high,low,close,volume",
        line_suffix(.line)
    )]
    CsvParseError {
        /// Description of the parse error.
        message: String,
        /// Line number where the error occurred, if known.
        line: Option<usize>,
    },

    /// The configuration file could not be parsed.
    #[error("invalid configuration in '{path}': {message}")]
    ConfigError {
        /// Path of the configuration file.
        path: String,
        /// What was wrong.
        message: String,
    },

    /// Serializing JSON output failed.
    #[error("JSON output error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The engine rejected the input.
    #[error("indicator computation error: {0}")]
    IndicatorError(#[from] fxta::Error),

    /// Some requested indicators could not be computed; the others were
    /// written.
    #[error("{} indicator(s) failed: {}", .failures.len(), .failures.join("; "))]
    IndicatorFailures {
        /// One `id: reason` entry per failed request.
        failures: Vec<String>,
    },

    /// An invalid argument was provided.
    #[error("invalid argument '{argument}': {reason}{}", suggestion_suffix(.suggestion))]
    InvalidArgument {
        /// Name of the invalid argument.
        argument: String,
        /// Description of why it's invalid.
        reason: String,
        /// Suggestion for valid values.
        suggestion: Option<String>,
    },
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|l| format!(" on line {l}")).unwrap_or_default()
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    suggestion.as_ref().map(|s| format!(". {s}")).unwrap_or_default()
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().and_then(|p| usize::try_from(p.line()).ok());
        Self::CsvParseError {
            message: err.to_string(),
            line,
        }
    }
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
