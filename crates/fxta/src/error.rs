//! Error types for fxta.
//!
//! Insufficient history is not an error anywhere in this crate: indicators
//! answer with `None` for warm-up positions. The variants below cover the
//! cases where the request itself cannot be honoured.

use thiserror::Error;

/// The main error type for fxta operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The period parameter is invalid.
    ///
    /// Returned when a period is zero or otherwise unusable for the indicator.
    #[error("invalid period {period} for {indicator}: {reason}")]
    InvalidPeriod {
        /// The invalid period value that was provided.
        period: usize,
        /// Indicator the period was supplied to.
        indicator: &'static str,
        /// Description of why the period is invalid.
        reason: &'static str,
    },

    /// A named parameter override could not be applied.
    ///
    /// Returned by the registry when an override names a parameter the
    /// indicator does not have, or carries a value outside its domain.
    #[error("invalid parameter '{name}' = {value} for {indicator}: {reason}")]
    InvalidParameter {
        /// Identifier of the indicator the override was aimed at.
        indicator: String,
        /// Name of the parameter.
        name: String,
        /// Rejected value.
        value: f64,
        /// Description of why the value was rejected.
        reason: &'static str,
    },

    /// Input series that must be index-aligned have different lengths.
    #[error("length mismatch: {description}")]
    LengthMismatch {
        /// Description of the mismatch, including the lengths involved.
        description: String,
    },

    /// A candle violates the OHLCV invariants.
    ///
    /// Only produced when candle validation is enabled in
    /// [`EngineConfig`](crate::config::EngineConfig).
    #[error("malformed candle at index {index}: {reason}")]
    MalformedCandle {
        /// Position of the first offending candle.
        index: usize,
        /// Which invariant was violated.
        reason: String,
    },

    /// Failed to convert a numeric value to the target type.
    ///
    /// This error occurs when converting values (e.g., a `usize` period or an
    /// `f64` constant) into a generic `Float` type fails.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience type alias for Results using the fxta Error type.
pub type Result<T> = std::result::Result<T, Error>;
