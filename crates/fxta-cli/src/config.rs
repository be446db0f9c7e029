//! JSON configuration file for `fxta compute`.
//!
//! ```json
//! {
//!   "engine": { "validate_candles": true, "price_source": "close" },
//!   "indicators": [
//!     { "id": "MA20" },
//!     { "id": "macd", "params": { "fast": 8, "slow": 21 } }
//!   ]
//! }
//! ```
//!
//! Both keys are optional. Command-line flags are applied on top of the file.

use std::fs;
use std::path::Path;

use fxta::plan::IndicatorRequest;
use fxta::EngineConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, Result};

/// Contents of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Engine options.
    pub engine: EngineConfig,
    /// Indicators to compute, before any given with `-i`.
    pub indicators: Vec<IndicatorRequest>,
}

impl CliConfig {
    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `CliError::FileError` if the file cannot be read or
    /// `CliError::ConfigError` if it is not a valid configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CliError::FileError {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::parse(&text).map_err(|e| CliError::ConfigError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), indicators = config.indicators.len(), "loaded configuration");
        Ok(config)
    }

    /// Parses configuration JSON.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error.
    pub fn parse(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
