//! CLI argument parsing.
//!
//! # Examples
//!
//! ```bash
//! # Indicators over a candle file, CSV to stdout
//! fxta compute --input candles.csv -i MA20 -i rsi -i BB
//!
//! # Override parameters and write JSON
//! fxta compute --input candles.csv -i macd -p macd.fast=8 -p macd.slow=21 --format json
//!
//! # Indicators over 500 synthetic GBP/USD candles
//! fxta compute --mock 500 --pair GBP/USD -i ichimoku -i parabolic
//!
//! # List the available identifiers
//! fxta list
//!
//! # Write synthetic candles to a file
//! fxta generate -n 1000 --seed 7 -o candles.csv
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand, ValueEnum};
use fxta::PriceSource;

use crate::error::{CliError, Result};
use crate::mock_feed::{pair_base_price, FeedSettings};

/// fxta: technical indicators for forex candles
#[derive(Parser, Debug)]
#[command(name = "fxta")]
#[command(author, version, about = "Technical indicators for OHLCV candle data")]
#[command(long_about = "fxta computes dashboard indicators (moving averages, bands, \
    oscillators, volume indicators) over OHLCV candles read from CSV or generated \
    by a seeded mock feed.")]
pub struct Args {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compute indicators over a candle series
    Compute(ComputeArgs),

    /// List indicator identifiers, aliases and defaults
    List {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write synthetic candles as CSV
    Generate(GenerateArgs),
}

/// Output format for computed indicators.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One column per indicator component
    #[default]
    Csv,
    /// One object per indicator
    Json,
}

/// Mock feed options.
#[derive(ClapArgs, Debug, Clone, PartialEq)]
pub struct FeedArgs {
    /// Seed for the mock feed
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Starting price of the mock feed
    #[arg(long, default_value_t = 1.0850)]
    pub base_price: f64,

    /// Currency pair whose usual price seeds the feed (overrides --base-price)
    #[arg(long)]
    pub pair: Option<String>,

    /// Time of the first mock candle, epoch seconds
    #[arg(long, default_value_t = 1_700_000_000)]
    pub start: i64,

    /// Seconds between mock candles
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(i64).range(1..))]
    pub interval: i64,
}

impl FeedArgs {
    /// Feed settings, with `--pair` taking precedence over `--base-price`.
    #[must_use]
    pub fn settings(&self) -> FeedSettings {
        FeedSettings {
            seed: self.seed,
            base_price: self.pair.as_deref().map_or(self.base_price, pair_base_price),
            start: self.start,
            interval: self.interval,
        }
    }
}

/// Options of `fxta compute`.
#[derive(ClapArgs, Debug, Clone, PartialEq)]
pub struct ComputeArgs {
    /// Candle CSV file
    #[arg(long, conflicts_with = "mock", required_unless_present = "mock")]
    pub input: Option<PathBuf>,

    /// Use N synthetic candles instead of a file
    #[arg(long, value_name = "N")]
    pub mock: Option<usize>,

    #[command(flatten)]
    pub feed: FeedArgs,

    /// Indicator identifier or alias (repeatable)
    #[arg(short, long = "indicator", value_name = "ID")]
    pub indicators: Vec<String>,

    /// Parameter override as ID.NAME=VALUE (repeatable)
    #[arg(short, long = "param", value_name = "ID.NAME=VALUE", value_parser = parse_param)]
    pub params: Vec<ParamOverride>,

    /// JSON configuration file with engine settings and indicator requests
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Price column feeding single-series indicators
    #[arg(long, value_parser = parse_price_source)]
    pub price: Option<PriceSource>,

    /// Skip candle validation
    #[arg(long)]
    pub no_validate: bool,

    /// Round output values to this many decimals
    #[arg(long, value_name = "DIGITS")]
    pub round: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Options of `fxta generate`.
#[derive(ClapArgs, Debug, Clone, PartialEq)]
pub struct GenerateArgs {
    /// Number of candles
    #[arg(short = 'n', long, default_value_t = 500)]
    pub count: usize,

    #[command(flatten)]
    pub feed: FeedArgs,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// A `-p ID.NAME=VALUE` override.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamOverride {
    /// Identifier the override applies to.
    pub id: String,
    /// Parameter name.
    pub name: String,
    /// New value.
    pub value: f64,
}

impl FromStr for ParamOverride {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: String| CliError::InvalidArgument {
            argument: "param".to_string(),
            reason,
            suggestion: Some("Use ID.NAME=VALUE, for example rsi.period=9".to_string()),
        };

        let (target, value) = s
            .split_once('=')
            .ok_or_else(|| invalid(format!("'{s}' has no '='")))?;
        let (id, name) = target
            .trim()
            .rsplit_once('.')
            .ok_or_else(|| invalid(format!("'{target}' has no '.' between identifier and name")))?;
        if id.is_empty() || name.is_empty() {
            return Err(invalid(format!("'{target}' is missing the identifier or the name")));
        }
        let value = value
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid(format!("cannot parse '{}' as number", value.trim())))?;

        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            value,
        })
    }
}

fn parse_param(s: &str) -> std::result::Result<ParamOverride, String> {
    s.parse().map_err(|e: CliError| e.to_string())
}

fn parse_price_source(s: &str) -> std::result::Result<PriceSource, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;

    fn compute_args(argv: &[&str]) -> ComputeArgs {
        let mut full = vec!["fxta", "compute"];
        full.extend_from_slice(argv);
        match Args::try_parse_from(full).unwrap().command {
            Command::Compute(args) => args,
            other => panic!("Expected Compute command, got {other:?}"),
        }
    }

    // ==================== Compute ====================

    #[test]
    fn test_parse_compute_basic() {
        let args = compute_args(&["--input", "candles.csv", "-i", "MA20", "-i", "rsi"]);
        assert_eq!(args.input, Some(PathBuf::from("candles.csv")));
        assert_eq!(args.indicators, vec!["MA20", "rsi"]);
        assert!(args.params.is_empty());
        assert_eq!(args.format, OutputFormat::Csv);
        assert!(args.output.is_none());
        assert!(!args.no_validate);
    }

    #[test]
    fn test_parse_compute_full() {
        let args = compute_args(&[
            "--mock", "300", "--pair", "USD/JPY", "--seed", "9", "-i", "macd", "-p",
            "macd.fast=8", "--price", "typical", "--round", "4", "--format", "json", "-o",
            "out.json", "--no-validate",
        ]);
        assert_eq!(args.mock, Some(300));
        assert!(args.input.is_none());
        assert_eq!(args.params, vec![ParamOverride { id: "macd".into(), name: "fast".into(), value: 8.0 }]);
        assert_eq!(args.price, Some(PriceSource::Typical));
        assert_eq!(args.round, Some(4));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert!(args.no_validate);

        let settings = args.feed.settings();
        assert_eq!(settings.seed, 9);
        assert_eq!(settings.base_price, 149.50);
    }

    #[test]
    fn test_input_and_mock_conflict() {
        let result = Args::try_parse_from(["fxta", "compute", "--input", "a.csv", "--mock", "10"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_input_or_mock_required() {
        assert!(Args::try_parse_from(["fxta", "compute", "-i", "sma"]).is_err());
    }

    #[test]
    fn test_bad_price_source() {
        let result = Args::try_parse_from(["fxta", "compute", "--mock", "5", "--price", "vwap"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = Args::try_parse_from(["fxta", "generate", "--interval", "0"]);
        assert!(result.is_err());
    }

    // ==================== Param Overrides ====================

    #[test]
    fn test_param_override_parse() {
        let p: ParamOverride = "BB.multiplier=2.5".parse().unwrap();
        assert_eq!(p.id, "BB");
        assert_eq!(p.name, "multiplier");
        assert_eq!(p.value, 2.5);

        let spaced: ParamOverride = " rsi.period = 9 ".parse().unwrap();
        assert_eq!(spaced.id, "rsi");
        assert_eq!(spaced.value, 9.0);
    }

    #[test]
    fn test_param_override_errors() {
        for bad in ["rsi.period", "rsiperiod=9", ".period=9", "rsi.=9", "rsi.period=abc"] {
            let err = bad.parse::<ParamOverride>().unwrap_err();
            assert!(matches!(err, CliError::InvalidArgument { .. }), "{bad}");
        }
    }

    // ==================== Other Commands ====================

    #[test]
    fn test_parse_list() {
        let args = Args::try_parse_from(["fxta", "list", "--json"]).unwrap();
        assert!(matches!(args.command, Command::List { json: true }));
    }

    #[test]
    fn test_parse_generate_defaults() {
        let args = Args::try_parse_from(["fxta", "-vv", "generate"]).unwrap();
        assert_eq!(args.verbose, 2);
        match args.command {
            Command::Generate(generate) => {
                assert_eq!(generate.count, 500);
                assert_eq!(generate.feed.settings(), FeedSettings::default());
                assert!(generate.output.is_none());
            }
            other => panic!("Expected Generate command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_help() {
        assert!(Args::try_parse_from(["fxta", "--help"]).is_err());
    }
}
