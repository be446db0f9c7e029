//! Command execution.

use std::io::Write;

use fxta::plan::{catalog, DirectExecutor, IndicatorRequest, Registry};
use fxta::Candle;
use tracing::{debug, info, warn};

use crate::args::{Args, Command, ComputeArgs, GenerateArgs, OutputFormat, ParamOverride};
use crate::config::CliConfig;
use crate::csv_parser::read_candles;
use crate::csv_writer::{write_candles_csv, write_indicators_csv, write_indicators_json, OutputDest};
use crate::error::{CliError, Result};
use crate::mock_feed::MockFeed;

/// Runs one parsed command line.
///
/// # Errors
///
/// Returns the first error encountered. For `compute`, requests that fail
/// individually are reported as `CliError::IndicatorFailures` after the
/// successful ones have been written.
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Compute(compute) => run_compute(&compute),
        Command::List { json } => run_list(json, &mut std::io::stdout().lock()),
        Command::Generate(generate) => run_generate(&generate),
    }
}

fn run_compute(args: &ComputeArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };

    let mut engine = config.engine;
    if let Some(source) = args.price {
        engine = engine.with_price_source(source);
    }
    if args.no_validate {
        engine = engine.with_validation(false);
    }

    let requests = build_requests(config.indicators, &args.indicators, &args.params)?;
    let executor = DirectExecutor::new(engine);
    for request in &requests {
        if !executor.registry().contains(&request.id) {
            warn!(id = %request.id, "unknown indicator, skipping (see `fxta list`)");
        }
    }

    let candles = load_candles(args)?;
    let set = executor.execute(&candles, &requests)?;
    info!(
        candles = candles.len(),
        computed = set.len(),
        failed = set.failures.len(),
        "computed indicators"
    );

    let dest = OutputDest::from_option(args.output.clone());
    let writer = dest.writer()?;
    match args.format {
        OutputFormat::Csv => {
            let times: Vec<i64> = candles.iter().map(|c| c.time).collect();
            write_indicators_csv(&times, &set, args.round, writer)?;
        }
        OutputFormat::Json => write_indicators_json(&set, args.round, writer)?,
    }

    if set.failures.is_empty() {
        Ok(())
    } else {
        Err(CliError::IndicatorFailures {
            failures: set
                .failures
                .iter()
                .map(|f| format!("{}: {}", f.id, f.error))
                .collect(),
        })
    }
}

/// Combines configured and command-line requests and applies `-p`
/// overrides to every request with a matching identifier.
fn build_requests(
    mut requests: Vec<IndicatorRequest>,
    ids: &[String],
    overrides: &[ParamOverride],
) -> Result<Vec<IndicatorRequest>> {
    requests.extend(ids.iter().map(IndicatorRequest::new));
    if requests.is_empty() {
        return Err(CliError::InvalidArgument {
            argument: "indicator".to_string(),
            reason: "no indicators requested".to_string(),
            suggestion: Some("Add -i ID (run `fxta list` for identifiers)".to_string()),
        });
    }

    for param in overrides {
        let mut matched = false;
        for request in requests.iter_mut().filter(|r| r.id == param.id) {
            request.params.insert(param.name.clone(), param.value);
            matched = true;
        }
        if !matched {
            return Err(CliError::InvalidArgument {
                argument: "param".to_string(),
                reason: format!("'{}' is not among the requested indicators", param.id),
                suggestion: Some(format!("Add -i {}", param.id)),
            });
        }
    }
    Ok(requests)
}

fn load_candles(args: &ComputeArgs) -> Result<Vec<Candle>> {
    match (&args.input, args.mock) {
        (Some(path), _) => read_candles(path),
        (None, Some(count)) => {
            let settings = args.feed.settings();
            debug!(count, seed = settings.seed, base_price = settings.base_price, "generating mock candles");
            Ok(MockFeed::new(settings).take_candles(count))
        }
        (None, None) => Err(CliError::InvalidArgument {
            argument: "input".to_string(),
            reason: "no candle source".to_string(),
            suggestion: Some("Pass --input FILE or --mock N".to_string()),
        }),
    }
}

fn run_list<W: Write>(json: bool, out: &mut W) -> Result<()> {
    let entries = catalog(&Registry::standard());
    if json {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{:<12} {:<11} {:<32} {:<40} ALIASES", "ID", "PANE", "NAME", "DEFAULTS")?;
    for entry in &entries {
        let defaults = entry
            .defaults
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(",");
        writeln!(
            out,
            "{:<12} {:<11} {:<32} {:<40} {}",
            entry.id,
            entry.pane.name(),
            entry.description,
            if defaults.is_empty() { "-" } else { defaults.as_str() },
            entry.aliases.join(",")
        )?;
    }
    Ok(())
}

fn run_generate(args: &GenerateArgs) -> Result<()> {
    let candles = MockFeed::new(args.feed.settings()).take_candles(args.count);
    let writer = OutputDest::from_option(args.output.clone()).writer()?;
    write_candles_csv(&candles, writer)
}
