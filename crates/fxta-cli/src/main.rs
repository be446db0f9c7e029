//! fxta command-line interface.
//!
//! Computes indicators over candle CSV files or the seeded mock feed. Logs go
//! to stderr; output goes to stdout or the file given with `-o`.

use clap::Parser;
use fxta_cli::app;
use fxta_cli::args::Args;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(err) = app::run(args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
