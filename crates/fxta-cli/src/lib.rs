//! fxta CLI library
//!
//! Exposes the CLI components for testing and reuse.

pub mod app;
pub mod args;
pub mod config;
pub mod csv_parser;
pub mod csv_writer;
pub mod error;
pub mod mock_feed;

pub use error::{CliError, Result};
