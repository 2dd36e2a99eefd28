//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - sets up logging
//! - runs the search pipeline
//! - prints the report

use clap::Parser;

use crate::cli::Cli;
use crate::domain::{OutputFormat, RunConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `curious` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = run_config_from_args(&cli);

    crate::logging::init(config.verbosity)?;

    let run = pipeline::run_search()?;

    let report = match config.format {
        OutputFormat::Text => crate::report::format_report(&run.pairs, &run.product),
        OutputFormat::Json => crate::report::format_json(&run.pairs, &run.product)?,
    };
    println!("{report}");

    Ok(())
}

pub fn run_config_from_args(cli: &Cli) -> RunConfig {
    RunConfig {
        format: cli.format,
        verbosity: cli.verbose,
    }
}
