//! # bridgecheck CLI entry point
//!
//! Parses command-line arguments, initializes tracing, and hands off to the
//! check orchestrator. Diagnostics and the final status line go to stdout;
//! tracing output goes to stderr so the checked stream stays clean.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bridgecheck_cli::check::{run_check, CheckArgs};
use bridgecheck_schema::DraftEngine;

/// Validate a bridge configuration with its schema and check config paths.
///
/// Validates the bridge document against the bridge JSON schema, verifies
/// that every referenced endpoint config_path exists on disk, cross-checks
/// connection references, and optionally checks an endpoint-container
/// document. Exit code 0 means every attempted check passed.
#[derive(Parser, Debug)]
#[command(name = "bridgecheck", version, about)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    check: CheckArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    ExitCode::from(run_check(&cli.check, Some(&DraftEngine)))
}
