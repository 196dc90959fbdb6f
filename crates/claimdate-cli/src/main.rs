//! # claimdate CLI entry point
//!
//! Parses command-line arguments, configures logging, and dispatches to
//! subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use claimdate_cli::analyze::{
    run_business_days, run_compliance, run_duration, BusinessDaysArgs, ComplianceArgs,
    DurationArgs,
};
use claimdate_cli::invoke::{run_batch, run_invoke, BatchArgs, InvokeArgs};
use claimdate_cli::tools::run_tools;
use claimdate_cli::OutputFormat;

/// Claim date analysis: durations, business days, and policy deadlines.
#[derive(Parser, Debug)]
#[command(name = "claimdate", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging. Repeat for more verbosity (-v, -vv, -vvv).
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Elapsed time between two `YYYY-MM-DD HH:MM:SS` timestamps.
    Duration(DurationArgs),

    /// Business, weekend and calendar days between two dates (inclusive).
    BusinessDays(BusinessDaysArgs),

    /// Check an event date against a deadline counted from a reference date.
    Compliance(ComplianceArgs),

    /// Run one tool call with JSON arguments.
    Invoke(InvokeArgs),

    /// Run a JSON array of tool calls.
    Batch(BatchArgs),

    /// List the available tools.
    Tools,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.log_json);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "claimdate starting");

    let result = match &cli.command {
        Commands::Duration(args) => run_duration(args, cli.format),
        Commands::BusinessDays(args) => run_business_days(args, cli.format),
        Commands::Compliance(args) => run_compliance(args, cli.format),
        Commands::Invoke(args) => run_invoke(args, cli.format),
        Commands::Batch(args) => run_batch(args, cli.format),
        Commands::Tools => run_tools(cli.format),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Install the global subscriber, writing to stderr.
fn init_tracing(verbose: u8, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
