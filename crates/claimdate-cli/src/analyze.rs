//! # Analysis Subcommands
//!
//! `duration`, `business-days` and `compliance`: parse positional inputs,
//! run the calculator, print the report.

use anyhow::Result;
use clap::Args;

use claimdate_core::{check_compliance, compute_business_days, compute_duration, DateAnalysisError};

use crate::{emit, OutputFormat};

/// Arguments for the `claimdate duration` subcommand.
#[derive(Args, Debug)]
pub struct DurationArgs {
    /// Start timestamp, `YYYY-MM-DD HH:MM:SS`.
    #[arg(value_name = "START")]
    pub start: String,

    /// End timestamp, `YYYY-MM-DD HH:MM:SS`.
    #[arg(value_name = "END")]
    pub end: String,
}

/// Arguments for the `claimdate business-days` subcommand.
#[derive(Args, Debug)]
pub struct BusinessDaysArgs {
    /// First date, `YYYY-MM-DD`.
    #[arg(value_name = "START")]
    pub start: String,

    /// Last date (inclusive), `YYYY-MM-DD`.
    #[arg(value_name = "END")]
    pub end: String,
}

/// Arguments for the `claimdate compliance` subcommand.
#[derive(Args, Debug)]
pub struct ComplianceArgs {
    /// Date of the event being checked, `YYYY-MM-DD`.
    #[arg(value_name = "EVENT")]
    pub event: String,

    /// Date the deadline counts from, `YYYY-MM-DD`.
    #[arg(value_name = "REFERENCE")]
    pub reference: String,

    /// Allowed days after the reference date.
    #[arg(long, short = 'd', allow_negative_numbers = true)]
    pub deadline_days: i64,

    /// Exit with code 1 when the event missed the deadline.
    #[arg(long)]
    pub strict: bool,
}

/// Execute the duration subcommand.
pub fn run_duration(args: &DurationArgs, format: OutputFormat) -> Result<u8> {
    match compute_duration(&args.start, &args.end) {
        Ok(result) => {
            emit(&result, format)?;
            Ok(0)
        }
        Err(err) => Ok(reject(&err)),
    }
}

/// Execute the business-days subcommand.
pub fn run_business_days(args: &BusinessDaysArgs, format: OutputFormat) -> Result<u8> {
    match compute_business_days(&args.start, &args.end) {
        Ok(result) => {
            emit(&result, format)?;
            Ok(0)
        }
        Err(err) => Ok(reject(&err)),
    }
}

/// Execute the compliance subcommand.
///
/// Returns 1 for a non-compliant event only when `--strict` is set.
pub fn run_compliance(args: &ComplianceArgs, format: OutputFormat) -> Result<u8> {
    match check_compliance(&args.event, &args.reference, args.deadline_days) {
        Ok(result) => {
            emit(&result, format)?;
            if args.strict && !result.is_compliant() {
                tracing::info!(
                    exceeded_by_days = result.exceeded_by_days(),
                    "deadline missed under --strict"
                );
                return Ok(1);
            }
            Ok(0)
        }
        Err(err) => Ok(reject(&err)),
    }
}

fn reject(err: &DateAnalysisError) -> u8 {
    tracing::debug!(error = ?err, "input rejected");
    eprintln!("Error: {err}");
    1
}
