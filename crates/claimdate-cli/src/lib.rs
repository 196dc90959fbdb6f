//! # claimdate-cli: Claim Date Analysis Command-Line Interface
//!
//! ## Subcommands
//!
//! - `duration`: elapsed time between two timestamps
//! - `business-days`: weekday/weekend counts over a date span
//! - `compliance`: event date against a policy deadline
//! - `invoke`: run one agent tool call from JSON arguments
//! - `batch`: run a JSON array of tool calls
//! - `tools`: print the tool catalog
//!
//! ## Exit Codes
//!
//! `0` success, `1` rejected input (or non-compliance under `--strict`),
//! `2` operational failure such as unreadable files or invalid JSON.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handlers delegate to `claimdate-core` and `claimdate-tools`; no date
//!   arithmetic here.
//! - Reports go to stdout, diagnostics and logs to stderr.

use std::fmt::Display;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

pub mod analyze;
pub mod invoke;
pub mod tools;

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The human-readable report line.
    #[default]
    Text,
    /// The structured result as pretty-printed JSON.
    Json,
}

/// Print `value` to stdout in the requested format.
pub fn emit<T: Serialize + Display>(value: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{value}"),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value).context("failed to serialize result")?;
            println!("{json}");
        }
    }
    Ok(())
}
