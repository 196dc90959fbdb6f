//! # Tool Call Subcommands
//!
//! `invoke` runs a single tool with JSON arguments; `batch` runs a JSON
//! array of `{"name": ..., "arguments": {...}}` envelopes. Both print the
//! same text an agent would receive, so a transcript can be replayed from
//! the shell. Under `--format json` each call becomes a
//! `{"name", "ok", "output"}` object: a single object for `invoke`, an
//! array of them for `batch`.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use serde_json::Value;

use claimdate_tools::{render_error, ToolCall};

use crate::OutputFormat;

/// Arguments for the `claimdate invoke` subcommand.
#[derive(Args, Debug)]
pub struct InvokeArgs {
    /// Tool name, e.g. `check_policy_compliance`.
    #[arg(value_name = "TOOL")]
    pub tool: String,

    /// Tool arguments as a JSON object.
    #[arg(long, conflicts_with = "args_file")]
    pub args: Option<String>,

    /// Read tool arguments from a JSON file.
    #[arg(long, value_name = "PATH")]
    pub args_file: Option<PathBuf>,
}

/// Arguments for the `claimdate batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// JSON file holding an array of tool calls. Reads stdin when omitted.
    #[arg(value_name = "CALLS_JSON")]
    pub file: Option<PathBuf>,
}

/// Outcome of one tool call, for `--format json`.
#[derive(Debug, Serialize)]
struct CallOutcome<'a> {
    name: &'a str,
    ok: bool,
    output: String,
}

impl<'a> CallOutcome<'a> {
    /// Run `name` with `arguments`, keeping the agent-facing text either way.
    fn run(name: &'a str, arguments: &Value) -> Self {
        match claimdate_tools::invoke(name, arguments) {
            Ok(output) => Self {
                name,
                ok: true,
                output,
            },
            Err(err) => {
                tracing::warn!(tool = %name, error = %err, "tool call rejected");
                Self {
                    name,
                    ok: false,
                    output: render_error(&err),
                }
            }
        }
    }
}

/// Execute the invoke subcommand. Arguments are read from `--args`,
/// `--args-file`, or stdin, in that order of preference.
///
/// Returns 1 when the tool rejected the call.
pub fn run_invoke(args: &InvokeArgs, format: OutputFormat) -> Result<u8> {
    let raw = match (&args.args, &args.args_file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => read_file(path)?,
        (None, None) => read_stdin()?,
    };
    let arguments: Value =
        serde_json::from_str(&raw).context("tool arguments are not valid JSON")?;

    let outcome = CallOutcome::run(&args.tool, &arguments);
    match format {
        OutputFormat::Text => println!("{}", outcome.output),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&outcome)
                .context("failed to serialize tool result")?;
            println!("{json}");
        }
    }

    Ok(if outcome.ok { 0 } else { 1 })
}

/// Execute the batch subcommand.
///
/// Every call runs even if an earlier one fails. Returns 1 if any failed.
pub fn run_batch(args: &BatchArgs, format: OutputFormat) -> Result<u8> {
    let raw = match &args.file {
        Some(path) => read_file(path)?,
        None => read_stdin()?,
    };
    let calls: Vec<ToolCall> =
        serde_json::from_str(&raw).context("expected a JSON array of tool calls")?;

    tracing::info!(calls = calls.len(), "running tool call batch");

    let outcomes: Vec<CallOutcome<'_>> = calls
        .iter()
        .map(|call| CallOutcome::run(&call.name, &call.arguments))
        .collect();

    match format {
        OutputFormat::Text => {
            for outcome in &outcomes {
                println!("{}", outcome.output);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&outcomes)
                .context("failed to serialize batch results")?;
            println!("{json}");
        }
    }

    Ok(if outcomes.iter().all(|o| o.ok) { 0 } else { 1 })
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read stdin")?;
    Ok(buf)
}
