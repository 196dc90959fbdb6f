//! # Tools Subcommand
//!
//! Prints the tool catalog: a readable summary, or the function-calling
//! definitions as JSON for pasting into an agent configuration.

use std::fmt::Write as _;

use anyhow::{Context, Result};

use claimdate_tools::catalog;

use crate::OutputFormat;

/// Execute the tools subcommand.
pub fn run_tools(format: OutputFormat) -> Result<u8> {
    match format {
        OutputFormat::Text => print!("{}", catalog_text()),
        OutputFormat::Json => {
            let definitions: Vec<serde_json::Value> =
                catalog().iter().map(|spec| spec.definition()).collect();
            let json = serde_json::to_string_pretty(&definitions)
                .context("failed to serialize tool catalog")?;
            println!("{json}");
        }
    }
    Ok(0)
}

/// Readable catalog summary, one block per tool.
fn catalog_text() -> String {
    let mut out = String::new();
    for spec in catalog() {
        let _ = writeln!(out, "{}", spec.tool.name());
        let _ = writeln!(out, "    {}", spec.description);
        for param in spec.params {
            let _ = writeln!(
                out,
                "    {} ({}): {} [e.g. {}]",
                param.name, param.kind, param.description, param.example
            );
        }
    }
    out
}
