//! # claimdate-tools: Agent Tool Surface
//!
//! Exposes the claim date calculators as named tools for a
//! function-calling agent:
//!
//! - **Catalog** (`catalog.rs`): tool names, descriptions, trigger phrases
//!   and JSON Schema parameter definitions.
//! - **Invocation** (`invoke.rs`): JSON-argument dispatch returning the
//!   calculator report, with an always-text variant for agent loops.
//!
//! The agent loop itself (model calls, retries, answer synthesis) lives
//! outside this crate.

pub mod catalog;
pub mod error;
pub mod invoke;

pub use catalog::{catalog, ParamKind, ParamSpec, Tool, ToolSpec};
pub use error::ToolError;
pub use invoke::{invoke, invoke_to_text, invoke_tool, render_error, ToolCall};
