//! Errors raised while dispatching a tool call.

use thiserror::Error;

use claimdate_core::DateAnalysisError;

/// A tool call could not produce a report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolError {
    /// No tool with this name exists.
    #[error("unknown tool \"{0}\" (available: calculate_timeline_duration, calculate_business_days, check_policy_compliance)")]
    UnknownTool(String),

    /// Arguments were not a JSON object.
    #[error("arguments for {tool} must be a JSON object, got {found}")]
    ArgumentsNotObject {
        /// Tool being invoked.
        tool: &'static str,
        /// JSON type that was supplied instead.
        found: &'static str,
    },

    /// A required argument is absent, null, or blank.
    #[error("{argument} is required for {tool}")]
    MissingArgument {
        /// Tool being invoked.
        tool: &'static str,
        /// Name of the missing argument.
        argument: &'static str,
    },

    /// An argument has the wrong JSON type.
    #[error("{argument} for {tool} must be a {expected}, got {found}")]
    InvalidArgument {
        /// Tool being invoked.
        tool: &'static str,
        /// Argument name.
        argument: &'static str,
        /// Expected JSON type.
        expected: &'static str,
        /// The value supplied, rendered as JSON.
        found: String,
    },

    /// The calculator rejected the arguments.
    #[error(transparent)]
    Analysis(#[from] DateAnalysisError),
}
