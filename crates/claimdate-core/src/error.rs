//! # Error Hierarchy
//!
//! Structured error type for claim date analysis, built with `thiserror`.
//!
//! Every variant carries the exact value that was rejected and, where a
//! textual pattern applies, the pattern that was expected. A caller (an
//! operator or an agent relaying arguments from natural language) can
//! correct its input from the message alone.

use thiserror::Error;

/// Errors raised by the duration, business-day and compliance calculators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateAnalysisError {
    /// Input string does not match the required date or timestamp pattern.
    #[error("invalid {field} format \"{value}\": required format is {expected} (e.g. '{example}')")]
    Format {
        /// Name of the argument that failed to parse.
        field: &'static str,
        /// The rejected input, verbatim.
        value: String,
        /// The expected pattern, e.g. `YYYY-MM-DD`.
        expected: &'static str,
        /// A well-formed example of the expected pattern.
        example: &'static str,
    },

    /// The end of a span precedes its start.
    #[error(
        "{end_field} ({end}) is before {start_field} ({start}); \
         swap the two values so that {end_field} is not earlier than {start_field}"
    )]
    Ordering {
        /// Name of the start argument.
        start_field: &'static str,
        /// Start value as supplied.
        start: String,
        /// Name of the end argument.
        end_field: &'static str,
        /// End value as supplied.
        end: String,
    },

    /// A numeric parameter is missing, non-integer, or out of range.
    #[error("invalid {name}: {value} ({reason})")]
    Parameter {
        /// Parameter name.
        name: &'static str,
        /// The rejected value, rendered as text.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The event being checked happened before the reference date.
    #[error(
        "event date ({event}) is {offset_days} days from reference date ({reference}); \
         the event should occur on or after the reference date"
    )]
    InvalidSequence {
        /// Event date, `YYYY-MM-DD`.
        event: String,
        /// Reference date, `YYYY-MM-DD`.
        reference: String,
        /// Signed offset `event - reference` in days; always negative.
        offset_days: i64,
    },
}
