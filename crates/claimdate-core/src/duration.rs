//! # Duration Calculator
//!
//! Elapsed time between two timestamps, broken down into whole days,
//! remainder hours and remainder minutes, plus total hours.
//!
//! The breakdown is derived from the elapsed-seconds difference, so month,
//! year and leap-day boundaries need no special handling. Leftover seconds
//! below one minute are dropped from the breakdown but still count towards
//! the total hours.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DateAnalysisError;
use crate::temporal::Timestamp;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_DAY: u64 = 86_400;

/// Elapsed time between two timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationResult {
    /// Start of the span.
    pub start: Timestamp,
    /// End of the span, never earlier than `start`.
    pub end: Timestamp,
    /// Whole days.
    pub days: u64,
    /// Hours left over after whole days (0–23).
    pub hours: u64,
    /// Minutes left over after whole hours (0–59).
    pub minutes: u64,
    /// Exact elapsed seconds.
    pub total_seconds: u64,
    /// Elapsed hours, rounded to two decimal places.
    pub total_hours: f64,
}

impl DurationResult {
    /// Compute the elapsed time from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns [`DateAnalysisError::Ordering`] if `end` precedes `start`.
    pub fn between(start: Timestamp, end: Timestamp) -> Result<Self, DateAnalysisError> {
        if end < start {
            return Err(DateAnalysisError::Ordering {
                start_field: "start_datetime",
                start: start.to_string(),
                end_field: "end_datetime",
                end: end.to_string(),
            });
        }

        // Non-negative after the ordering check.
        let total_seconds = end.seconds_since(&start).unsigned_abs();

        let days = total_seconds / SECONDS_PER_DAY;
        let hours = (total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
        let minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
        let total_hours = round_to_hundredths(total_seconds as f64 / SECONDS_PER_HOUR as f64);

        tracing::debug!(
            %start,
            %end,
            total_seconds,
            days,
            hours,
            minutes,
            "computed duration"
        );

        Ok(Self {
            start,
            end,
            days,
            hours,
            minutes,
            total_seconds,
            total_hours,
        })
    }

    /// Seconds accounted for by the days/hours/minutes breakdown.
    pub fn breakdown_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY + self.hours * SECONDS_PER_HOUR + self.minutes * SECONDS_PER_MINUTE
    }
}

impl fmt::Display for DurationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Duration: {} days, {} hours, {} minutes (Total: {:.2} hours)",
            self.days, self.hours, self.minutes, self.total_hours
        )
    }
}

/// Parse two `YYYY-MM-DD HH:MM:SS` timestamps and compute the duration
/// between them.
///
/// # Errors
///
/// - [`DateAnalysisError::Format`] naming `start_datetime` or `end_datetime`.
/// - [`DateAnalysisError::Ordering`] if the end precedes the start.
pub fn compute_duration(start: &str, end: &str) -> Result<DurationResult, DateAnalysisError> {
    let start = Timestamp::parse_field(start, "start_datetime")?;
    let end = Timestamp::parse_field(end, "end_datetime")?;
    DurationResult::between(start, end)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
