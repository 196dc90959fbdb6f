//! # Temporal Types: Strictly Parsed Claim Dates
//!
//! Defines `Timestamp` (date plus time-of-day) and `CalendarDate` (date
//! only), the two input types of the claim date calculators.
//!
//! ## Input Patterns
//!
//! | Type | Pattern | Example |
//! |------|---------|---------|
//! | `Timestamp` | `YYYY-MM-DD HH:MM:SS` | `2024-01-15 09:30:00` |
//! | `CalendarDate` | `YYYY-MM-DD` | `2024-01-15` |
//!
//! Surrounding whitespace is ignored; anything else that deviates from the
//! pattern is rejected with [`DateAnalysisError::Format`]. Both types are
//! naive: claim documents state local wall-clock times with no zone, and
//! elapsed time is computed on the wall clock.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::DateAnalysisError;

/// Human-readable timestamp pattern quoted in error messages.
pub const TIMESTAMP_PATTERN: &str = "YYYY-MM-DD HH:MM:SS";

/// Human-readable date pattern quoted in error messages.
pub const DATE_PATTERN: &str = "YYYY-MM-DD";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

// ─── Timestamp ───────────────────────────────────────────────────────

/// A calendar date with time-of-day, seconds precision.
///
/// Serializes as its `YYYY-MM-DD HH:MM:SS` text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Parse a timestamp, reporting failures against the generic field name
    /// `timestamp`.
    pub fn parse(s: &str) -> Result<Self, DateAnalysisError> {
        Self::parse_field(s, "timestamp")
    }

    /// Parse a timestamp supplied as the argument named `field`.
    ///
    /// # Errors
    ///
    /// Returns [`DateAnalysisError::Format`] naming `field`, the rejected
    /// value and `YYYY-MM-DD HH:MM:SS` if the input does not match.
    pub fn parse_field(value: &str, field: &'static str) -> Result<Self, DateAnalysisError> {
        let reject = || DateAnalysisError::Format {
            field,
            value: value.to_string(),
            expected: TIMESTAMP_PATTERN,
            example: "2024-01-15 09:30:00",
        };

        let trimmed = value.trim();
        if !has_four_digit_year(trimmed) {
            return Err(reject());
        }

        let dt = NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT).map_err(|_| reject())?;

        // chrono admits `:60` as a leap second; the pattern does not.
        if dt.nanosecond() >= 1_000_000_000 {
            return Err(reject());
        }

        Ok(Self(dt))
    }

    /// Create a timestamp from a `NaiveDateTime`, truncating sub-seconds.
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Self(dt.with_nanosecond(0).unwrap_or(dt))
    }

    /// Access the inner `NaiveDateTime`.
    pub fn as_datetime(&self) -> &NaiveDateTime {
        &self.0
    }

    /// The calendar date part.
    pub fn date(&self) -> CalendarDate {
        CalendarDate(self.0.date())
    }

    /// Whole seconds elapsed from `earlier` to `self`. Negative if `earlier`
    /// is in fact later.
    pub fn seconds_since(&self, earlier: &Timestamp) -> i64 {
        self.0.signed_duration_since(earlier.0).num_seconds()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = DateAnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Timestamp {
    type Error = DateAnalysisError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> Self {
        ts.to_string()
    }
}

// ─── Calendar Date ───────────────────────────────────────────────────

/// A calendar date without time-of-day.
///
/// Serializes as its `YYYY-MM-DD` text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Parse a date, reporting failures against the generic field name `date`.
    pub fn parse(s: &str) -> Result<Self, DateAnalysisError> {
        Self::parse_field(s, "date")
    }

    /// Parse a date supplied as the argument named `field`.
    ///
    /// # Errors
    ///
    /// Returns [`DateAnalysisError::Format`] naming `field`, the rejected
    /// value and `YYYY-MM-DD` if the input does not match.
    pub fn parse_field(value: &str, field: &'static str) -> Result<Self, DateAnalysisError> {
        let reject = || DateAnalysisError::Format {
            field,
            value: value.to_string(),
            expected: DATE_PATTERN,
            example: "2024-01-15",
        };

        let trimmed = value.trim();
        if !has_four_digit_year(trimmed) {
            return Err(reject());
        }

        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self)
            .map_err(|_| reject())
    }

    /// Wrap a `NaiveDate`.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Access the inner `NaiveDate`.
    pub fn as_date(&self) -> &NaiveDate {
        &self.0
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Signed number of days from `earlier` to `self`.
    pub fn days_since(&self, earlier: &CalendarDate) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }

    /// Every date from `self` through `end`, both inclusive. Empty when
    /// `end` precedes `self`.
    pub fn days_through(self, end: CalendarDate) -> impl Iterator<Item = CalendarDate> {
        self.0
            .iter_days()
            .take_while(move |d| *d <= end.0)
            .map(CalendarDate)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = DateAnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = DateAnalysisError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

/// `%Y` alone admits short and signed years; the patterns require `YYYY-`.
fn has_four_digit_year(s: &str) -> bool {
    match s.as_bytes().get(..5) {
        Some([year @ .., b'-']) => year.iter().all(u8::is_ascii_digit),
        _ => false,
    }
}
