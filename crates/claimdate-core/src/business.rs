//! # Business Day Counter
//!
//! Counts weekdays (Monday–Friday) and weekend days over an inclusive
//! calendar span. Public holidays are not modelled; every weekday counts
//! as a business day.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DateAnalysisError;
use crate::temporal::CalendarDate;

/// Weekday/weekend breakdown of an inclusive date span.
///
/// `calendar_days == business_days + weekend_days` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessDayResult {
    /// First date of the span.
    pub start: CalendarDate,
    /// Last date of the span, never earlier than `start`.
    pub end: CalendarDate,
    /// Monday–Friday dates in the span.
    pub business_days: u64,
    /// Every date in the span.
    pub calendar_days: u64,
    /// Saturday and Sunday dates in the span.
    pub weekend_days: u64,
}

impl BusinessDayResult {
    /// Count business and weekend days from `start` through `end`.
    ///
    /// # Errors
    ///
    /// Returns [`DateAnalysisError::Ordering`] if `end` precedes `start`.
    pub fn between(start: CalendarDate, end: CalendarDate) -> Result<Self, DateAnalysisError> {
        if end < start {
            return Err(DateAnalysisError::Ordering {
                start_field: "start_date",
                start: start.to_string(),
                end_field: "end_date",
                end: end.to_string(),
            });
        }

        let (business_days, weekend_days) =
            start
                .days_through(end)
                .fold((0u64, 0u64), |(business, weekend), day| {
                    if day.is_weekend() {
                        (business, weekend + 1)
                    } else {
                        (business + 1, weekend)
                    }
                });
        let calendar_days = business_days + weekend_days;

        tracing::debug!(
            %start,
            %end,
            business_days,
            weekend_days,
            "counted business days"
        );

        Ok(Self {
            start,
            end,
            business_days,
            calendar_days,
            weekend_days,
        })
    }
}

impl fmt::Display for BusinessDayResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Business days: {}, Calendar days: {}, Weekend days: {} (from {} to {})",
            self.business_days, self.calendar_days, self.weekend_days, self.start, self.end
        )
    }
}

/// Parse two `YYYY-MM-DD` dates and count the business days between them,
/// both ends inclusive.
///
/// # Errors
///
/// - [`DateAnalysisError::Format`] naming `start_date` or `end_date`.
/// - [`DateAnalysisError::Ordering`] if the end precedes the start.
pub fn compute_business_days(
    start: &str,
    end: &str,
) -> Result<BusinessDayResult, DateAnalysisError> {
    let start = CalendarDate::parse_field(start, "start_date")?;
    let end = CalendarDate::parse_field(end, "end_date")?;
    BusinessDayResult::between(start, end)
}
