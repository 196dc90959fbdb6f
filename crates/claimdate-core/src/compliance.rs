//! # Policy Deadline Compliance
//!
//! Checks whether an event (claim filing, notification, report) happened
//! within an allowed number of days after a reference date (usually the
//! incident date).
//!
//! ## Rules
//!
//! - `offset_days = event - reference`, in calendar days.
//! - The event must not precede the reference date; that is rejected as
//!   [`DateAnalysisError::InvalidSequence`], not reported as a negative offset.
//! - `offset_days <= deadline_days` is compliant. The deadline day itself
//!   is within policy.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DateAnalysisError;
use crate::temporal::CalendarDate;

/// Outcome of a compliance check. Exactly one of remaining/exceeded exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// Event happened on or before the deadline.
    Compliant {
        /// Days left before the deadline; zero on the deadline day.
        remaining_days: i64,
    },
    /// Event happened after the deadline.
    NonCompliant {
        /// Days past the deadline; always positive.
        exceeded_by_days: i64,
    },
}

/// Result of checking an event date against a policy deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceResult {
    /// Date of the event being checked.
    pub event_date: CalendarDate,
    /// Date the deadline is counted from.
    pub reference_date: CalendarDate,
    /// `event_date - reference_date` in days; never negative.
    pub offset_days: i64,
    /// Allowed days after the reference date.
    pub deadline_days: u32,
    /// Compliance verdict.
    #[serde(flatten)]
    pub status: ComplianceStatus,
}

impl ComplianceResult {
    /// Evaluate `event_date` against a deadline of `deadline_days` counted
    /// from `reference_date`.
    ///
    /// # Errors
    ///
    /// Returns [`DateAnalysisError::InvalidSequence`] if the event precedes
    /// the reference date.
    pub fn evaluate(
        event_date: CalendarDate,
        reference_date: CalendarDate,
        deadline_days: u32,
    ) -> Result<Self, DateAnalysisError> {
        let offset_days = event_date.days_since(&reference_date);
        if offset_days < 0 {
            return Err(DateAnalysisError::InvalidSequence {
                event: event_date.to_string(),
                reference: reference_date.to_string(),
                offset_days,
            });
        }

        let deadline = i64::from(deadline_days);
        let status = if offset_days <= deadline {
            ComplianceStatus::Compliant {
                remaining_days: deadline - offset_days,
            }
        } else {
            ComplianceStatus::NonCompliant {
                exceeded_by_days: offset_days - deadline,
            }
        };

        tracing::debug!(
            %event_date,
            %reference_date,
            offset_days,
            deadline_days,
            compliant = matches!(status, ComplianceStatus::Compliant { .. }),
            "evaluated deadline compliance"
        );

        Ok(Self {
            event_date,
            reference_date,
            offset_days,
            deadline_days,
            status,
        })
    }

    /// Whether the event met the deadline.
    pub fn is_compliant(&self) -> bool {
        matches!(self.status, ComplianceStatus::Compliant { .. })
    }

    /// Days left before the deadline, if compliant.
    pub fn remaining_days(&self) -> Option<i64> {
        match self.status {
            ComplianceStatus::Compliant { remaining_days } => Some(remaining_days),
            ComplianceStatus::NonCompliant { .. } => None,
        }
    }

    /// Days past the deadline, if non-compliant.
    pub fn exceeded_by_days(&self) -> Option<i64> {
        match self.status {
            ComplianceStatus::Compliant { .. } => None,
            ComplianceStatus::NonCompliant { exceeded_by_days } => Some(exceeded_by_days),
        }
    }
}

impl fmt::Display for ComplianceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            ComplianceStatus::Compliant { remaining_days } => write!(
                f,
                "COMPLIANT: Event occurred {} days after reference date. Deadline: {} days. \
                 Status: Within deadline ({} days remaining)",
                self.offset_days, self.deadline_days, remaining_days
            ),
            ComplianceStatus::NonCompliant { exceeded_by_days } => write!(
                f,
                "NON-COMPLIANT: Event occurred {} days after reference date. Deadline: {} days. \
                 Status: EXCEEDED deadline by {} days",
                self.offset_days, self.deadline_days, exceeded_by_days
            ),
        }
    }
}

/// Validate a deadline given as a signed integer.
///
/// # Errors
///
/// Returns [`DateAnalysisError::Parameter`] for negative values or values
/// beyond `u32::MAX`.
pub fn deadline_from_i64(deadline_days: i64) -> Result<u32, DateAnalysisError> {
    if deadline_days < 0 {
        return Err(DateAnalysisError::Parameter {
            name: "deadline_days",
            value: deadline_days.to_string(),
            reason: "must be a non-negative integer",
        });
    }
    u32::try_from(deadline_days).map_err(|_| DateAnalysisError::Parameter {
        name: "deadline_days",
        value: deadline_days.to_string(),
        reason: "exceeds the largest supported deadline",
    })
}

/// Parse two `YYYY-MM-DD` dates and check the event against the deadline.
///
/// The deadline is validated before the dates are parsed.
///
/// # Errors
///
/// - [`DateAnalysisError::Parameter`] for a negative `deadline_days`.
/// - [`DateAnalysisError::Format`] naming `event_date` or `reference_date`.
/// - [`DateAnalysisError::InvalidSequence`] if the event precedes the reference.
pub fn check_compliance(
    event_date: &str,
    reference_date: &str,
    deadline_days: i64,
) -> Result<ComplianceResult, DateAnalysisError> {
    let deadline = deadline_from_i64(deadline_days)?;
    let event = CalendarDate::parse_field(event_date, "event_date")?;
    let reference = CalendarDate::parse_field(reference_date, "reference_date")?;
    ComplianceResult::evaluate(event, reference, deadline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_within_deadline() {
        let r = check_compliance("2024-01-20", "2024-01-15", 30).unwrap();
        assert_eq!(
            r.to_string(),
            "COMPLIANT: Event occurred 5 days after reference date. Deadline: 30 days. \
             Status: Within deadline (25 days remaining)"
        );
    }

    #[test]
    fn exactly_on_deadline_is_compliant() {
        let r = check_compliance("2024-02-14", "2024-01-15", 30).unwrap();
        assert_eq!(r.offset_days, 30);
        assert!(r.is_compliant());
        assert_eq!(r.remaining_days(), Some(0));
        assert_eq!(r.exceeded_by_days(), None);
    }

    #[test]
    fn same_day_zero_deadline() {
        let r = check_compliance("2024-01-15", "2024-01-15", 0).unwrap();
        assert!(r.is_compliant());
        assert_eq!(r.remaining_days(), Some(0));
    }

    #[test]
    fn same_day_is_compliant() {
        let r = check_compliance("2024-01-15", "2024-01-15", 30).unwrap();
        assert_eq!(r.remaining_days(), Some(30));
    }

    #[test]
    fn past_deadline() {
        let r = check_compliance("2024-02-20", "2024-01-15", 30).unwrap();
        assert!(!r.is_compliant());
        assert_eq!(r.exceeded_by_days(), Some(6));
        assert_eq!(
            r.to_string(),
            "NON-COMPLIANT: Event occurred 36 days after reference date. Deadline: 30 days. \
             Status: EXCEEDED deadline by 6 days"
        );
    }

    #[test]
    fn short_deadlines() {
        assert!(check_compliance("2024-01-17", "2024-01-15", 3).unwrap().is_compliant());
        let r = check_compliance("2024-01-20", "2024-01-15", 3).unwrap();
        assert_eq!(r.exceeded_by_days(), Some(2));
    }

    #[test]
    fn crosses_month_and_year() {
        let r = check_compliance("2024-02-05", "2024-01-25", 15).unwrap();
        assert_eq!(r.offset_days, 11);
        let r = check_compliance("2024-01-10", "2023-12-20", 30).unwrap();
        assert_eq!(r.offset_days, 21);
        assert_eq!(r.remaining_days(), Some(9));
    }

    #[test]
    fn event_before_reference_is_invalid_sequence() {
        let err = check_compliance("2024-01-10", "2024-01-15", 30).unwrap_err();
        assert_eq!(
            err,
            DateAnalysisError::InvalidSequence {
                event: "2024-01-10".to_string(),
                reference: "2024-01-15".to_string(),
                offset_days: -5,
            }
        );
    }

    #[test]
    fn negative_deadline_is_parameter_error() {
        let err = check_compliance("2024-01-20", "2024-01-15", -1).unwrap_err();
        assert!(matches!(err, DateAnalysisError::Parameter { .. }));
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn oversized_deadline_is_parameter_error() {
        let err = deadline_from_i64(i64::from(u32::MAX) + 1).unwrap_err();
        assert!(matches!(err, DateAnalysisError::Parameter { .. }));
    }

    #[test]
    fn deadline_checked_before_dates() {
        let err = check_compliance("garbage", "2024-01-15", -3).unwrap_err();
        assert!(matches!(err, DateAnalysisError::Parameter { .. }));
    }

    #[test]
    fn malformed_event_date() {
        let err = check_compliance("01/20/2024", "2024-01-15", 30).unwrap_err();
        assert!(err.to_string().contains("event_date"));
        let err = check_compliance("2024-01-20", "Jan 15", 30).unwrap_err();
        assert!(err.to_string().contains("reference_date"));
    }

    #[test]
    fn serde_flattens_status() {
        let r = check_compliance("2024-02-20", "2024-01-15", 30).unwrap();
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(json["status"], "non_compliant");
        assert_eq!(json["exceeded_by_days"], 6);
        assert_eq!(json["event_date"], "2024-02-20");
        assert!(json.get("remaining_days").is_none());
    }
}
