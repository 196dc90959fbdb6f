//! # claimdate-core: Claim Date Analysis
//!
//! Pure date/time calculations used when analysing insurance claims:
//!
//! - **Duration** (`duration.rs`): elapsed days, hours and minutes between
//!   two `YYYY-MM-DD HH:MM:SS` timestamps.
//! - **Business days** (`business.rs`): weekday and weekend counts over an
//!   inclusive `YYYY-MM-DD` span.
//! - **Compliance** (`compliance.rs`): whether an event date falls within
//!   a policy deadline counted from a reference date.
//!
//! Each calculator returns a structured result whose `Display` impl is the
//! human-readable report. Failures are typed [`DateAnalysisError`] values
//! that name the rejected input and the expected pattern.
//!
//! ## Crate Policy
//!
//! - No I/O, no shared state. Every function is deterministic in its inputs
//!   and safe to call from any thread.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod business;
pub mod compliance;
pub mod duration;
pub mod error;
pub mod temporal;

pub use business::{compute_business_days, BusinessDayResult};
pub use compliance::{check_compliance, deadline_from_i64, ComplianceResult, ComplianceStatus};
pub use duration::{compute_duration, DurationResult};
pub use error::DateAnalysisError;
pub use temporal::{CalendarDate, Timestamp, DATE_PATTERN, TIMESTAMP_PATTERN};
