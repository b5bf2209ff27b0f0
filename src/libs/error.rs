//! Validation errors raised by the reporting core.
//!
//! Every variant is a local, synchronous failure surfaced to the caller; none
//! of them is retried. Malformed individual attendance records are not part of
//! this taxonomy at the aggregation stage: they are skipped so the rest of a
//! report survives.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// The report type selector is not one of weekly, biweekly, monthly or bimonthly.
    #[error("Unsupported report type: '{0}'")]
    UnsupportedReportType(String),

    /// A weekly report was requested for a week the month does not have.
    #[error("Invalid week selection: week {index:?} requested, {available} week(s) available")]
    InvalidWeekSelection { index: Option<usize>, available: usize },

    /// A bimonthly report was requested without a valid half-of-month selector.
    #[error("Invalid period selector: '{0}' (expected 'first' or 'second')")]
    InvalidPeriodSelector(String),

    /// A duration string is not in canonical `H:MM` form.
    #[error("Malformed duration: '{0}' (expected H:MM)")]
    MalformedDuration(String),

    #[error("Invalid calendar month: {year}-{month:02}")]
    InvalidCalendarMonth { year: i32, month: u32 },

    #[error("Invalid timestamp: '{0}'")]
    InvalidTimestamp(String),

    #[error("Attendance record is missing '{0}'")]
    MissingField(&'static str),

    /// The attendance payload is not a JSON array of records.
    #[error("Attendance data is not a list of records: {0}")]
    NotARecordList(String),

    /// A clock time is not `HH:MM` (or `HH:MM:SS`).
    #[error("Invalid time: '{0}' (expected HH:MM)")]
    InvalidClockTime(String),

    #[error("Checkout time {check_out} must be after check-in time {check_in}")]
    CheckOutNotAfterCheckIn { check_in: String, check_out: String },

    #[error("No open session found for employee '{0}'")]
    NoOpenSession(String),

    /// More than one open session matches; a check-in time must disambiguate.
    #[error("Employee '{pin}' has {count} open sessions, pass the check-in time")]
    AmbiguousOpenSession { pin: String, count: usize },
}
