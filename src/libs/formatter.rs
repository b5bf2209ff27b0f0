//! Duration and clock formatting for attendance reports.
//!
//! Worked time is always carried as a whole number of minutes and displayed
//! as `H:MM`: hours without padding, minutes zero-padded to two digits.
//!
//! ## Format Specifications
//!
//! - 0 minutes → `"0:00"`
//! - 65 minutes → `"1:05"`
//! - 480 minutes → `"8:00"`
//! - 6000 minutes → `"100:00"`
//!
//! [`display_to_minutes`] is the exact inverse of [`minutes_to_display`]: it
//! only accepts the canonical form the formatter produces, so
//! `minutes_to_display(display_to_minutes(s)?) == s` for every accepted `s`.
//!
//! ## Examples
//!
//! ```rust
//! use punchclock::libs::formatter::{display_to_minutes, minutes_to_display};
//!
//! assert_eq!(minutes_to_display(90), "1:30");
//! assert_eq!(display_to_minutes("1:30").unwrap(), 90);
//! ```

use super::error::ReportError;
use chrono::{Duration, NaiveDateTime, Timelike};

/// Placeholder rendered for a missing clock time.
pub const NO_TIME: &str = "--";

/// Formats a minute count as `H:MM`.
///
/// # Examples
///
/// ```rust
/// use punchclock::libs::formatter::minutes_to_display;
///
/// assert_eq!(minutes_to_display(0), "0:00");
/// assert_eq!(minutes_to_display(59), "0:59");
/// assert_eq!(minutes_to_display(605), "10:05");
/// ```
pub fn minutes_to_display(total_minutes: u64) -> String {
    format!("{}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Parses a canonical `H:MM` string back into minutes.
///
/// Hours are one or more ASCII digits without a leading zero (except `"0"`
/// itself); minutes are exactly two digits below 60. Anything else, including
/// surrounding whitespace, fails with [`ReportError::MalformedDuration`].
pub fn display_to_minutes(display: &str) -> Result<u64, ReportError> {
    let malformed = || ReportError::MalformedDuration(display.to_string());

    let (hours, minutes) = display.split_once(':').ok_or_else(malformed)?;

    let digits_only = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !digits_only(hours) || !digits_only(minutes) {
        return Err(malformed());
    }
    if hours.len() > 1 && hours.starts_with('0') {
        return Err(malformed());
    }
    if minutes.len() != 2 {
        return Err(malformed());
    }

    let hours: u64 = hours.parse().map_err(|_| malformed())?;
    let minutes: u64 = minutes.parse().map_err(|_| malformed())?;
    if minutes >= 60 {
        return Err(malformed());
    }

    hours.checked_mul(60).and_then(|m| m.checked_add(minutes)).ok_or_else(malformed)
}

/// Formats a chrono duration as `H:MM`, truncating seconds.
///
/// Negative durations are a data anomaly rather than an error and render as
/// `"0:00"`.
pub fn format_duration(duration: &Duration) -> String {
    minutes_to_display(duration_minutes(duration))
}

/// Whole minutes in `duration`, floored and clamped to zero.
pub fn duration_minutes(duration: &Duration) -> u64 {
    duration.num_minutes().max(0) as u64
}

/// Formats a timestamp as a 12-hour clock time, e.g. `"9:05 AM"`.
pub fn format_clock(time: &NaiveDateTime) -> String {
    let (is_pm, hour) = time.hour12();
    format!("{}:{:02} {}", hour, time.minute(), if is_pm { "PM" } else { "AM" })
}

/// Like [`format_clock`], rendering [`NO_TIME`] when there is no timestamp.
pub fn format_optional_clock(time: Option<&NaiveDateTime>) -> String {
    time.map(format_clock).unwrap_or_else(|| NO_TIME.to_string())
}

/// Converts minutes to fractional hours rounded to one decimal place.
pub fn minutes_to_hours(total_minutes: u64) -> f64 {
    (total_minutes as f64 / 60.0 * 10.0).round() / 10.0
}
