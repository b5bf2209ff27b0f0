//! Reporting period resolution.
//!
//! Maps a report type and a calendar selection to one inclusive date range.
//!
//! | Report type | Range |
//! |-------------|-------|
//! | Weekly      | the selected Monday-aligned week of the month, clipped to the month |
//! | Biweekly    | the 14 days ending today |
//! | Monthly     | the whole month |
//! | Bimonthly   | 1st–15th or 16th–last day |
//!
//! Resolution is a pure function of its inputs; "today" is passed in by the
//! caller and only matters for biweekly reports.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use punchclock::libs::period::{Half, PeriodRequest, ReportType};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let request = PeriodRequest::new(ReportType::Bimonthly, 2024, 2).with_half(Half::Second);
//! let period = request.resolve(today).unwrap();
//! assert_eq!(period.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
//! ```

use super::error::ReportError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Last day of the first half of a month in bimonthly reports.
pub const FIRST_HALF_LAST_DAY: u32 = 15;

/// Number of calendar days covered by a biweekly report.
pub const BIWEEKLY_DAYS: i64 = 14;

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportType {
    Weekly,
    Biweekly,
    Monthly,
    Bimonthly,
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for ReportType {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(ReportType::Weekly),
            "biweekly" => Ok(ReportType::Biweekly),
            "monthly" => Ok(ReportType::Monthly),
            "bimonthly" => Ok(ReportType::Bimonthly),
            _ => Err(ReportError::UnsupportedReportType(s.to_string())),
        }
    }
}

/// Half of the month selected for a bimonthly report.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Half {
    First,
    Second,
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Half::First => write!(f, "first"),
            Half::Second => write!(f, "second"),
        }
    }
}

impl FromStr for Half {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Half::First),
            "second" => Ok(Half::Second),
            _ => Err(ReportError::InvalidPeriodSelector(s.to_string())),
        }
    }
}

/// An inclusive date range; `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ReportPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportPeriod {
    /// Builds a period, swapping the bounds if they arrive reversed.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }

    /// A period covering a single day.
    pub fn day(date: NaiveDate) -> Self {
        Self { start: date, end: date }
    }

    /// Number of calendar days in the period, both ends included.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Human readable range, e.g. `"01 Jan 2024 - 07 Jan 2024"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.start.format("%d %b %Y"), self.end.format("%d %b %Y"))
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} to {}", self.start.format("%Y-%m-%d"), self.end.format("%Y-%m-%d"))
    }
}

/// The calendar selection a report view hands to the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodRequest {
    pub report_type: ReportType,
    pub year: i32,
    pub month: u32,
    /// 0-based index into [`weeks_in_month`]; weekly reports only.
    pub week: Option<usize>,
    /// Bimonthly reports only.
    pub half: Option<Half>,
}

impl PeriodRequest {
    pub fn new(report_type: ReportType, year: i32, month: u32) -> Self {
        Self {
            report_type,
            year,
            month,
            week: None,
            half: None,
        }
    }

    pub fn with_week(mut self, week: usize) -> Self {
        self.week = Some(week);
        self
    }

    pub fn with_half(mut self, half: Half) -> Self {
        self.half = Some(half);
        self
    }

    /// Resolves the request into a concrete period.
    ///
    /// # Errors
    ///
    /// - [`ReportError::InvalidWeekSelection`] when a weekly request has no
    ///   week or a week beyond the month's weeks
    /// - [`ReportError::InvalidPeriodSelector`] when a bimonthly request has no half
    /// - [`ReportError::InvalidCalendarMonth`] when `(year, month)` is not a month
    pub fn resolve(&self, today: NaiveDate) -> Result<ReportPeriod, ReportError> {
        match self.report_type {
            ReportType::Weekly => {
                let weeks = weeks_in_month(self.year, self.month)?;
                self.week
                    .and_then(|index| weeks.get(index).copied())
                    .ok_or(ReportError::InvalidWeekSelection {
                        index: self.week,
                        available: weeks.len(),
                    })
            }
            ReportType::Biweekly => Ok(biweekly(today)),
            ReportType::Monthly => {
                let start = first_day_of_month(self.year, self.month)?;
                let end = last_day_of_month(self.year, self.month)?;
                Ok(ReportPeriod { start, end })
            }
            ReportType::Bimonthly => {
                let half = self.half.ok_or_else(|| ReportError::InvalidPeriodSelector(String::new()))?;
                bimonthly(self.year, self.month, half)
            }
        }
    }
}

/// Resolves a period from loosely typed selector strings, as received from a form.
pub fn resolve_period(
    report_type: &str,
    year: i32,
    month: u32,
    week: Option<usize>,
    half: Option<&str>,
    today: NaiveDate,
) -> Result<ReportPeriod, ReportError> {
    let mut request = PeriodRequest::new(report_type.parse()?, year, month);
    request.week = week;
    if request.report_type == ReportType::Bimonthly {
        let half = half.ok_or_else(|| ReportError::InvalidPeriodSelector(String::new()))?;
        request.half = Some(half.parse()?);
    }
    request.resolve(today)
}

pub fn first_day_of_month(year: i32, month: u32) -> Result<NaiveDate, ReportError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(ReportError::InvalidCalendarMonth { year, month })
}

/// Last calendar day of the month, leap years included.
pub fn last_day_of_month(year: i32, month: u32) -> Result<NaiveDate, ReportError> {
    let invalid = ReportError::InvalidCalendarMonth { year, month };
    first_day_of_month(year, month)?;
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .ok_or(invalid)
}

/// Monday-aligned weeks of a month.
///
/// Weeks start on the first Monday on or after the 1st; days before it
/// belong to no week. The last week is clipped to the month's last day, so
/// it may be shorter than seven days.
pub fn weeks_in_month(year: i32, month: u32) -> Result<Vec<ReportPeriod>, ReportError> {
    let first = first_day_of_month(year, month)?;
    let last = last_day_of_month(year, month)?;

    let mut current = first;
    while current.weekday() != Weekday::Mon && current <= last {
        current += Duration::days(1);
    }

    let mut weeks = Vec::new();
    while current <= last {
        let end = (current + Duration::days(6)).min(last);
        weeks.push(ReportPeriod { start: current, end });
        current += Duration::days(7);
    }

    Ok(weeks)
}

/// The fourteen days ending on `today`, inclusive.
pub fn biweekly(today: NaiveDate) -> ReportPeriod {
    ReportPeriod {
        start: today - Duration::days(BIWEEKLY_DAYS - 1),
        end: today,
    }
}

/// First half is the 1st to the 15th, second half the 16th to the month's end.
pub fn bimonthly(year: i32, month: u32, half: Half) -> Result<ReportPeriod, ReportError> {
    let invalid = || ReportError::InvalidCalendarMonth { year, month };
    let last = last_day_of_month(year, month)?;
    match half {
        Half::First => Ok(ReportPeriod {
            start: first_day_of_month(year, month)?,
            end: NaiveDate::from_ymd_opt(year, month, FIRST_HALF_LAST_DAY).ok_or_else(invalid)?,
        }),
        Half::Second => Ok(ReportPeriod {
            start: NaiveDate::from_ymd_opt(year, month, FIRST_HALF_LAST_DAY + 1).ok_or_else(invalid)?,
            end: last,
        }),
    }
}

/// The month before `today`'s month, which report views preselect.
pub fn previous_month(today: NaiveDate) -> (i32, u32) {
    if today.month() == 1 {
        (today.year() - 1, 12)
    } else {
        (today.year(), today.month() - 1)
    }
}
