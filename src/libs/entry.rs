//! Manual attendance entries and checkout corrections.
//!
//! Both are written back to the attendance API. Payloads are built and
//! validated here; [`ReportsApi`](crate::api::ReportsApi) only sends them.
//!
//! ## Rules
//!
//! - Clock times are typed as `HH:MM` and combined with a calendar date
//! - A checkout must be strictly after its check-in
//! - A checkout correction lands on the check-in's date
//! - `TimeWorked` is computed here as `H:MM`; an entry without checkout gets `"0:00"`
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use punchclock::libs::entry::NewEntry;
//!
//! let entry = NewEntry {
//!     emp_id: "1001".to_string(),
//!     entry_type: "Office".to_string(),
//!     date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
//!     check_in: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
//!     check_out: NaiveTime::from_hms_opt(17, 30, 0),
//! };
//! let payload = entry.payload("42", "Admin").unwrap();
//! assert_eq!(payload.time_worked, "8:30");
//! ```

use super::attendance::{sanitize, AttendanceRecord};
use super::error::ReportError;
use super::formatter::format_duration;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

/// Author recorded on writes when none is given.
pub const DEFAULT_MODIFIED_BY: &str = "Admin";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";
const CLOCK_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S"];

/// Parses an operator-typed wall-clock time.
pub fn parse_clock_time(value: &str) -> Result<NaiveTime, ReportError> {
    let value = value.trim();
    CLOCK_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
        .ok_or_else(|| ReportError::InvalidClockTime(value.to_string()))
}

/// Timestamp layout the attendance API stores and keys entries by.
pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Worked time between check-in and checkout as `H:MM`.
///
/// # Errors
///
/// [`ReportError::CheckOutNotAfterCheckIn`] unless `check_out > check_in`.
pub fn time_worked(check_in: NaiveDateTime, check_out: NaiveDateTime) -> Result<String, ReportError> {
    if check_out <= check_in {
        return Err(ReportError::CheckOutNotAfterCheckIn {
            check_in: format_timestamp(&check_in),
            check_out: format_timestamp(&check_out),
        });
    }
    Ok(format_duration(&(check_out - check_in)))
}

/// A manual entry as typed by an administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub emp_id: String,
    pub entry_type: String,
    pub date: NaiveDate,
    pub check_in: NaiveTime,
    pub check_out: Option<NaiveTime>,
}

/// Body of a create-entry request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntryPayload {
    #[serde(rename = "CID")]
    pub company_id: String,
    #[serde(rename = "EmpID")]
    pub emp_id: String,
    #[serde(rename = "TypeID")]
    pub type_id: String,
    pub check_in_snap: Option<String>,
    pub check_in_time: String,
    pub check_out_snap: Option<String>,
    pub check_out_time: Option<String>,
    pub time_worked: String,
    pub date: String,
    pub last_modified_by: String,
}

impl NewEntry {
    pub fn check_in_at(&self) -> NaiveDateTime {
        self.date.and_time(self.check_in)
    }

    pub fn check_out_at(&self) -> Option<NaiveDateTime> {
        self.check_out.map(|time| self.date.and_time(time))
    }

    /// Validates the entry and builds the request body for `company_id`.
    pub fn payload(&self, company_id: &str, modified_by: &str) -> Result<EntryPayload, ReportError> {
        let emp_id = Some(sanitize(&self.emp_id))
            .filter(|id| !id.is_empty())
            .ok_or(ReportError::MissingField("EmpID"))?;
        let type_id = Some(sanitize(&self.entry_type))
            .filter(|t| !t.is_empty())
            .ok_or(ReportError::MissingField("Type"))?;

        let check_in = self.check_in_at();
        let time_worked = match self.check_out_at() {
            Some(check_out) => time_worked(check_in, check_out)?,
            None => "0:00".to_string(),
        };

        Ok(EntryPayload {
            company_id: company_id.to_string(),
            emp_id,
            type_id,
            check_in_snap: None,
            check_in_time: format_timestamp(&check_in),
            check_out_snap: None,
            check_out_time: self.check_out_at().map(|t| format_timestamp(&t)),
            time_worked,
            date: self.date.format(DATE_FORMAT).to_string(),
            last_modified_by: modified_by.to_string(),
        })
    }
}

/// Body of a checkout correction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutPayload {
    pub type_id: String,
    pub check_out_time: String,
    pub time_worked: String,
    pub check_in_snap: Option<String>,
    pub check_out_snap: Option<String>,
    pub date: String,
    pub last_modified_by: String,
}

/// A checkout correction and the entry it addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutUpdate {
    pub emp_id: String,
    pub check_in: NaiveDateTime,
    pub payload: CheckoutPayload,
}

impl CheckoutUpdate {
    /// Closes the open `record` at `at` on its check-in date.
    pub fn new(record: &AttendanceRecord, at: NaiveTime, modified_by: &str) -> Result<Self, ReportError> {
        if record.is_complete() {
            return Err(ReportError::NoOpenSession(record.employee_id.clone()));
        }
        let emp_id = record.emp_id.clone().ok_or(ReportError::MissingField("EmpID"))?;

        let date = record.check_in.date();
        let check_out = date.and_time(at);
        let time_worked = time_worked(record.check_in, check_out)?;

        Ok(Self {
            emp_id,
            check_in: record.check_in,
            payload: CheckoutPayload {
                type_id: record.entry_type.clone().unwrap_or_default(),
                check_out_time: format_timestamp(&check_out),
                time_worked,
                check_in_snap: None,
                check_out_snap: None,
                date: date.format(DATE_FORMAT).to_string(),
                last_modified_by: modified_by.to_string(),
            },
        })
    }
}

/// Finds the single open session of `pin`, optionally pinned to a check-in time (hour and minute).
pub fn find_open_session<'a>(
    records: &'a [AttendanceRecord],
    pin: &str,
    check_in: Option<NaiveTime>,
) -> Result<&'a AttendanceRecord, ReportError> {
    let pin = pin.trim();
    let open: Vec<&AttendanceRecord> = records
        .iter()
        .filter(|r| r.employee_id == pin && !r.is_complete())
        .filter(|r| {
            check_in.map_or(true, |t| r.check_in.hour() == t.hour() && r.check_in.minute() == t.minute())
        })
        .collect();

    match open.as_slice() {
        [] => Err(ReportError::NoOpenSession(pin.to_string())),
        [record] => Ok(*record),
        _ => Err(ReportError::AmbiguousOpenSession {
            pin: pin.to_string(),
            count: open.len(),
        }),
    }
}
