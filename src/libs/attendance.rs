//! Attendance records and their boundary mapping.
//!
//! The attendance API delivers loosely shaped rows ([`RawRecord`]): fields
//! may be missing, identifiers may be strings or numbers, and extra fields
//! are common. Rows are mapped into the strict [`AttendanceRecord`] before
//! anything aggregates them.
//!
//! ## Mapping Rules
//!
//! - Display strings are trimmed and stripped of control characters
//! - `CheckInTime` is required and must parse
//! - An empty `CheckOutTime` means the employee is still clocked in
//! - A non-empty `CheckOutTime` that does not parse rejects the row
//! - Missing `Pin` / `Name` become empty strings; the aggregator skips them
//! - `EmpID` is kept for search and for addressing entries on write
//! - `TimeWorked` is ignored; worked time is always derived from the timestamps
//!
//! Rejected rows are skipped by [`normalize`] and logged at debug level.

use super::error::ReportError;
use crate::msg_debug;
use chrono::{DateTime, Duration, Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Timestamp layouts accepted besides RFC 3339.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// One attendance row as delivered by the attendance API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Pin", default, deserialize_with = "lenient_string")]
    pub pin: Option<String>,
    #[serde(rename = "Name", default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(rename = "EmpID", default, deserialize_with = "lenient_string")]
    pub emp_id: Option<String>,
    #[serde(rename = "CheckInTime", default, deserialize_with = "lenient_string")]
    pub check_in_time: Option<String>,
    #[serde(rename = "CheckOutTime", default, deserialize_with = "lenient_string")]
    pub check_out_time: Option<String>,
    #[serde(rename = "DeviceID", default, deserialize_with = "lenient_string")]
    pub device_id: Option<String>,
    #[serde(rename = "Type", default, deserialize_with = "lenient_string")]
    pub entry_type: Option<String>,
}

/// Accepts strings, numbers and booleans; everything else is treated as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// A single check-in, optionally closed by a check-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub employee_id: String,
    pub employee_name: String,
    /// Backend employee id, distinct from the PIN.
    pub emp_id: Option<String>,
    pub check_in: NaiveDateTime,
    pub check_out: Option<NaiveDateTime>,
    pub device_id: Option<String>,
    pub entry_type: Option<String>,
}

impl AttendanceRecord {
    pub fn new(employee_id: &str, employee_name: &str, check_in: NaiveDateTime) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            employee_name: employee_name.to_string(),
            emp_id: None,
            check_in,
            check_out: None,
            device_id: None,
            entry_type: None,
        }
    }

    pub fn with_check_out(mut self, check_out: NaiveDateTime) -> Self {
        self.check_out = Some(check_out);
        self
    }

    pub fn with_emp_id(mut self, emp_id: &str) -> Self {
        self.emp_id = Some(emp_id.to_string());
        self
    }

    pub fn with_device(mut self, device_id: &str) -> Self {
        self.device_id = Some(device_id.to_string());
        self
    }

    pub fn with_entry_type(mut self, entry_type: &str) -> Self {
        self.entry_type = Some(entry_type.to_string());
        self
    }

    pub fn is_complete(&self) -> bool {
        self.check_out.is_some()
    }

    /// Worked time for a closed record; a check-out before the check-in counts as zero.
    pub fn worked(&self) -> Option<Duration> {
        self.check_out.map(|out| (out - self.check_in).max(Duration::zero()))
    }

    /// Worked time measured up to `now` when the record is still open.
    pub fn worked_until(&self, now: NaiveDateTime) -> Duration {
        let end = self.check_out.unwrap_or(now);
        (end - self.check_in).max(Duration::zero())
    }

    /// Whether the aggregator can attribute this record to an employee.
    pub fn is_identified(&self) -> bool {
        !self.employee_id.is_empty() && !self.employee_name.is_empty()
    }
}

impl TryFrom<RawRecord> for AttendanceRecord {
    type Error = ReportError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let check_in = match non_empty(raw.check_in_time.as_deref()) {
            Some(value) => parse_timestamp(value)?,
            None => return Err(ReportError::MissingField("CheckInTime")),
        };
        let check_out = match non_empty(raw.check_out_time.as_deref()) {
            Some(value) => Some(parse_timestamp(value)?),
            None => None,
        };

        Ok(Self {
            employee_id: sanitize(raw.pin.as_deref().unwrap_or_default()),
            employee_name: sanitize(raw.name.as_deref().unwrap_or_default()),
            emp_id: non_empty(raw.emp_id.as_deref()).map(sanitize),
            check_in,
            check_out,
            device_id: non_empty(raw.device_id.as_deref()).map(sanitize),
            entry_type: non_empty(raw.entry_type.as_deref()).map(sanitize),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Trims and drops control characters so values stay on one CSV row.
pub fn sanitize(value: &str) -> String {
    value.chars().filter(|c| !c.is_control()).collect::<String>().trim().to_string()
}

/// Parses an attendance timestamp.
///
/// RFC 3339 values carry an offset and are converted to local wall-clock
/// time; naive values are taken as they are.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, ReportError> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Local).naive_local());
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| ReportError::InvalidTimestamp(value.to_string()))
}

/// Maps raw rows into strict records, skipping the ones that cannot be mapped.
pub fn normalize(raw: Vec<RawRecord>) -> Vec<AttendanceRecord> {
    raw.into_iter()
        .filter_map(|row| match AttendanceRecord::try_from(row) {
            Ok(record) => Some(record),
            Err(e) => {
                msg_debug!(format!("Skipping attendance row: {}", e));
                None
            }
        })
        .collect()
}

/// Parses a JSON payload into attendance records.
///
/// The payload must be an array; individual rows that cannot be mapped are
/// skipped.
pub fn parse_records(json: &str) -> Result<Vec<AttendanceRecord>, ReportError> {
    let value: Value = serde_json::from_str(json).map_err(|e| ReportError::NotARecordList(e.to_string()))?;
    records_from_value(value)
}

/// Like [`parse_records`], for an already decoded JSON value.
pub fn records_from_value(value: Value) -> Result<Vec<AttendanceRecord>, ReportError> {
    let rows = match value {
        Value::Array(rows) => rows,
        other => return Err(ReportError::NotARecordList(json_kind(&other).to_string())),
    };

    let raw = rows
        .into_iter()
        .filter_map(|row| match serde_json::from_value::<RawRecord>(row) {
            Ok(raw) => Some(raw),
            Err(e) => {
                msg_debug!(format!("Skipping non-record attendance entry: {}", e));
                None
            }
        })
        .collect();

    Ok(normalize(raw))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub trait DeviceFilter {
    /// Keeps the records captured by `device_id`.
    ///
    /// When no record matches, every record is kept: an unknown or idle
    /// device must not blank the report.
    fn for_device(self, device_id: Option<&str>) -> Vec<AttendanceRecord>;
}

impl DeviceFilter for Vec<AttendanceRecord> {
    fn for_device(self, device_id: Option<&str>) -> Vec<AttendanceRecord> {
        let Some(device_id) = device_id.filter(|d| !d.is_empty()) else {
            return self;
        };

        let matching: Vec<AttendanceRecord> = self
            .iter()
            .filter(|record| record.device_id.as_deref() == Some(device_id))
            .cloned()
            .collect();

        if matching.is_empty() {
            msg_debug!(format!("No records for device {}, keeping all {}", device_id, self.len()));
            self
        } else {
            matching
        }
    }
}
