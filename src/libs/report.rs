//! Contains shared logic for report generation.
//!
//! A [`Report`] is the table a report view shows and exports. Rows are built
//! from day-wise summaries (one detailed row per employee), from simple-sum
//! totals (name, pin and time worked only) or straight from the records
//! (one detailed row per check-in).

use crate::libs::attendance::AttendanceRecord;
use crate::libs::formatter::{duration_minutes, minutes_to_display, NO_TIME};
use crate::libs::period::ReportPeriod;
use crate::libs::summary::{EmployeeSummary, EmployeeTotal, SessionStatus};
use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportKind {
    /// One consolidated row per employee for a single day.
    Daily,
    /// Total worked time per employee over a date range.
    Totals,
    /// One row per attendance record, open sessions included.
    Records,
}

impl ReportKind {
    /// Whether rows carry clock times, entry type and status.
    pub fn is_detailed(&self) -> bool {
        !matches!(self, ReportKind::Totals)
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReportKind::Daily => write!(f, "daily"),
            ReportKind::Totals => write!(f, "summary"),
            ReportKind::Records => write!(f, "records"),
        }
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Pin,
    Time,
    #[value(name = "checkin")]
    CheckIn,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// One employee row of a report table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub pin: String,
    pub name: String,
    pub emp_id: String,
    pub check_in: Option<NaiveDateTime>,
    pub check_out: Option<NaiveDateTime>,
    pub minutes_worked: u64,
    pub time_worked: String,
    pub entry_type: String,
    pub status: Option<SessionStatus>,
}

impl From<&EmployeeSummary> for ReportRow {
    fn from(summary: &EmployeeSummary) -> Self {
        Self {
            pin: summary.employee_id.clone(),
            name: summary.employee_name.clone(),
            emp_id: summary.emp_id.clone().unwrap_or_default(),
            check_in: Some(summary.earliest_check_in),
            check_out: summary.latest_check_out,
            minutes_worked: summary.total_minutes_worked,
            time_worked: summary.time_worked(),
            entry_type: summary.entry_types_label(),
            status: Some(summary.status()),
        }
    }
}

impl From<&EmployeeTotal> for ReportRow {
    fn from(total: &EmployeeTotal) -> Self {
        Self {
            pin: total.employee_id.clone(),
            name: total.employee_name.clone(),
            emp_id: total.emp_id.clone().unwrap_or_default(),
            check_in: None,
            check_out: None,
            minutes_worked: total.total_minutes_worked,
            time_worked: total.time_worked(),
            entry_type: String::new(),
            status: None,
        }
    }
}

impl From<&AttendanceRecord> for ReportRow {
    fn from(record: &AttendanceRecord) -> Self {
        let minutes_worked = record.worked().map(|d| duration_minutes(&d)).unwrap_or_default();
        Self {
            pin: record.employee_id.clone(),
            name: record.employee_name.clone(),
            emp_id: record.emp_id.clone().unwrap_or_default(),
            check_in: Some(record.check_in),
            check_out: record.check_out,
            minutes_worked,
            time_worked: if record.is_complete() {
                minutes_to_display(minutes_worked)
            } else {
                NO_TIME.to_string()
            },
            entry_type: record.entry_type.clone().unwrap_or_default(),
            status: Some(if record.is_complete() {
                SessionStatus::Completed
            } else {
                SessionStatus::InProgress
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub kind: ReportKind,
    pub title: String,
    pub period: ReportPeriod,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn daily(title: &str, period: ReportPeriod, summaries: &HashMap<String, EmployeeSummary>) -> Self {
        Self::build(ReportKind::Daily, title, period, summaries.values().map(ReportRow::from).collect())
    }

    pub fn totals(title: &str, period: ReportPeriod, totals: &HashMap<String, EmployeeTotal>) -> Self {
        Self::build(ReportKind::Totals, title, period, totals.values().map(ReportRow::from).collect())
    }

    /// Unconsolidated rows; records the aggregator would skip are left out here too.
    pub fn records(title: &str, period: ReportPeriod, records: &[AttendanceRecord]) -> Self {
        let rows = records.iter().filter(|r| r.is_identified()).map(ReportRow::from).collect();
        Self::build(ReportKind::Records, title, period, rows)
    }

    fn build(kind: ReportKind, title: &str, period: ReportPeriod, mut rows: Vec<ReportRow>) -> Self {
        // Stable base order, so equal sort keys never depend on map iteration.
        rows.sort_by(|a, b| a.pin.cmp(&b.pin).then(a.check_in.cmp(&b.check_in)));
        Self {
            kind,
            title: title.to_string(),
            period,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_minutes(&self) -> u64 {
        self.rows.iter().map(|row| row.minutes_worked).sum()
    }

    pub fn total_time_worked(&self) -> String {
        minutes_to_display(self.total_minutes())
    }

    /// Keeps rows whose name, pin or employee id contains `query`, ignoring case.
    pub fn search(mut self, query: &str) -> Self {
        let query = query.trim().to_lowercase();
        if !query.is_empty() {
            self.rows.retain(|row| {
                [&row.name, &row.pin, &row.emp_id]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&query))
            });
        }
        self
    }

    pub fn sort(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.rows.sort_by(|a, b| {
            let ordering = compare_rows(a, b, key);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        self
    }
}

fn compare_rows(a: &ReportRow, b: &ReportRow, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Pin => a.pin.cmp(&b.pin),
        SortKey::Time => a.minutes_worked.cmp(&b.minutes_worked),
        SortKey::CheckIn => a.check_in.cmp(&b.check_in),
    }
}
