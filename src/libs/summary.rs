use crate::libs::attendance::AttendanceRecord;
use crate::libs::formatter::{duration_minutes, minutes_to_display, minutes_to_hours};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Day-wise consolidation of one employee's records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeSummary {
    pub employee_id: String,
    pub employee_name: String,
    pub emp_id: Option<String>,
    pub earliest_check_in: NaiveDateTime,
    /// `None` whenever any record of the employee is still open.
    pub latest_check_out: Option<NaiveDateTime>,
    pub total_minutes_worked: u64,
    pub is_complete: bool,
    /// Distinct entry types in first-seen order.
    pub entry_types: Vec<String>,
}

impl EmployeeSummary {
    pub fn time_worked(&self) -> String {
        minutes_to_display(self.total_minutes_worked)
    }

    pub fn entry_types_label(&self) -> String {
        self.entry_types.join(", ")
    }

    pub fn status(&self) -> SessionStatus {
        if self.is_complete {
            SessionStatus::Completed
        } else {
            SessionStatus::InProgress
        }
    }
}

/// Simple-sum total of one employee's worked time over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeTotal {
    pub employee_id: String,
    pub employee_name: String,
    pub emp_id: Option<String>,
    pub total_minutes_worked: u64,
}

impl EmployeeTotal {
    pub fn time_worked(&self) -> String {
        minutes_to_display(self.total_minutes_worked)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionStatus {
    Completed,
    InProgress,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SessionStatus::Completed => write!(f, "Completed"),
            SessionStatus::InProgress => write!(f, "In Progress"),
        }
    }
}

/// Headline numbers shown above a day-wise report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub present_employees: usize,
    pub total_records: usize,
    /// Hours from closed records, one decimal place.
    pub total_hours: f64,
}

pub trait AttendanceAggregator {
    /// Consolidates records into one summary per employee id.
    ///
    /// Open records contribute no minutes and make the summary incomplete.
    fn consolidate(&self) -> HashMap<String, EmployeeSummary>;

    /// Sums worked minutes per employee id, counting open records up to `now`.
    fn total_time_worked(&self, now: NaiveDateTime) -> HashMap<String, EmployeeTotal>;

    /// Headline numbers over the records the aggregator accepts.
    fn summary_stats(&self) -> SummaryStats;
}

/// Running state for one employee while consolidating.
struct Consolidation {
    summary: EmployeeSummary,
    latest_check_out: Option<NaiveDateTime>,
}

impl AttendanceAggregator for [AttendanceRecord] {
    fn consolidate(&self) -> HashMap<String, EmployeeSummary> {
        let mut consolidated: HashMap<String, Consolidation> = HashMap::new();

        for record in self.iter().filter(|r| r.is_identified()) {
            let entry = consolidated.entry(record.employee_id.clone()).or_insert_with(|| Consolidation {
                summary: EmployeeSummary {
                    employee_id: record.employee_id.clone(),
                    employee_name: record.employee_name.clone(),
                    emp_id: None,
                    earliest_check_in: record.check_in,
                    latest_check_out: None,
                    total_minutes_worked: 0,
                    is_complete: true,
                    entry_types: Vec::new(),
                },
                latest_check_out: None,
            });

            let summary = &mut entry.summary;
            if summary.emp_id.is_none() {
                summary.emp_id = record.emp_id.clone();
            }
            summary.earliest_check_in = summary.earliest_check_in.min(record.check_in);

            match record.check_out {
                Some(check_out) => {
                    entry.latest_check_out = Some(entry.latest_check_out.map_or(check_out, |latest| latest.max(check_out)));
                }
                None => summary.is_complete = false,
            }

            if let Some(worked) = record.worked() {
                summary.total_minutes_worked += duration_minutes(&worked);
            }

            if let Some(entry_type) = &record.entry_type {
                if !summary.entry_types.contains(entry_type) {
                    summary.entry_types.push(entry_type.clone());
                }
            }
        }

        consolidated
            .into_iter()
            .map(|(pin, Consolidation { mut summary, latest_check_out })| {
                summary.latest_check_out = if summary.is_complete { latest_check_out } else { None };
                (pin, summary)
            })
            .collect()
    }

    fn total_time_worked(&self, now: NaiveDateTime) -> HashMap<String, EmployeeTotal> {
        let mut totals: HashMap<String, EmployeeTotal> = HashMap::new();

        for record in self.iter().filter(|r| r.is_identified()) {
            let total = totals.entry(record.employee_id.clone()).or_insert_with(|| EmployeeTotal {
                employee_id: record.employee_id.clone(),
                employee_name: record.employee_name.clone(),
                emp_id: None,
                total_minutes_worked: 0,
            });
            if total.emp_id.is_none() {
                total.emp_id = record.emp_id.clone();
            }
            total.total_minutes_worked += duration_minutes(&record.worked_until(now));
        }

        totals
    }

    fn summary_stats(&self) -> SummaryStats {
        let valid: Vec<&AttendanceRecord> = self.iter().filter(|r| r.is_identified()).collect();
        let present: HashSet<&str> = valid.iter().map(|r| r.employee_id.as_str()).collect();
        let closed_minutes: u64 = valid.iter().filter_map(|r| r.worked()).map(|d| duration_minutes(&d)).sum();

        SummaryStats {
            present_employees: present.len(),
            total_records: valid.len(),
            total_hours: minutes_to_hours(closed_minutes),
        }
    }
}
