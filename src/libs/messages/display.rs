//! Display implementation for punchclock messages.
//!
//! All user-facing text lives here, so wording changes happen in one place
//! and every message variant needs an explicit formatting decision.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleApi => "Attendance API settings".to_string(),
            Message::ConfigModuleReport => "Report settings".to_string(),
            Message::ApiNotConfigured => {
                "Attendance API is not configured. Run 'punchclock init' or pass --input <FILE>".to_string()
            }

            // === PERIOD MESSAGES ===
            Message::WeeksHeader(month) => format!("Weeks of {} (Mon - Sun)", month),
            Message::NoWeeksInMonth(month) => format!("{} has no Monday-aligned weeks", month),
            Message::WeekOption(index, label) => format!("Week {}: {}", index + 1, label),
            Message::PeriodResolved(report_type, period) => format!("{} report period: {}", report_type, period),

            // === REPORT MESSAGES ===
            Message::ReportHeader(title, period) => format!("{} ({})", title, period),
            Message::NoDataAvailable => "No data available".to_string(),
            Message::LoadedEmployeeRecords(count) => format!("Loaded {} employee records", count),
            Message::SummaryStats {
                present_employees,
                total_records,
                total_hours,
            } => format!(
                "Present employees: {} | Records: {} | Hours worked: {:.1}",
                present_employees, total_records, total_hours
            ),
            Message::TotalTimeWorked(total) => format!("Total time worked: {}", total),
            Message::StartAfterEnd(start, end) => format!("Start date {} must not be after end date {}", start, end),

            // === RECORD SOURCE MESSAGES ===
            Message::LoadingRecords(source) => format!("Loading attendance records from {}", source),
            Message::RecordsLoaded(count) => format!("{} attendance records loaded", count),
            Message::InputFileReadFailed(path, error) => format!("Failed to read attendance file {}: {}", path, error),
            Message::OpenSessions(count) => format!("{} session(s) still need a checkout", count),

            // === ENTRY MESSAGES ===
            Message::EntryCreated(emp_id, check_in) => format!("Entry saved for {} (check-in {})", emp_id, check_in),
            Message::CheckoutUpdated(name, check_out, worked) => {
                format!("Checkout for {} set to {} ({} worked)", name, check_out, worked)
            }

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Report exported successfully to: {}", path),
            Message::NoDataToExport => "No data to export".to_string(),

            // === API MESSAGES ===
            Message::ApiRequestFailed(status) => format!("Attendance API request failed with status {}", status),
            Message::ApiErrorResponse(error) => format!("Attendance API returned an error: {}", error),

            // === DURATION MESSAGES ===
            Message::DurationAsMinutes(display, minutes) => format!("{} = {} minutes", display, minutes),
            Message::DurationAsDisplay(minutes, display) => format!("{} minutes = {}", minutes, display),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select the settings to configure".to_string(),
            Message::PromptApiUrl => "Attendance API base URL".to_string(),
            Message::PromptCompanyId => "Company ID".to_string(),
            Message::PromptDeviceId => "Default device ID (empty for all devices)".to_string(),
        };

        write!(f, "{}", text)
    }
}
