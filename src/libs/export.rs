//! Report export to CSV, JSON and Excel.
//!
//! Exports are thin sinks: they write the rows of an already built
//! [`Report`] and never aggregate anything themselves.
//!
//! ## Layouts
//!
//! - **Daily and records reports**: `Employee ID, Name, Check-in Time, Check-out Time, Time Worked, Type, Status`
//! - **Totals reports**: `Employee ID, Name, Total Hours Worked (H:MM)`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punchclock::libs::export::{ExportFormat, Exporter};
//! # fn run(report: &punchclock::libs::report::Report) -> anyhow::Result<()> {
//! let exporter = Exporter::new(ExportFormat::Csv, None, report);
//! exporter.export(report)?;
//! # Ok(())
//! # }
//! ```

use crate::{
    libs::{
        formatter::format_clock,
        messages::Message,
        report::{Report, ReportKind, ReportRow},
    },
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

const DAILY_HEADERS: [&str; 7] = [
    "Employee ID",
    "Name",
    "Check-in Time",
    "Check-out Time",
    "Time Worked",
    "Type",
    "Status",
];
const TOTALS_HEADERS: [&str; 3] = ["Employee ID", "Name", "Total Hours Worked (H:MM)"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// JSON shape of an exported report.
#[derive(Debug, Serialize)]
pub struct ExportReport<'a> {
    pub title: &'a str,
    pub kind: ReportKind,
    pub start_date: String,
    pub end_date: String,
    pub total_time_worked: String,
    pub rows: Vec<ExportRow<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ExportRow<'a> {
    pub pin: &'a str,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emp_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,
    pub time_worked: &'a str,
    pub minutes_worked: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output_path`, or to
    /// `<kind>_report_<start>_to_<end>.<ext>` in the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, report: &Report) -> Self {
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(default_file_name(format, report)));
        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `report` in the configured format.
    ///
    /// # Errors
    ///
    /// Fails when the report has no rows or the file cannot be written.
    pub fn export(&self, report: &Report) -> Result<()> {
        if report.is_empty() {
            msg_bail_anyhow!(Message::NoDataToExport);
        }

        match self.format {
            ExportFormat::Csv => self.export_csv(report)?,
            ExportFormat::Json => self.export_json(report)?,
            ExportFormat::Excel => self.export_excel(report)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_csv(&self, report: &Report) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        match report.kind {
            ReportKind::Daily | ReportKind::Records => wtr.write_record(DAILY_HEADERS)?,
            ReportKind::Totals => wtr.write_record(TOTALS_HEADERS)?,
        }
        for row in &report.rows {
            wtr.write_record(row_cells(report.kind, row))?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, report: &Report) -> Result<()> {
        let export = ExportReport {
            title: &report.title,
            kind: report.kind,
            start_date: report.period.start.format("%Y-%m-%d").to_string(),
            end_date: report.period.end.format("%Y-%m-%d").to_string(),
            total_time_worked: report.total_time_worked(),
            rows: report.rows.iter().map(|row| export_row(report.kind, row)).collect(),
        };
        let json = serde_json::to_string_pretty(&export)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, report: &Report) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        let title_format = Format::new().set_bold().set_font_size(14.0);

        worksheet.write_string_with_format(0, 0, format!("{} ({})", report.title, report.period), &title_format)?;

        let headers: &[&str] = match report.kind {
            ReportKind::Daily | ReportKind::Records => &DAILY_HEADERS,
            ReportKind::Totals => &TOTALS_HEADERS,
        };
        for (col, header) in headers.iter().enumerate() {
            worksheet.write_string_with_format(2, col as u16, *header, &header_format)?;
        }

        let mut row_index = 3;
        for row in &report.rows {
            for (col, cell) in row_cells(report.kind, row).iter().enumerate() {
                worksheet.write_string(row_index, col as u16, cell)?;
            }
            row_index += 1;
        }

        row_index += 1;
        worksheet.write_string_with_format(row_index, 0, "Total", &header_format)?;
        worksheet.write_string(row_index, 1, report.total_time_worked())?;

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}

fn default_file_name(format: ExportFormat, report: &Report) -> String {
    format!(
        "{}_report_{}_to_{}.{}",
        report.kind,
        report.period.start.format("%Y-%m-%d"),
        report.period.end.format("%Y-%m-%d"),
        format.extension()
    )
}

fn row_cells(kind: ReportKind, row: &ReportRow) -> Vec<String> {
    match kind {
        ReportKind::Daily | ReportKind::Records => vec![
            row.pin.clone(),
            row.name.clone(),
            row.check_in.as_ref().map(format_clock).unwrap_or_default(),
            row.check_out.as_ref().map(format_clock).unwrap_or_default(),
            row.time_worked.clone(),
            row.entry_type.clone(),
            row.status.map(|s| s.to_string()).unwrap_or_default(),
        ],
        ReportKind::Totals => vec![row.pin.clone(), row.name.clone(), row.time_worked.clone()],
    }
}

fn export_row(kind: ReportKind, row: &ReportRow) -> ExportRow<'_> {
    let detailed = kind.is_detailed();
    ExportRow {
        pin: &row.pin,
        name: &row.name,
        emp_id: Some(row.emp_id.as_str()).filter(|id| !id.is_empty()),
        check_in: row.check_in.map(|t| t.format("%Y-%m-%dT%H:%M:%S").to_string()),
        check_out: row.check_out.map(|t| t.format("%Y-%m-%dT%H:%M:%S").to_string()),
        time_worked: &row.time_worked,
        minutes_worked: row.minutes_worked,
        entry_type: Some(row.entry_type.as_str()).filter(|t| detailed && !t.is_empty()),
        status: row.status.map(|s| s.to_string()),
    }
}
