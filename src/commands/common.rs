//! Arguments and plumbing shared by the report commands.

use crate::{
    api::ReportsApi,
    libs::{
        attendance::{parse_records, AttendanceRecord, DeviceFilter},
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
        period::ReportPeriod,
        report::{Report, SortDirection, SortKey},
        view::View,
    },
    msg_debug, msg_error_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SourceArgs {
    #[arg(long, help = "Read attendance records from a JSON file instead of the API")]
    pub input: Option<PathBuf>,
    #[arg(long, help = "Only count records from this device")]
    pub device: Option<String>,
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(long, help = "Only show employees whose name, PIN or employee id contains this text")]
    pub search: Option<String>,
    #[arg(long, value_enum, default_value_t = SortKey::Name, help = "Sort rows by")]
    pub sort: SortKey,
    #[arg(long, help = "Sort in descending order")]
    pub desc: bool,
    #[arg(long, value_enum, help = "Export the report")]
    pub export: Option<ExportFormat>,
    #[arg(long, requires = "export", help = "Export file path")]
    pub output: Option<PathBuf>,
}

/// What to ask the record source for.
#[derive(Debug, Clone, Copy)]
pub enum Query {
    Day(chrono::NaiveDate),
    Range(ReportPeriod),
}

impl Query {
    fn period(&self) -> ReportPeriod {
        match self {
            Query::Day(date) => ReportPeriod::day(*date),
            Query::Range(period) => *period,
        }
    }
}

/// Client for the configured attendance API.
pub fn api_client(config: &Config) -> Result<ReportsApi> {
    let api = config.api.as_ref().ok_or_else(|| msg_error_anyhow!(Message::ApiNotConfigured))?;
    Ok(ReportsApi::new(api))
}

/// Loads the records for `query` from the input file or the attendance API,
/// then applies the device filter.
pub async fn load_records(source: &SourceArgs, config: &Config, query: Query) -> Result<Vec<AttendanceRecord>> {
    let records = match &source.input {
        Some(path) => {
            msg_debug!(Message::LoadingRecords(path.display().to_string()));
            let json = fs::read_to_string(path)
                .map_err(|e| msg_error_anyhow!(Message::InputFileReadFailed(path.display().to_string(), e.to_string())))?;
            let period = query.period();
            parse_records(&json)?
                .into_iter()
                .filter(|record| period.contains(record.check_in.date()))
                .collect()
        }
        None => {
            let client = api_client(config)?;
            match query {
                Query::Day(date) => {
                    msg_debug!(Message::LoadingRecords(client.daily_url(date)));
                    client.daily(date).await?
                }
                Query::Range(period) => {
                    msg_debug!(Message::LoadingRecords(client.date_range_url(&period)));
                    client.date_range(&period).await?
                }
            }
        }
    };
    msg_debug!(Message::RecordsLoaded(records.len()));

    let device = source.device.as_deref().or_else(|| config.device_id());
    Ok(records.for_device(device))
}

/// Applies search and sort, prints the table and exports it when asked to.
pub fn present(report: Report, output: &OutputArgs) -> Result<()> {
    let direction = if output.desc { SortDirection::Desc } else { SortDirection::Asc };
    let report = report.search(output.search.as_deref().unwrap_or_default()).sort(output.sort, direction);

    msg_print!(Message::ReportHeader(report.title.clone(), report.period.to_string()), true);
    if report.is_empty() {
        msg_info!(Message::NoDataAvailable);
        return Ok(());
    }

    View::report(&report)?;
    msg_info!(Message::LoadedEmployeeRecords(report.rows.len()));

    if let Some(format) = output.export {
        Exporter::new(format, output.output.clone(), &report).export(&report)?;
    }

    Ok(())
}
