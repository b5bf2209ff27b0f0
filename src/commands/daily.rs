//! Day-wise attendance report.
//!
//! Records of one day are consolidated into a single row per employee:
//! earliest check-in, latest check-out, minutes worked from closed sessions
//! and whether the employee is still clocked in.

use super::common::{load_records, present, OutputArgs, Query, SourceArgs};
use crate::{
    libs::{
        config::Config,
        messages::Message,
        period::ReportPeriod,
        report::Report,
        summary::AttendanceAggregator,
    },
    msg_info,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct DailyArgs {
    #[arg(long, help = "Report date (YYYY-MM-DD), defaults to today")]
    date: Option<NaiveDate>,
    #[command(flatten)]
    source: SourceArgs,
    #[command(flatten)]
    output: OutputArgs,
}

pub async fn cmd(args: DailyArgs) -> Result<()> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let config = Config::read()?.with_env_overrides();

    let records = load_records(&args.source, &config, Query::Day(date)).await?;
    let stats = records.summary_stats();
    let summaries = records.consolidate();

    let report = Report::daily("Daily Attendance Report", ReportPeriod::day(date), &summaries);
    present(report, &args.output)?;

    msg_info!(Message::SummaryStats {
        present_employees: stats.present_employees,
        total_records: stats.total_records,
        total_hours: stats.total_hours,
    });

    Ok(())
}
