//! Date-range summary: total worked time per employee between two dates.

use super::common::{load_records, present, OutputArgs, Query, SourceArgs};
use crate::{
    libs::{config::Config, messages::Message, period::ReportPeriod, report::Report, summary::AttendanceAggregator},
    msg_bail_anyhow, msg_info,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct SummaryArgs {
    #[arg(long, help = "First day of the range (YYYY-MM-DD)")]
    from: NaiveDate,
    #[arg(long, help = "Last day of the range (YYYY-MM-DD)")]
    to: NaiveDate,
    #[command(flatten)]
    source: SourceArgs,
    #[command(flatten)]
    output: OutputArgs,
}

pub async fn cmd(args: SummaryArgs) -> Result<()> {
    if args.from > args.to {
        msg_bail_anyhow!(Message::StartAfterEnd(args.from.to_string(), args.to.to_string()));
    }

    let period = ReportPeriod::new(args.from, args.to);
    let config = Config::read()?.with_env_overrides();

    let records = load_records(&args.source, &config, Query::Range(period)).await?;
    let totals = records.total_time_worked(Local::now().naive_local());

    let report = Report::totals("Attendance Summary", period, &totals);
    let total = report.total_time_worked();
    present(report, &args.output)?;
    msg_info!(Message::TotalTimeWorked(total));

    Ok(())
}
