//! Salaried employee report over a weekly, biweekly, monthly or bimonthly period.

use super::{
    common::{load_records, present, OutputArgs, Query, SourceArgs},
    period::PeriodArgs,
};
use crate::{
    libs::{config::Config, messages::Message, report::Report, summary::AttendanceAggregator},
    msg_debug, msg_info,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct SalariedArgs {
    #[command(flatten)]
    period: PeriodArgs,
    #[command(flatten)]
    source: SourceArgs,
    #[command(flatten)]
    output: OutputArgs,
}

pub async fn cmd(args: SalariedArgs) -> Result<()> {
    let period = args.period.request().resolve(args.period.today())?;
    msg_debug!(Message::PeriodResolved(args.period.report_type.to_string(), period.to_string()));

    let config = Config::read()?.with_env_overrides();
    let records = load_records(&args.source, &config, Query::Range(period)).await?;
    let totals = records.total_time_worked(Local::now().naive_local());

    let title = format!("{} Salaried Employee Report", args.period.report_type);
    let report = Report::totals(&title, period, &totals);
    let total = report.total_time_worked();
    present(report, &args.output)?;
    msg_info!(Message::TotalTimeWorked(total));

    Ok(())
}
