//! Unconsolidated attendance records of a day, one row per check-in.
//!
//! Open sessions show as "In Progress"; `punchclock checkout` closes them.

use super::common::{load_records, present, OutputArgs, Query, SourceArgs};
use crate::{
    libs::{config::Config, messages::Message, period::ReportPeriod, report::Report},
    msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct RecordsArgs {
    #[arg(long, help = "Report date (YYYY-MM-DD), defaults to today")]
    date: Option<NaiveDate>,
    #[command(flatten)]
    source: SourceArgs,
    #[command(flatten)]
    output: OutputArgs,
}

pub async fn cmd(args: RecordsArgs) -> Result<()> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let config = Config::read()?.with_env_overrides();

    let records = load_records(&args.source, &config, Query::Day(date)).await?;
    let report = Report::records("Attendance Records", ReportPeriod::day(date), &records);
    let open = report.rows.iter().filter(|row| row.check_out.is_none()).count();

    present(report, &args.output)?;
    if open > 0 {
        msg_warning!(Message::OpenSessions(open));
    }

    Ok(())
}
