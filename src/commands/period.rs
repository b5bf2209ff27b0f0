//! Resolves and prints the date range a report selection stands for.

use crate::{
    libs::{
        messages::Message,
        period::{previous_month, Half, PeriodRequest, ReportType},
    },
    msg_print,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

/// Calendar selection shared by the commands that resolve a reporting period.
#[derive(Debug, Args)]
pub struct PeriodArgs {
    #[arg(value_enum, help = "Report type")]
    pub report_type: ReportType,
    #[arg(long, help = "Year, defaults to the year of the previous month")]
    pub year: Option<i32>,
    #[arg(long, help = "Month (1-12), defaults to the previous month")]
    pub month: Option<u32>,
    #[arg(long, help = "Week index as listed by `punchclock weeks` (weekly reports)")]
    pub week: Option<usize>,
    #[arg(long, value_enum, help = "Half of the month (bimonthly reports)")]
    pub half: Option<Half>,
    #[arg(long, help = "Reference date for biweekly reports (YYYY-MM-DD), defaults to today")]
    pub today: Option<NaiveDate>,
}

impl PeriodArgs {
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn request(&self) -> PeriodRequest {
        let (default_year, default_month) = previous_month(self.today());
        PeriodRequest {
            report_type: self.report_type,
            year: self.year.unwrap_or(default_year),
            month: self.month.unwrap_or(default_month),
            week: self.week,
            half: self.half,
        }
    }
}

pub fn cmd(args: PeriodArgs) -> Result<()> {
    let period = args.request().resolve(args.today())?;

    msg_print!(Message::PeriodResolved(args.report_type.to_string(), period.to_string()));
    println!("{}", period.label());

    Ok(())
}
