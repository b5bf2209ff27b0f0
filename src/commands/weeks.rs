//! Lists the Monday-aligned weeks of a month, the choices a weekly report offers.

use crate::{
    libs::{
        messages::Message,
        period::{first_day_of_month, previous_month, weeks_in_month},
        view::View,
    },
    msg_debug, msg_info, msg_print,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct WeeksArgs {
    #[arg(long, help = "Year, defaults to the year of the previous month")]
    year: Option<i32>,
    #[arg(long, help = "Month (1-12), defaults to the previous month")]
    month: Option<u32>,
}

pub fn cmd(args: WeeksArgs) -> Result<()> {
    let (default_year, default_month) = previous_month(Local::now().date_naive());
    let year = args.year.unwrap_or(default_year);
    let month = args.month.unwrap_or(default_month);

    let label = first_day_of_month(year, month)?.format("%B %Y").to_string();
    let weeks = weeks_in_month(year, month)?;

    if weeks.is_empty() {
        msg_info!(Message::NoWeeksInMonth(label));
        return Ok(());
    }

    msg_print!(Message::WeeksHeader(label), true);
    for (index, week) in weeks.iter().enumerate() {
        msg_debug!(Message::WeekOption(index, week.label()));
    }
    View::weeks(&weeks)?;

    Ok(())
}
