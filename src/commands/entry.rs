//! Manual attendance entry for an employee who could not clock in on a device.

use super::common::api_client;
use crate::{
    libs::{
        config::Config,
        entry::{parse_clock_time, NewEntry, DEFAULT_MODIFIED_BY},
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveTime};
use clap::Args;

#[derive(Debug, Args)]
pub struct EntryArgs {
    #[arg(long, help = "Employee ID")]
    emp_id: String,
    #[arg(long = "type", help = "Entry type, e.g. Office or Remote")]
    entry_type: String,
    #[arg(long, help = "Entry date (YYYY-MM-DD), defaults to today")]
    date: Option<NaiveDate>,
    #[arg(long, value_parser = parse_clock_time, help = "Check-in time (HH:MM)")]
    check_in: NaiveTime,
    #[arg(long, value_parser = parse_clock_time, help = "Check-out time (HH:MM)")]
    check_out: Option<NaiveTime>,
    #[arg(long, default_value = DEFAULT_MODIFIED_BY, help = "Recorded as the author of the entry")]
    modified_by: String,
}

pub async fn cmd(args: EntryArgs) -> Result<()> {
    let entry = NewEntry {
        emp_id: args.emp_id,
        entry_type: args.entry_type,
        date: args.date.unwrap_or_else(|| Local::now().date_naive()),
        check_in: args.check_in,
        check_out: args.check_out,
    };

    let config = Config::read()?.with_env_overrides();
    let payload = api_client(&config)?.create_entry(&entry, &args.modified_by).await?;

    msg_success!(Message::EntryCreated(payload.emp_id, payload.check_in_time));
    Ok(())
}
