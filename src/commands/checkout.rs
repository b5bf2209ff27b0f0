//! Closes an open session with a checkout time on the check-in's day.

use super::common::api_client;
use crate::{
    libs::{
        config::Config,
        entry::{find_open_session, parse_clock_time, CheckoutUpdate, DEFAULT_MODIFIED_BY},
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveTime};
use clap::Args;

#[derive(Debug, Args)]
pub struct CheckoutArgs {
    #[arg(long, help = "Employee PIN")]
    pin: String,
    #[arg(long, value_parser = parse_clock_time, help = "Checkout time (HH:MM)")]
    at: NaiveTime,
    #[arg(long, help = "Day of the open session (YYYY-MM-DD), defaults to today")]
    date: Option<NaiveDate>,
    #[arg(long, value_parser = parse_clock_time, help = "Check-in time of the session, when there are several")]
    check_in: Option<NaiveTime>,
    #[arg(long, default_value = DEFAULT_MODIFIED_BY, help = "Recorded as the author of the change")]
    modified_by: String,
}

pub async fn cmd(args: CheckoutArgs) -> Result<()> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let config = Config::read()?.with_env_overrides();
    let client = api_client(&config)?;

    let records = client.daily(date).await?;
    let record = find_open_session(&records, &args.pin, args.check_in)?;
    let update = CheckoutUpdate::new(record, args.at, &args.modified_by)?;

    client.update_checkout(&update).await?;

    msg_success!(Message::CheckoutUpdated(
        record.employee_name.clone(),
        update.payload.check_out_time.clone(),
        update.payload.time_worked.clone()
    ));
    Ok(())
}
