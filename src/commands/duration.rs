//! Converts between whole minutes and `H:MM` durations.

use crate::{
    libs::{formatter::display_to_minutes, formatter::minutes_to_display, messages::Message},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DurationArgs {
    #[arg(help = "Whole minutes (e.g. 485) or an H:MM duration (e.g. 8:05)")]
    value: String,
}

pub fn cmd(args: DurationArgs) -> Result<()> {
    let value = args.value.trim();
    match value.parse::<u64>() {
        Ok(minutes) => msg_print!(Message::DurationAsDisplay(minutes, minutes_to_display(minutes))),
        Err(_) => {
            let minutes = display_to_minutes(value)?;
            msg_print!(Message::DurationAsMinutes(value.to_string(), minutes));
        }
    }
    Ok(())
}
