//! Interactive configuration command.
//!
//! Walks through the API connection settings and the report defaults, then
//! stores the result in `config.json`.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Print the stored configuration instead of running the wizard
    #[arg(long)]
    show: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.show {
        let config = Config::read()?.with_env_overrides();
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
