pub mod checkout;
pub mod common;
pub mod daily;
pub mod duration;
pub mod entry;
pub mod init;
pub mod period;
pub mod records;
pub mod salaried;
pub mod summary;
pub mod weeks;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "List the weeks of a month")]
    Weeks(weeks::WeeksArgs),
    #[command(about = "Resolve the date range of a report period")]
    Period(period::PeriodArgs),
    #[command(about = "Day-wise attendance report")]
    Daily(daily::DailyArgs),
    #[command(about = "Attendance records of a day, one row per check-in")]
    Records(records::RecordsArgs),
    #[command(about = "Add a manual attendance entry")]
    Entry(entry::EntryArgs),
    #[command(about = "Set the checkout time of an open session")]
    Checkout(checkout::CheckoutArgs),
    #[command(about = "Total time worked per employee between two dates")]
    Summary(summary::SummaryArgs),
    #[command(about = "Salaried employee report for a weekly, biweekly, monthly or bimonthly period")]
    Salaried(salaried::SalariedArgs),
    #[command(about = "Convert between minutes and H:MM")]
    Duration(duration::DurationArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Weeks(args) => weeks::cmd(args),
            Commands::Period(args) => period::cmd(args),
            Commands::Daily(args) => daily::cmd(args).await,
            Commands::Records(args) => records::cmd(args).await,
            Commands::Entry(args) => entry::cmd(args).await,
            Commands::Checkout(args) => checkout::cmd(args).await,
            Commands::Summary(args) => summary::cmd(args).await,
            Commands::Salaried(args) => salaried::cmd(args).await,
            Commands::Duration(args) => duration::cmd(args),
        }
    }
}
