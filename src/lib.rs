//! # Punchclock - attendance reports from biometric check-ins
//!
//! A command-line utility that turns raw check-in/check-out records into
//! per-employee attendance reports.
//!
//! ## Features
//!
//! - **Period Resolution**: Weekly, biweekly, monthly and bimonthly reporting windows
//! - **Aggregation**: Day-wise consolidation and simple-sum totals per employee
//! - **Duration Formatting**: Lossless `H:MM` rendering of worked minutes
//! - **Record Sources**: The attendance API or exported JSON files
//! - **Data Export**: CSV, JSON and Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punchclock::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
