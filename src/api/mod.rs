//! Client for the attendance API.
//!
//! The API is an external collaborator: it stores check-ins and serves them
//! per company, either for one day or for a date range. Responses are mapped
//! into strict [`AttendanceRecord`](crate::libs::attendance::AttendanceRecord)s
//! before they reach the aggregator.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punchclock::api::ReportsApi;
//! use punchclock::libs::config::ApiConfig;
//! use chrono::NaiveDate;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = ApiConfig {
//!     api_url: "https://api.example.com/prod".to_string(),
//!     company_id: "42".to_string(),
//! };
//! let records = ReportsApi::new(&config).daily(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()).await?;
//! # Ok(())
//! # }
//! ```

pub mod reports;

pub use reports::ReportsApi;
