//! Core library modules for punchclock.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging, errors
//! - **Reporting Core**: Period resolution, record normalization, aggregation
//! - **Corrections**: Manual entries and checkout corrections
//! - **User Interface**: Console tables, data export, duration formatting
//!
//! ## Usage
//!
//! ```rust
//! use punchclock::libs::attendance::parse_records;
//! use punchclock::libs::summary::AttendanceAggregator;
//!
//! let records = parse_records(
//!     r#"[{"Pin": "7", "Name": "Ana", "CheckInTime": "2024-01-02T09:00:00", "CheckOutTime": "2024-01-02T17:00:00"}]"#,
//! )?;
//! let summaries = records.consolidate();
//! assert_eq!(summaries["7"].time_worked(), "8:00");
//! # Ok::<(), punchclock::libs::error::ReportError>(())
//! ```

pub mod attendance;
pub mod config;
pub mod data_storage;
pub mod entry;
pub mod error;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod period;
pub mod report;
pub mod summary;
pub mod view;
