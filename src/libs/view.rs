use super::formatter::format_optional_clock;
use super::period::ReportPeriod;
use super::report::{Report, ReportKind};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn report(report: &Report) -> Result<()> {
        let mut table = Table::new();

        match report.kind {
            ReportKind::Daily | ReportKind::Records => {
                table.add_row(row!["PIN", "NAME", "CHECK-IN", "CHECK-OUT", "TIME WORKED", "TYPE", "STATUS"]);
                for r in &report.rows {
                    table.add_row(row![
                        r.pin,
                        r.name,
                        format_optional_clock(r.check_in.as_ref()),
                        format_optional_clock(r.check_out.as_ref()),
                        r.time_worked,
                        r.entry_type,
                        r.status.map(|s| s.to_string()).unwrap_or_default()
                    ]);
                }
            }
            ReportKind::Totals => {
                table.add_row(row!["PIN", "NAME", "TOTAL HOURS (H:MM)"]);
                for r in &report.rows {
                    table.add_row(row![r.pin, r.name, r.time_worked]);
                }
                table.add_row(row!["", "TOTAL", report.total_time_worked()]);
            }
        }
        table.printstd();

        Ok(())
    }

    pub fn weeks(weeks: &[ReportPeriod]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["INDEX", "WEEK", "START", "END", "DAYS"]);
        for (index, week) in weeks.iter().enumerate() {
            table.add_row(row![
                index,
                format!("Week {}", index + 1),
                week.start.format("%Y-%m-%d"),
                week.end.format("%Y-%m-%d"),
                week.days()
            ]);
        }
        table.printstd();

        Ok(())
    }
}
