#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, Weekday};
    use punchclock::libs::error::ReportError;
    use punchclock::libs::period::{
        bimonthly, biweekly, last_day_of_month, previous_month, resolve_period, weeks_in_month, Half, PeriodRequest, ReportPeriod,
        ReportType,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weeks_in_january_2024() {
        let weeks = weeks_in_month(2024, 1).unwrap();
        assert_eq!(
            weeks,
            vec![
                ReportPeriod::new(date(2024, 1, 1), date(2024, 1, 7)),
                ReportPeriod::new(date(2024, 1, 8), date(2024, 1, 14)),
                ReportPeriod::new(date(2024, 1, 15), date(2024, 1, 21)),
                ReportPeriod::new(date(2024, 1, 22), date(2024, 1, 28)),
                ReportPeriod::new(date(2024, 1, 29), date(2024, 1, 31)),
            ]
        );
    }

    #[test]
    fn test_weeks_skip_days_before_first_monday() {
        // 1 September 2024 is a Sunday.
        let weeks = weeks_in_month(2024, 9).unwrap();
        assert_eq!(weeks[0].start, date(2024, 9, 2));
        assert_eq!(weeks.last().unwrap().end, date(2024, 9, 30));
    }

    #[test]
    fn test_weeks_are_monday_aligned_and_inside_the_month() {
        for year in [2023, 2024, 2025] {
            for month in 1..=12 {
                let last = last_day_of_month(year, month).unwrap();
                for week in weeks_in_month(year, month).unwrap() {
                    assert_eq!(week.start.weekday(), Weekday::Mon);
                    assert_eq!(week.start.month(), month);
                    assert!(week.end <= last);
                    assert!(week.days() >= 1 && week.days() <= 7);
                }
            }
        }
    }

    #[test]
    fn test_weekly_request() {
        let period = PeriodRequest::new(ReportType::Weekly, 2024, 1)
            .with_week(1)
            .resolve(date(2024, 5, 1))
            .unwrap();
        assert_eq!(period, ReportPeriod::new(date(2024, 1, 8), date(2024, 1, 14)));
    }

    #[test]
    fn test_weekly_request_out_of_range() {
        let result = PeriodRequest::new(ReportType::Weekly, 2024, 1).with_week(5).resolve(date(2024, 5, 1));
        assert_eq!(
            result,
            Err(ReportError::InvalidWeekSelection {
                index: Some(5),
                available: 5
            })
        );

        let result = PeriodRequest::new(ReportType::Weekly, 2024, 1).resolve(date(2024, 5, 1));
        assert!(matches!(result, Err(ReportError::InvalidWeekSelection { index: None, .. })));
    }

    #[test]
    fn test_biweekly_period() {
        let period = biweekly(date(2024, 3, 15));
        assert_eq!(period.start, date(2024, 3, 2));
        assert_eq!(period.end, date(2024, 3, 15));
        assert_eq!(period.days(), 14);
    }

    #[test]
    fn test_biweekly_ignores_month_selection() {
        let period = PeriodRequest::new(ReportType::Biweekly, 1999, 7).resolve(date(2024, 3, 1)).unwrap();
        assert_eq!(period, ReportPeriod::new(date(2024, 2, 17), date(2024, 3, 1)));
    }

    #[test]
    fn test_monthly_period() {
        let period = PeriodRequest::new(ReportType::Monthly, 2023, 12).resolve(date(2024, 1, 5)).unwrap();
        assert_eq!(period, ReportPeriod::new(date(2023, 12, 1), date(2023, 12, 31)));
    }

    #[test]
    fn test_bimonthly_halves_in_leap_february() {
        assert_eq!(
            bimonthly(2024, 2, Half::First).unwrap(),
            ReportPeriod::new(date(2024, 2, 1), date(2024, 2, 15))
        );
        assert_eq!(
            bimonthly(2024, 2, Half::Second).unwrap(),
            ReportPeriod::new(date(2024, 2, 16), date(2024, 2, 29))
        );
        assert_eq!(bimonthly(2023, 2, Half::Second).unwrap().end, date(2023, 2, 28));
    }

    #[test]
    fn test_bimonthly_requires_a_half() {
        let result = resolve_period("bimonthly", 2024, 2, None, None, date(2024, 3, 1));
        assert!(matches!(result, Err(ReportError::InvalidPeriodSelector(_))));

        let result = resolve_period("bimonthly", 2024, 2, None, Some("third"), date(2024, 3, 1));
        assert_eq!(result, Err(ReportError::InvalidPeriodSelector("third".to_string())));
    }

    #[test]
    fn test_resolve_period_from_strings() {
        let period = resolve_period("Bimonthly", 2024, 4, None, Some("second"), date(2024, 5, 1)).unwrap();
        assert_eq!(period, ReportPeriod::new(date(2024, 4, 16), date(2024, 4, 30)));

        let result = resolve_period("quarterly", 2024, 4, None, None, date(2024, 5, 1));
        assert_eq!(result, Err(ReportError::UnsupportedReportType("quarterly".to_string())));
    }

    #[test]
    fn test_invalid_calendar_month() {
        assert_eq!(
            weeks_in_month(2024, 13),
            Err(ReportError::InvalidCalendarMonth { year: 2024, month: 13 })
        );
        assert!(PeriodRequest::new(ReportType::Monthly, 2024, 0).resolve(date(2024, 1, 1)).is_err());
    }

    #[test]
    fn test_previous_month() {
        assert_eq!(previous_month(date(2024, 1, 10)), (2023, 12));
        assert_eq!(previous_month(date(2024, 3, 31)), (2024, 2));
    }

    #[test]
    fn test_period_new_orders_bounds() {
        let period = ReportPeriod::new(date(2024, 1, 9), date(2024, 1, 2));
        assert_eq!(period.start, date(2024, 1, 2));
        assert_eq!(period.to_string(), "2024-01-02 to 2024-01-09");
        assert_eq!(period.label(), "02 Jan 2024 - 09 Jan 2024");

        let json = serde_json::to_value(period).unwrap();
        assert_eq!(json, serde_json::json!({"start": "2024-01-02", "end": "2024-01-09"}));
    }
}
