#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use punchclock::libs::error::ReportError;
    use punchclock::libs::formatter::{
        display_to_minutes, format_clock, format_duration, format_optional_clock, minutes_to_display, minutes_to_hours, NO_TIME,
    };

    #[test]
    fn test_minutes_to_display() {
        assert_eq!(minutes_to_display(0), "0:00");
        assert_eq!(minutes_to_display(5), "0:05");
        assert_eq!(minutes_to_display(65), "1:05");
        assert_eq!(minutes_to_display(480), "8:00");
        assert_eq!(minutes_to_display(6000), "100:00");
    }

    #[test]
    fn test_display_round_trip() {
        for minutes in [0, 1, 59, 60, 61, 479, 480, 1439, 1440, 6000, 123_456] {
            let display = minutes_to_display(minutes);
            assert_eq!(display_to_minutes(&display).unwrap(), minutes, "round trip of {}", display);
        }
    }

    #[test]
    fn test_display_to_minutes_rejects_malformed_input() {
        for input in ["", "8", "8:0", "8:000", "8:60", "08:00", "-1:00", "a:bc", " 8:00", "8:00 ", "1:2:3", ":30"] {
            assert_eq!(
                display_to_minutes(input),
                Err(ReportError::MalformedDuration(input.to_string())),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_canonical_display_round_trip() {
        for display in ["0:00", "0:59", "1:05", "10:00", "123:45"] {
            let minutes = display_to_minutes(display).unwrap();
            assert_eq!(minutes_to_display(minutes), display);
        }
    }

    #[test]
    fn test_zero_hours_is_canonical() {
        assert_eq!(display_to_minutes("0:45").unwrap(), 45);
    }

    #[test]
    fn test_format_duration_clamps_negative() {
        assert_eq!(format_duration(&Duration::minutes(125)), "2:05");
        assert_eq!(format_duration(&Duration::seconds(119)), "0:01");
        assert_eq!(format_duration(&Duration::minutes(-30)), "0:00");
    }

    #[test]
    fn test_format_clock() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(format_clock(&date.and_hms_opt(9, 5, 0).unwrap()), "9:05 AM");
        assert_eq!(format_clock(&date.and_hms_opt(0, 30, 0).unwrap()), "12:30 AM");
        assert_eq!(format_clock(&date.and_hms_opt(17, 45, 0).unwrap()), "5:45 PM");
        assert_eq!(format_optional_clock(None), NO_TIME);
    }

    #[test]
    fn test_minutes_to_hours() {
        assert_eq!(minutes_to_hours(0), 0.0);
        assert_eq!(minutes_to_hours(90), 1.5);
        assert_eq!(minutes_to_hours(500), 8.3);
    }
}
