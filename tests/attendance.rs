#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use punchclock::libs::attendance::{parse_records, parse_timestamp, sanitize, AttendanceRecord, DeviceFilter, RawRecord};
    use punchclock::libs::error::ReportError;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_parse_full_record() {
        let json = r#"[{
            "Pin": "7",
            "Name": " Ana Lima ",
            "EmpID": 1001,
            "CheckInTime": "2024-01-02T09:00:00",
            "CheckOutTime": "2024-01-02 17:30",
            "DeviceID": "DEV-1",
            "Type": "Office",
            "Extra": {"ignored": true}
        }]"#;
        let records = parse_records(json).unwrap();

        assert_eq!(
            records,
            vec![AttendanceRecord::new("7", "Ana Lima", at(9, 0))
                .with_emp_id("1001")
                .with_check_out(at(17, 30))
                .with_device("DEV-1")
                .with_entry_type("Office")]
        );
    }

    #[test]
    fn test_emp_id_is_optional_and_time_worked_is_ignored() {
        let records = parse_records(
            r#"[{"Pin": "7", "Name": "Ana", "EmpID": " ", "TimeWorked": "99:00",
                 "CheckInTime": "2024-01-02T09:00:00", "CheckOutTime": "2024-01-02T10:00:00"}]"#,
        )
        .unwrap();
        assert_eq!(records[0].emp_id, None);
        assert_eq!(records[0].worked().unwrap().num_minutes(), 60);
    }

    #[test]
    fn test_numeric_pin_is_accepted() {
        let records = parse_records(r#"[{"Pin": 42, "Name": "Ana", "CheckInTime": "2024-01-02T09:00:00"}]"#).unwrap();
        assert_eq!(records[0].employee_id, "42");
        assert!(!records[0].is_complete());
    }

    #[test]
    fn test_empty_check_out_means_open() {
        let records =
            parse_records(r#"[{"Pin": "7", "Name": "Ana", "CheckInTime": "2024-01-02T09:00:00", "CheckOutTime": ""}]"#).unwrap();
        assert_eq!(records[0].check_out, None);
        assert_eq!(records[0].worked(), None);
    }

    #[test]
    fn test_unparsable_check_out_rejects_row() {
        let raw = RawRecord {
            pin: Some("7".to_string()),
            name: Some("Ana".to_string()),
            check_in_time: Some("2024-01-02T09:00:00".to_string()),
            check_out_time: Some("soon".to_string()),
            ..Default::default()
        };
        assert_eq!(
            AttendanceRecord::try_from(raw),
            Err(ReportError::InvalidTimestamp("soon".to_string()))
        );
    }

    #[test]
    fn test_missing_check_in_rejects_row() {
        let raw = RawRecord {
            pin: Some("7".to_string()),
            name: Some("Ana".to_string()),
            ..Default::default()
        };
        assert_eq!(AttendanceRecord::try_from(raw), Err(ReportError::MissingField("CheckInTime")));
    }

    #[test]
    fn test_missing_identity_becomes_unidentified() {
        let records = parse_records(r#"[{"CheckInTime": "2024-01-02T09:00:00"}]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert!(!records[0].is_identified());
    }

    #[test]
    fn test_payload_must_be_a_list() {
        assert!(matches!(parse_records(r#"{"Pin": "7"}"#), Err(ReportError::NotARecordList(_))));
        assert!(matches!(parse_records("not json"), Err(ReportError::NotARecordList(_))));
        assert_eq!(parse_records("[]").unwrap(), Vec::new());
    }

    #[test]
    fn test_sanitize_strips_control_characters() {
        assert_eq!(sanitize("  Ana\u{0}\n Lima\t "), "Ana Lima");
        let records =
            parse_records("[{\"Pin\": \"7\", \"Name\": \"Ana\\r\\n\", \"CheckInTime\": \"2024-01-02T09:00:00\"}]").unwrap();
        assert_eq!(records[0].employee_name, "Ana");
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert_eq!(parse_timestamp("2024-01-02T09:00:00").unwrap(), at(9, 0));
        assert_eq!(parse_timestamp("2024-01-02T09:00:00.250").unwrap().format("%H:%M").to_string(), "09:00");
        assert_eq!(parse_timestamp("2024-01-02T09:00").unwrap(), at(9, 0));
        assert_eq!(parse_timestamp("2024-01-02 09:00:00").unwrap(), at(9, 0));
        assert!(parse_timestamp("2024-01-02T09:00:00Z").is_ok());
        assert!(parse_timestamp("02/01/2024").is_err());
    }

    #[test]
    fn test_worked_until_uses_now_for_open_records() {
        let open = AttendanceRecord::new("7", "Ana", at(9, 0));
        assert_eq!(open.worked_until(at(10, 15)).num_minutes(), 75);

        let closed = AttendanceRecord::new("7", "Ana", at(9, 0)).with_check_out(at(9, 30));
        assert_eq!(closed.worked_until(at(23, 0)).num_minutes(), 30);
    }

    #[test]
    fn test_device_filter() {
        let records = vec![
            AttendanceRecord::new("7", "Ana", at(9, 0)).with_device("A"),
            AttendanceRecord::new("9", "Ben", at(9, 0)).with_device("B"),
            AttendanceRecord::new("5", "Cy", at(9, 0)),
        ];

        let only_a = records.clone().for_device(Some("A"));
        assert_eq!(only_a.len(), 1);
        assert_eq!(only_a[0].employee_id, "7");

        assert_eq!(records.clone().for_device(None).len(), 3);
        assert_eq!(records.clone().for_device(Some("")).len(), 3);
    }

    #[test]
    fn test_device_filter_falls_back_to_all_records() {
        let records = vec![
            AttendanceRecord::new("7", "Ana", at(9, 0)).with_device("A"),
            AttendanceRecord::new("9", "Ben", at(9, 0)).with_device("B"),
        ];
        assert_eq!(records.clone().for_device(Some("Z")), records);
    }
}
