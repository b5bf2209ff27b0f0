#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use punchclock::libs::attendance::AttendanceRecord;
    use punchclock::libs::entry::{find_open_session, parse_clock_time, time_worked, CheckoutUpdate, NewEntry};
    use punchclock::libs::error::ReportError;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
    }

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        date().and_time(time(hour, minute))
    }

    fn entry(check_out: Option<NaiveTime>) -> NewEntry {
        NewEntry {
            emp_id: "E-7".to_string(),
            entry_type: "Office".to_string(),
            date: date(),
            check_in: time(9, 0),
            check_out,
        }
    }

    #[test]
    fn test_parse_clock_time() {
        assert_eq!(parse_clock_time("09:30").unwrap(), time(9, 30));
        assert_eq!(parse_clock_time(" 17:45:00 ").unwrap(), time(17, 45));
        assert_eq!(parse_clock_time("25:00"), Err(ReportError::InvalidClockTime("25:00".to_string())));
        assert!(parse_clock_time("noon").is_err());
    }

    #[test]
    fn test_time_worked() {
        assert_eq!(time_worked(at(9, 0), at(17, 30)).unwrap(), "8:30");
        assert_eq!(time_worked(at(9, 0), at(9, 1)).unwrap(), "0:01");
        assert!(matches!(
            time_worked(at(9, 0), at(9, 0)),
            Err(ReportError::CheckOutNotAfterCheckIn { .. })
        ));
        assert!(time_worked(at(9, 0), at(8, 0)).is_err());
    }

    #[test]
    fn test_entry_payload() {
        let payload = entry(Some(time(17, 15))).payload("42", "admin@example.com").unwrap();
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["CID"], "42");
        assert_eq!(json["EmpID"], "E-7");
        assert_eq!(json["TypeID"], "Office");
        assert_eq!(json["CheckInTime"], "2024-01-02T09:00:00");
        assert_eq!(json["CheckOutTime"], "2024-01-02T17:15:00");
        assert_eq!(json["TimeWorked"], "8:15");
        assert_eq!(json["Date"], "2024-01-02");
        assert_eq!(json["LastModifiedBy"], "admin@example.com");
        assert!(json["CheckInSnap"].is_null());
    }

    #[test]
    fn test_entry_without_checkout() {
        let payload = entry(None).payload("42", "Admin").unwrap();
        assert_eq!(payload.time_worked, "0:00");
        assert_eq!(payload.check_out_time, None);
    }

    #[test]
    fn test_entry_validation() {
        assert!(matches!(
            entry(Some(time(8, 0))).payload("42", "Admin"),
            Err(ReportError::CheckOutNotAfterCheckIn { .. })
        ));

        let mut missing_employee = entry(None);
        missing_employee.emp_id = "  ".to_string();
        assert_eq!(missing_employee.payload("42", "Admin"), Err(ReportError::MissingField("EmpID")));

        let mut missing_type = entry(None);
        missing_type.entry_type = String::new();
        assert_eq!(missing_type.payload("42", "Admin"), Err(ReportError::MissingField("Type")));
    }

    #[test]
    fn test_checkout_lands_on_check_in_date() {
        let record = AttendanceRecord::new("7", "Ana", at(9, 0)).with_emp_id("E-7").with_entry_type("Remote");
        let update = CheckoutUpdate::new(&record, time(16, 40), "Admin").unwrap();

        assert_eq!(update.emp_id, "E-7");
        assert_eq!(update.check_in, at(9, 0));
        assert_eq!(update.payload.check_out_time, "2024-01-02T16:40:00");
        assert_eq!(update.payload.time_worked, "7:40");
        assert_eq!(update.payload.type_id, "Remote");
        assert_eq!(update.payload.date, "2024-01-02");

        let json = serde_json::to_value(&update.payload).unwrap();
        assert_eq!(json["check_out_time"], "2024-01-02T16:40:00");
        assert!(json["check_out_snap"].is_null());
    }

    #[test]
    fn test_checkout_must_follow_check_in() {
        let record = AttendanceRecord::new("7", "Ana", at(9, 0)).with_emp_id("E-7");
        assert!(matches!(
            CheckoutUpdate::new(&record, time(9, 0), "Admin"),
            Err(ReportError::CheckOutNotAfterCheckIn { .. })
        ));
    }

    #[test]
    fn test_checkout_rejects_closed_or_unaddressable_records() {
        let closed = AttendanceRecord::new("7", "Ana", at(9, 0)).with_emp_id("E-7").with_check_out(at(12, 0));
        assert_eq!(
            CheckoutUpdate::new(&closed, time(13, 0), "Admin"),
            Err(ReportError::NoOpenSession("7".to_string()))
        );

        let no_emp_id = AttendanceRecord::new("7", "Ana", at(9, 0));
        assert_eq!(
            CheckoutUpdate::new(&no_emp_id, time(13, 0), "Admin"),
            Err(ReportError::MissingField("EmpID"))
        );
    }

    #[test]
    fn test_find_open_session() {
        let records = vec![
            AttendanceRecord::new("7", "Ana", at(8, 0)).with_check_out(at(12, 0)),
            AttendanceRecord::new("7", "Ana", at(13, 0)),
            AttendanceRecord::new("9", "Ben", at(9, 0)),
            AttendanceRecord::new("9", "Ben", at(14, 30)),
        ];

        assert_eq!(find_open_session(&records, "7", None).unwrap().check_in, at(13, 0));
        assert_eq!(find_open_session(&records, "9", Some(time(14, 30))).unwrap().check_in, at(14, 30));
        assert_eq!(
            find_open_session(&records, "9", None),
            Err(ReportError::AmbiguousOpenSession {
                pin: "9".to_string(),
                count: 2
            })
        );
        assert_eq!(
            find_open_session(&records, "5", None),
            Err(ReportError::NoOpenSession("5".to_string()))
        );
        assert_eq!(
            find_open_session(&records, "7", Some(time(8, 0))),
            Err(ReportError::NoOpenSession("7".to_string()))
        );
    }
}
