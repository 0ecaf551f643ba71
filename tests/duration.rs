#[cfg(test)]
mod tests {
    use tally::libs::duration::{calculate_duration, is_valid_time, time_to_minutes, DurationError, MINUTES_PER_DAY};

    #[test]
    fn test_simple_interval() {
        let result = calculate_duration("09:00", "10:30");
        assert!(result.is_valid);
        assert_eq!(result.duration, 90);
        assert_eq!(result.error, None);
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let result = calculate_duration("10:00", "09:00");
        assert!(!result.is_valid);
        assert_eq!(result.duration, 0);
        assert_eq!(result.error, Some(DurationError::EndBeforeStart));
        assert_eq!(result.error.unwrap().to_string(), "結束時間必須晚於開始時間");
    }

    #[test]
    fn test_equal_times_are_rejected() {
        let result = calculate_duration("12:00", "12:00");
        assert!(!result.is_valid);
        assert_eq!(result.error, Some(DurationError::EndBeforeStart));
    }

    #[test]
    fn test_midnight_is_not_wrapped() {
        // 23:00 → 01:00 would be two hours overnight, but entries stay within one day.
        let result = calculate_duration("23:00", "01:00");
        assert!(!result.is_valid);
        assert_eq!(result.error, Some(DurationError::EndBeforeStart));
    }

    #[test]
    fn test_invalid_format() {
        for (start, end) in [("9am", "10:00"), ("09:00", "24:00"), ("09:60", "10:00"), ("", "10:00"), ("09:00", "10:0")] {
            let result = calculate_duration(start, end);
            assert!(!result.is_valid, "{} → {} should be invalid", start, end);
            assert_eq!(result.duration, 0);
            assert_eq!(result.error, Some(DurationError::InvalidTimeFormat));
        }
    }

    #[test]
    fn test_whole_day_bounds() {
        let result = calculate_duration("00:00", "23:59");
        assert!(result.is_valid);
        assert_eq!(result.duration, 1439);
        assert!(result.duration <= MINUTES_PER_DAY);

        let result = calculate_duration("0:00", "0:01");
        assert!(result.is_valid);
        assert_eq!(result.duration, 1);
    }

    #[test]
    fn test_duration_matches_minute_difference_for_all_hours() {
        for start_hour in 0..24 {
            for end_hour in 0..24 {
                let start = format!("{:02}:15", start_hour);
                let end = format!("{:02}:45", end_hour);
                let result = calculate_duration(&start, &end);
                let start_minutes = time_to_minutes(&start).unwrap();
                let end_minutes = time_to_minutes(&end).unwrap();
                if end_minutes > start_minutes {
                    assert!(result.is_valid);
                    assert_eq!(result.duration, end_minutes - start_minutes);
                } else {
                    assert_eq!(result.error, Some(DurationError::EndBeforeStart));
                }
            }
        }
    }

    #[test]
    fn test_is_valid_time() {
        assert!(is_valid_time("7:30"));
        assert!(is_valid_time("07:30"));
        assert!(is_valid_time("23:59"));
        assert!(!is_valid_time("23:59:00"));
        assert!(!is_valid_time(" 07:30"));
        assert!(!is_valid_time("7:5"));
    }
}
