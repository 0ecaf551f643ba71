#[cfg(test)]
mod tests {
    use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Timelike, Utc, Weekday};
    use chrono_tz::America::New_York;
    use chrono_tz::Asia::Taipei;
    use tally::libs::week::{FixedClock, WeekCalendar};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const ALL_WEEKDAYS: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    #[test]
    fn test_sunday_week_in_taipei() {
        let calendar = WeekCalendar::new(Taipei, Weekday::Sun);
        let thursday = date(2025, 6, 26);

        let start = calendar.week_start(&thursday);
        assert_eq!(start.format("%Y-%m-%d %H:%M:%S%.3f").to_string(), "2025-06-22 00:00:00.000");

        let end = calendar.week_end(&thursday);
        assert_eq!(end.format("%Y-%m-%d %H:%M:%S%.3f").to_string(), "2025-06-28 23:59:59.999");
    }

    #[test]
    fn test_monday_week_disagrees_with_sunday_week() {
        let sunday_first = WeekCalendar::new(Taipei, Weekday::Sun);
        let monday_first = WeekCalendar::new(Taipei, Weekday::Mon);
        let sunday = date(2025, 6, 22);

        assert_eq!(sunday_first.first_day(&sunday), date(2025, 6, 22));
        assert_eq!(monday_first.first_day(&sunday), date(2025, 6, 16));
        assert!(!monday_first.is_same_week(&sunday, &date(2025, 6, 23)));
        assert!(sunday_first.is_same_week(&sunday, &date(2025, 6, 23)));
    }

    #[test]
    fn test_week_end_is_six_days_and_a_day_after_start() {
        let expected = Duration::days(6)
            + Duration::hours(23)
            + Duration::minutes(59)
            + Duration::seconds(59)
            + Duration::milliseconds(999);
        let mut day = date(2024, 12, 20);
        for _ in 0..60 {
            for week_start in ALL_WEEKDAYS {
                let calendar = WeekCalendar::new(Taipei, week_start);
                let start = calendar.week_start(&day);
                let end = calendar.week_end(&day);
                assert_eq!(end.naive_local() - start.naive_local(), expected);
                assert_eq!(start.date_naive().weekday(), week_start);
                assert!(calendar.is_same_week(&start, &end));
                assert!(calendar.is_same_week(&day, &start));
            }
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_week_dates_are_consecutive() {
        let calendar = WeekCalendar::new(Taipei, Weekday::Mon);
        let dates = calendar.week_dates(&date(2025, 1, 1));
        assert_eq!(dates[0], date(2024, 12, 30));
        assert_eq!(dates[6], date(2025, 1, 5));
        for pair in dates.windows(2) {
            assert_eq!(pair[1], pair[0].succ_opt().unwrap());
        }
    }

    #[test]
    fn test_zoned_instant_is_converted_before_taking_the_day() {
        let calendar = WeekCalendar::new(Taipei, Weekday::Sun);
        // Saturday 16:30 UTC is already Sunday 00:30 in Taipei.
        let instant: DateTime<Utc> = Utc.with_ymd_and_hms(2025, 6, 21, 16, 30, 0).unwrap();
        assert_eq!(calendar.local_date(&instant), date(2025, 6, 22));
        assert_eq!(calendar.first_day(&instant), date(2025, 6, 22));

        // A zone-less value is taken as Taipei wall-clock time as-is.
        let naive = date(2025, 6, 21).and_hms_opt(16, 30, 0).unwrap();
        assert_eq!(calendar.first_day(&naive), date(2025, 6, 15));
    }

    #[test]
    fn test_current_week_uses_injected_clock() {
        let calendar = WeekCalendar::new(Taipei, Weekday::Sun);
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 6, 26, 4, 0, 0).unwrap());

        let (start, end) = calendar.current_week(&clock);
        assert_eq!(start.date_naive(), date(2025, 6, 22));
        assert_eq!(end.date_naive(), date(2025, 6, 28));
        assert_eq!(calendar.today(&clock), date(2025, 6, 26));
    }

    #[test]
    fn test_week_across_dst_change_keeps_wall_clock_bounds() {
        // US daylight saving time began on Sunday 2025-03-09.
        let calendar = WeekCalendar::new(New_York, Weekday::Sun);
        let start = calendar.week_start(&date(2025, 3, 12));
        let end = calendar.week_end(&date(2025, 3, 12));

        assert_eq!(start.date_naive(), date(2025, 3, 9));
        assert_eq!(start.hour(), 0);
        assert_eq!(end.date_naive(), date(2025, 3, 15));
        assert_eq!((end.hour(), end.minute(), end.second()), (23, 59, 59));
        // One hour shorter in absolute time than a regular week.
        assert_eq!(end - start, Duration::days(7) - Duration::hours(1) - Duration::milliseconds(1));
    }
}
