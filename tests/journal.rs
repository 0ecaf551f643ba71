#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc, Weekday};
    use chrono_tz::Asia::Taipei;
    use serde_json::json;
    use tally::db::store::{KeyValueStore, MemoryStore, StoreError, StoreResult, RECORDS_KEY, SETTINGS_KEY};
    use tally::libs::activity::ActivityType;
    use tally::libs::journal::{AddOutcome, Journal};
    use tally::libs::record::{TimeEntryFormData, TimeRecord};
    use tally::libs::settings::{SettingsPatch, UserSettings, ViewMode};
    use tally::libs::validation::Field;
    use tally::libs::week::{FixedClock, WeekCalendar};

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 26, 4, 0, 0).unwrap()
    }

    fn add(journal: &mut Journal<MemoryStore>, date: &str, start: &str, end: &str, activity: &str, minutes_later: i64) -> TimeRecord {
        let draft = TimeEntryFormData::new(date, start, end, activity, None);
        let clock = FixedClock(base_time() + Duration::minutes(minutes_later));
        match journal.add(&draft, &clock).unwrap() {
            AddOutcome::Added(record) => record,
            AddOutcome::Rejected(errors) => panic!("draft rejected: {:?}", errors),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_stores_normalized_record() {
        let mut journal = Journal::new(MemoryStore::default());
        let draft = TimeEntryFormData::new(" 2025-06-26 ", "09:00", "10:30", "study", Some("  chapter 3  "));

        let record = match journal.add(&draft, &FixedClock(base_time())).unwrap() {
            AddOutcome::Added(record) => record,
            AddOutcome::Rejected(errors) => panic!("draft rejected: {:?}", errors),
        };

        assert_eq!(record.date, "2025-06-26");
        assert_eq!(record.duration, 90);
        assert_eq!(record.activity_type, "學習");
        assert_eq!(record.description.as_deref(), Some("chapter 3"));
        assert_eq!(record.created_at, base_time());
        assert_eq!(journal.records(), vec![record.clone()]);
        assert_eq!(journal.find(&record.id), Some(record));
    }

    #[test]
    fn test_blank_description_is_dropped() {
        let mut journal = Journal::new(MemoryStore::default());
        let draft = TimeEntryFormData::new("2025-06-26", "09:00", "10:00", "work", Some("   "));
        match journal.add(&draft, &FixedClock(base_time())).unwrap() {
            AddOutcome::Added(record) => assert_eq!(record.description, None),
            AddOutcome::Rejected(errors) => panic!("draft rejected: {:?}", errors),
        }
    }

    #[test]
    fn test_rejected_draft_is_not_persisted() {
        let mut store = MemoryStore::default();
        let mut journal = Journal::new(&mut store);
        let draft = TimeEntryFormData::new("2025-06-26", "10:00", "09:00", "work", None);

        match journal.add(&draft, &FixedClock(base_time())).unwrap() {
            AddOutcome::Rejected(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, Field::EndTime);
            }
            AddOutcome::Added(record) => panic!("unexpected record {:?}", record),
        }
        assert!(journal.records().is_empty());
        assert_eq!(store.get_raw(RECORDS_KEY).unwrap(), None);
    }

    #[test]
    fn test_unreadable_records_are_never_overwritten() {
        let kept = TimeRecord::new("2025-06-25", "09:00", "10:00", 60, ActivityType::Work, None, base_time());
        let newer = TimeRecord::new("2025-06-25", "10:00", "11:00", 60, ActivityType::Study, None, base_time());
        let mut newer = serde_json::to_value(&newer).unwrap();
        newer["duration"] = json!(60.5);
        let document = serde_json::to_string(&json!([kept, newer])).unwrap();

        let mut store = MemoryStore::default();
        store.set_raw(RECORDS_KEY, &document).unwrap();

        let mut journal = Journal::new(&mut store);
        assert!(journal.records().is_empty());

        let draft = TimeEntryFormData::new("2025-06-26", "09:00", "10:00", "work", None);
        assert!(journal.add(&draft, &FixedClock(base_time())).is_err());
        assert!(journal.delete(&kept.id).is_err());
        assert!(journal.clear().is_err());

        assert_eq!(store.get_raw(RECORDS_KEY).unwrap(), Some(document));
    }

    /// Holds settings but fails every read.
    #[derive(Default)]
    struct UnreadableStore {
        inner: MemoryStore,
    }

    impl KeyValueStore for UnreadableStore {
        fn get_raw(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::Serialization(serde_json::from_str::<u32>("x").unwrap_err()))
        }

        fn set_raw(&mut self, key: &str, value: &str) -> StoreResult<()> {
            self.inner.set_raw(key, value)
        }

        fn remove(&mut self, key: &str) -> StoreResult<()> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_failed_settings_read_keeps_stored_settings() {
        let stored = r#"{"timezone":"Europe/Berlin","weeklyGoal":600}"#;
        let mut store = UnreadableStore::default();
        store.inner.set_raw(SETTINGS_KEY, stored).unwrap();

        let mut journal = Journal::new(&mut store);
        assert!(journal.settings().is_err());
        let patch = SettingsPatch {
            weekly_goal: Some(900),
            ..SettingsPatch::default()
        };
        assert!(journal.update_settings(&patch).is_err());

        assert_eq!(store.inner.get_raw(SETTINGS_KEY).unwrap().as_deref(), Some(stored));
    }

    #[test]
    fn test_records_are_newest_first() {
        let mut journal = Journal::new(MemoryStore::default());
        let first = add(&mut journal, "2025-06-26", "09:00", "10:00", "work", 0);
        let second = add(&mut journal, "2025-06-20", "09:00", "10:00", "work", 5);
        let third = add(&mut journal, "2025-06-24", "09:00", "10:00", "work", 10);

        let ids: Vec<String> = journal.records().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![third.id, second.id, first.id.clone()]);
        assert_eq!(journal.earliest().map(|r| r.id), Some(first.id));
    }

    #[test]
    fn test_delete() {
        let mut journal = Journal::new(MemoryStore::default());
        let kept = add(&mut journal, "2025-06-26", "09:00", "10:00", "work", 0);
        let removed = add(&mut journal, "2025-06-26", "10:00", "11:00", "study", 1);

        assert!(journal.delete(&removed.id).unwrap());
        assert!(!journal.delete(&removed.id).unwrap());
        assert!(!journal.delete("no-such-id").unwrap());
        assert_eq!(journal.records(), vec![kept]);

        assert_eq!(journal.clear().unwrap(), 1);
        assert!(journal.records().is_empty());
    }

    #[test]
    fn test_resolve_id_by_prefix() {
        let mut journal = Journal::new(MemoryStore::default());
        let record = add(&mut journal, "2025-06-26", "09:00", "10:00", "work", 0);

        assert_eq!(journal.resolve_id(&record.id[..8]).unwrap(), Some(record.id.clone()));
        assert_eq!(journal.resolve_id(&record.id).unwrap(), Some(record.id.clone()));
        assert_eq!(journal.resolve_id("zzzz").unwrap(), None);

        add(&mut journal, "2025-06-26", "10:00", "11:00", "work", 1);
        assert!(journal.resolve_id("").is_err());
    }

    #[test]
    fn test_filters_by_day_week_and_month() {
        let mut journal = Journal::new(MemoryStore::default());
        add(&mut journal, "2025-06-21", "09:00", "10:00", "work", 0);
        add(&mut journal, "2025-06-22", "09:00", "10:00", "work", 1);
        add(&mut journal, "2025-06-26", "09:00", "10:00", "work", 2);
        add(&mut journal, "2025-06-28", "09:00", "10:00", "work", 3);
        add(&mut journal, "2025-07-01", "09:00", "10:00", "work", 4);

        assert_eq!(journal.for_date(date(2025, 6, 26)).len(), 1);
        assert!(journal.for_date(date(2025, 6, 27)).is_empty());

        let sunday_weeks = WeekCalendar::new(Taipei, Weekday::Sun);
        let week: Vec<String> = journal.for_week(&sunday_weeks, &date(2025, 6, 26)).into_iter().map(|r| r.date).collect();
        assert_eq!(week, vec!["2025-06-28", "2025-06-26", "2025-06-22"]);

        let monday_weeks = WeekCalendar::new(Taipei, Weekday::Mon);
        let week: Vec<String> = journal.for_week(&monday_weeks, &date(2025, 6, 26)).into_iter().map(|r| r.date).collect();
        assert_eq!(week, vec!["2025-06-28", "2025-06-26"]);

        assert_eq!(journal.for_month(date(2025, 6, 1)).len(), 4);
        assert_eq!(journal.for_month(date(2025, 7, 15)).len(), 1);
    }

    #[test]
    fn test_settings_seeded_on_first_access() {
        let mut store = MemoryStore::default();
        let mut journal = Journal::new(&mut store);

        let settings = journal.settings().unwrap();
        assert_eq!(settings, UserSettings::default());
        assert_eq!(settings.timezone, "Asia/Taipei");
        assert_eq!(settings.week_start_day, 0);
        assert_eq!(settings.weekly_goal, 2400);
        assert!(store.get_raw(SETTINGS_KEY).unwrap().is_some());
    }

    #[test]
    fn test_configured_defaults_are_seeded() {
        let defaults = UserSettings {
            week_start_day: 1,
            weekly_goal: 600,
            ..UserSettings::default()
        };
        let mut journal = Journal::with_default_settings(MemoryStore::default(), defaults.clone());
        assert_eq!(journal.settings().unwrap(), defaults);
    }

    #[test]
    fn test_update_changes_only_patched_fields() {
        let mut store = MemoryStore::default();
        let mut journal = Journal::new(&mut store);
        let patch = SettingsPatch {
            weekly_goal: Some(1800),
            preferred_view: Some(ViewMode::Day),
            ..SettingsPatch::default()
        };

        let updated = journal.update_settings(&patch).unwrap();
        assert_eq!(updated.weekly_goal, 1800);
        assert_eq!(updated.preferred_view, ViewMode::Day);
        assert_eq!(updated.timezone, "Asia/Taipei");
        assert!(updated.notifications);

        let mut reopened = Journal::new(&mut store);
        assert_eq!(reopened.settings().unwrap(), updated);
    }

    #[test]
    fn test_weekly_summary() {
        let mut journal = Journal::new(MemoryStore::default());
        add(&mut journal, "2025-06-21", "09:00", "12:00", "work", 0);
        add(&mut journal, "2025-06-22", "09:00", "10:00", "work", 1);
        add(&mut journal, "2025-06-26", "09:00", "09:30", "study", 2);
        add(&mut journal, "2025-06-26", "13:00", "14:00", "extra-work", 3);

        let summary = journal.weekly_summary(&FixedClock(base_time())).unwrap();
        assert_eq!(summary.start.date_naive(), date(2025, 6, 22));
        assert_eq!(summary.end.date_naive(), date(2025, 6, 28));
        assert_eq!(summary.dates[0], date(2025, 6, 22));
        assert_eq!(summary.statistics.total, 150);
        assert_eq!(summary.statistics.minutes(ActivityType::Work), 60);
        assert_eq!(summary.statistics.minutes(ActivityType::ExtraWork), 60);
        assert_eq!(summary.most_active, Some(ActivityType::Work));
        assert_eq!(summary.percentages[&ActivityType::Study], 20);
        assert_eq!(summary.daily.len(), 2);
        assert_eq!(summary.daily["2025-06-26"].total, 90);
        assert_eq!(summary.goal.goal, 2400);
        assert_eq!(summary.goal.remaining, 2250);
        assert_eq!(summary.goal.percent, 6);
    }
}
