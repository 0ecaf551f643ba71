#[cfg(test)]
mod tests {
    use tally::libs::record::TimeEntryFormData;
    use tally::libs::validation::{validate, validate_entry, Field};

    fn fields(draft: &TimeEntryFormData) -> Vec<Field> {
        validate(draft).iter().map(|error| error.field).collect()
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        let draft = TimeEntryFormData::new("2025-06-26", "09:00", "10:30", "工作", Some("weekly planning"));
        assert!(validate(&draft).is_empty());

        let outcome = validate_entry(&draft);
        assert!(outcome.is_valid);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_cli_alias_is_accepted() {
        let draft = TimeEntryFormData::new("2025-06-26", "09:00", "10:30", "extra-study", None);
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn test_every_problem_reported_at_once() {
        let draft = TimeEntryFormData::new("2025-13-01", "09:00", "08:00", "UNKNOWN", None);
        let errors = validate(&draft);

        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].field, Field::Date);
        assert_eq!(errors[0].message, "日期格式無效");
        assert_eq!(errors[1].field, Field::EndTime);
        assert_eq!(errors[1].message, "結束時間必須晚於開始時間");
        assert_eq!(errors[2].field, Field::ActivityType);
        assert_eq!(errors[2].message, "無效的活動類型");
        assert!(!errors.iter().any(|error| error.field == Field::StartTime));

        assert!(!validate_entry(&draft).is_valid);
    }

    #[test]
    fn test_missing_fields() {
        let errors = validate(&TimeEntryFormData::default());
        let messages: Vec<(Field, &str)> = errors.iter().map(|e| (e.field, e.message.as_str())).collect();
        assert_eq!(
            messages,
            vec![
                (Field::Date, "請輸入日期"),
                (Field::StartTime, "請輸入開始時間"),
                (Field::EndTime, "請輸入結束時間"),
                (Field::ActivityType, "請選擇活動類型"),
            ]
        );
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let draft = TimeEntryFormData::new("  ", "09:00", "10:00", "  ", None);
        assert_eq!(fields(&draft), vec![Field::Date, Field::ActivityType]);
    }

    #[test]
    fn test_malformed_time_skips_ordering_check() {
        let draft = TimeEntryFormData::new("2025-06-26", "9.00", "08:00", "work", None);
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::StartTime);
        assert_eq!(errors[0].message, "請輸入有效的時間格式");
    }

    #[test]
    fn test_impossible_calendar_date() {
        let draft = TimeEntryFormData::new("2025-02-30", "09:00", "10:00", "work", None);
        assert_eq!(fields(&draft), vec![Field::Date]);
    }

    #[test]
    fn test_description_length_is_counted_in_characters() {
        let at_limit = "描".repeat(200);
        let draft = TimeEntryFormData::new("2025-06-26", "09:00", "10:00", "work", Some(&at_limit));
        assert!(validate(&draft).is_empty());

        let over_limit = "a".repeat(201);
        let draft = TimeEntryFormData::new("2025-06-26", "09:00", "10:00", "work", Some(&over_limit));
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Description);
        assert_eq!(errors[0].message, "描述不能超過200個字元");
    }

    #[test]
    fn test_validation_errors_serialize_with_field_names() {
        let draft = TimeEntryFormData::new("2025-06-26", "10:00", "09:00", "work", None);
        let json = serde_json::to_value(validate(&draft)).unwrap();
        assert_eq!(json[0]["field"], "endTime");
    }
}
