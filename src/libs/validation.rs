//! Validation of draft time records.
//!
//! Every field is checked independently, so a single call reports all
//! problems at once. Each field yields at most one error. Temporal problems
//! (end not after start, span over 24 hours) are reported under
//! [`Field::EndTime`] whichever value is actually wrong.
//!
//! A draft is acceptable exactly when [`validate`] returns an empty list.
//!
//! ## Examples
//!
//! ```rust
//! use tally::libs::record::TimeEntryFormData;
//! use tally::libs::validation::{validate, Field};
//!
//! let draft = TimeEntryFormData::new("2025-13-01", "09:00", "08:00", "UNKNOWN", None);
//! let errors = validate(&draft);
//! let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
//! assert_eq!(fields, vec![Field::Date, Field::EndTime, Field::ActivityType]);
//! ```

use crate::libs::activity::ActivityType;
use crate::libs::duration::{calculate_duration, is_valid_time, DurationError};
use crate::libs::record::{TimeEntryFormData, MAX_DESCRIPTION_CHARS};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("DATE_REGEX should compile"));

/// Form field a validation error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Date,
    StartTime,
    EndTime,
    ActivityType,
    Description,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Date => "date",
            Field::StartTime => "startTime",
            Field::EndTime => "endTime",
            Field::ActivityType => "activityType",
            Field::Description => "description",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    fn new(field: Field, message: impl fmt::Display) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// `validate` result with an explicit flag, for callers that prefer one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Returns `true` for a real calendar date written as `YYYY-MM-DD`.
pub fn is_valid_date(date: &str) -> bool {
    DATE_REGEX.is_match(date) && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

/// Checks a draft record and returns every problem found.
pub fn validate(draft: &TimeEntryFormData) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let date = draft.date.trim();
    if date.is_empty() {
        errors.push(ValidationError::new(Field::Date, "請輸入日期"));
    } else if !is_valid_date(date) {
        errors.push(ValidationError::new(Field::Date, "日期格式無效"));
    }

    let start_time = draft.start_time.trim();
    let start_ok = check_time(start_time, Field::StartTime, "請輸入開始時間", &mut errors);

    let end_time = draft.end_time.trim();
    let end_ok = check_time(end_time, Field::EndTime, "請輸入結束時間", &mut errors);

    if start_ok && end_ok {
        let result = calculate_duration(start_time, end_time);
        if let Some(error) = result.error {
            errors.push(ValidationError::new(Field::EndTime, error));
        }
    }

    let activity = draft.activity_type.trim();
    if activity.is_empty() {
        errors.push(ValidationError::new(Field::ActivityType, "請選擇活動類型"));
    } else if activity.parse::<ActivityType>().is_err() {
        errors.push(ValidationError::new(Field::ActivityType, "無效的活動類型"));
    }

    if let Some(description) = &draft.description {
        if description.chars().count() > MAX_DESCRIPTION_CHARS {
            errors.push(ValidationError::new(
                Field::Description,
                format!("描述不能超過{}個字元", MAX_DESCRIPTION_CHARS),
            ));
        }
    }

    errors
}

/// Same as [`validate`], with the verdict spelled out.
pub fn validate_entry(draft: &TimeEntryFormData) -> ValidationOutcome {
    let errors = validate(draft);
    ValidationOutcome {
        is_valid: errors.is_empty(),
        errors,
    }
}

fn check_time(value: &str, field: Field, missing: &str, errors: &mut Vec<ValidationError>) -> bool {
    if value.is_empty() {
        errors.push(ValidationError::new(field, missing));
        false
    } else if !is_valid_time(value) {
        errors.push(ValidationError::new(field, DurationError::InvalidTimeFormat));
        false
    } else {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date("2025-06-26"));
        assert!(is_valid_date("2024-02-29"));
        assert!(!is_valid_date("2025-02-29"));
        assert!(!is_valid_date("2025-13-01"));
        assert!(!is_valid_date("2025-6-26"));
        assert!(!is_valid_date("26/06/2025"));
    }
}
