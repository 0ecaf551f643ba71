use crate::libs::activity::ActivityType;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest accepted description, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 200;

/// One logged activity interval.
///
/// Records are immutable once created; an edit is a delete followed by a new
/// record. `activity_type` keeps the raw stored label so that categories
/// written by a newer version survive a load/save cycle untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRecord {
    pub id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: u32,
    pub activity_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TimeRecord {
    /// Builds a record with a fresh identifier.
    ///
    /// The caller is responsible for having validated the inputs; see
    /// [`crate::libs::journal::Journal::add`].
    pub fn new(
        date: &str,
        start_time: &str,
        end_time: &str,
        duration: u32,
        activity_type: ActivityType,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        TimeRecord {
            id: Uuid::new_v4().to_string(),
            date: date.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            duration,
            activity_type: activity_type.label().to_string(),
            description,
            created_at,
        }
    }

    /// The record's category, or `None` for a label this version does not know.
    pub fn category(&self) -> Option<ActivityType> {
        self.activity_type.parse().ok()
    }

    /// The record's date, or `None` if the stored string is malformed.
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// An unvalidated record as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryFormData {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub activity_type: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl TimeEntryFormData {
    pub fn new(date: &str, start_time: &str, end_time: &str, activity_type: &str, description: Option<&str>) -> Self {
        TimeEntryFormData {
            date: date.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            activity_type: activity_type.to_string(),
            description: description.map(str::to_string),
        }
    }

    /// The description with surrounding whitespace removed, or `None` if blank.
    pub fn trimmed_description(&self) -> Option<String> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    }
}
