//! Display formatting for durations and records.
//!
//! Durations are shown as `HH:MM` everywhere: console tables, exports and
//! summaries. Hours are zero-padded to two digits but may grow beyond them
//! for weekly totals, and negative values are clamped to `00:00`.
//!
//! ## Examples
//!
//! ```rust
//! use tally::libs::formatter::{format_duration, format_minutes};
//! use chrono::Duration;
//!
//! assert_eq!(format_minutes(90), "01:30");
//! assert_eq!(format_minutes(2400), "40:00");
//! assert_eq!(format_duration(&Duration::minutes(-5)), "00:00");
//! ```

use crate::libs::record::TimeRecord;
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A time record with every field pre-formatted for display or export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedRecord {
    /// First eight characters of the record id, enough to address it on the CLI.
    pub short_id: String,
    pub date: String,
    pub start: String,
    pub end: String,
    pub duration: String,
    pub activity: String,
    pub description: String,
}

impl From<&TimeRecord> for FormattedRecord {
    fn from(record: &TimeRecord) -> Self {
        FormattedRecord {
            short_id: short_id(&record.id).to_string(),
            date: record.date.clone(),
            start: record.start_time.clone(),
            end: record.end_time.clone(),
            duration: format_minutes(record.duration),
            activity: record.activity_type.clone(),
            description: record.description.clone().unwrap_or_default(),
        }
    }
}

/// The leading part of an id shown in tables.
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((index, _)) => &id[..index],
        None => id,
    }
}

/// Formats a minute count as `HH:MM`.
pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Formats a `chrono::Duration` as `HH:MM`, dropping seconds.
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a percentage value such as `67%`.
pub fn format_percent(percent: u32) -> String {
    format!("{}%", percent)
}
