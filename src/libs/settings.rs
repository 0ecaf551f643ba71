//! Per-user preferences.
//!
//! A single [`UserSettings`] value exists per user. It is created with
//! defaults the first time it is read, updated by merging a
//! [`SettingsPatch`], and persisted through the same key-value store as the
//! records. There is one writer, so the last write wins.

use crate::libs::week::{parse_timezone, week_start_day_from_index, WeekCalendar};
use chrono::Weekday;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_TIMEZONE: &str = "Asia/Taipei";

/// Forty hours a week.
pub const DEFAULT_WEEKLY_GOAL: u32 = 40 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    #[default]
    Week,
    Month,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewMode::Day => "day",
            ViewMode::Week => "week",
            ViewMode::Month => "month",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    /// IANA timezone name used for all day and week boundaries.
    pub timezone: String,
    /// 0 = Sunday … 6 = Saturday.
    pub week_start_day: u8,
    /// Weekly target in minutes.
    pub weekly_goal: u32,
    pub preferred_view: ViewMode,
    pub notifications: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        UserSettings {
            timezone: DEFAULT_TIMEZONE.to_string(),
            week_start_day: 0,
            weekly_goal: DEFAULT_WEEKLY_GOAL,
            preferred_view: ViewMode::Week,
            notifications: true,
        }
    }
}

/// Optional replacements for [`UserSettings`] fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub timezone: Option<String>,
    pub week_start_day: Option<u8>,
    pub weekly_goal: Option<u32>,
    pub preferred_view: Option<ViewMode>,
    pub notifications: Option<bool>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        *self == SettingsPatch::default()
    }
}

impl UserSettings {
    /// Returns a copy with every field present in `patch` replaced.
    pub fn merged(&self, patch: &SettingsPatch) -> Self {
        UserSettings {
            timezone: patch.timezone.clone().unwrap_or_else(|| self.timezone.clone()),
            week_start_day: patch.week_start_day.unwrap_or(self.week_start_day),
            weekly_goal: patch.weekly_goal.unwrap_or(self.weekly_goal),
            preferred_view: patch.preferred_view.unwrap_or(self.preferred_view),
            notifications: patch.notifications.unwrap_or(self.notifications),
        }
    }

    /// The configured timezone, or the default zone if the name is unknown.
    pub fn tz(&self) -> Tz {
        parse_timezone(&self.timezone).unwrap_or_else(|| {
            tracing::warn!(timezone = %self.timezone, "unknown timezone, falling back to {}", DEFAULT_TIMEZONE);
            chrono_tz::Asia::Taipei
        })
    }

    /// The configured week start, or Sunday if the index is out of range.
    pub fn week_start(&self) -> Weekday {
        week_start_day_from_index(self.week_start_day).unwrap_or(Weekday::Sun)
    }

    pub fn calendar(&self) -> WeekCalendar {
        WeekCalendar::new(self.tz(), self.week_start())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: UserSettings = serde_json::from_str(r#"{"weekStartDay":1}"#).unwrap();
        assert_eq!(settings.week_start_day, 1);
        assert_eq!(settings.timezone, DEFAULT_TIMEZONE);
        assert_eq!(settings.preferred_view, ViewMode::Week);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let settings = UserSettings {
            timezone: "Mars/Olympus_Mons".to_string(),
            week_start_day: 9,
            ..UserSettings::default()
        };
        assert_eq!(settings.tz(), chrono_tz::Asia::Taipei);
        assert_eq!(settings.week_start(), Weekday::Sun);
    }
}
