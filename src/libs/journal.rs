//! The in-process owner of the persisted record list and user settings.
//!
//! All writes go through a [`Journal`], which keeps mutations to the stored
//! list serialized without any locking: the journal holds the store
//! exclusively and every mutation is a read-modify-write of the whole
//! document. The in-memory view is re-read from the store on each query, so
//! it always reflects the latest write.
//!
//! ## Record Lifecycle
//!
//! 1. **Create**: a draft passes validation, its duration is computed, and a
//!    record with a fresh id and creation timestamp is appended.
//! 2. **Read**: listing, filtering by day or week, earliest record.
//! 3. **Delete**: by exact id. Records are never edited in place.
//!
//! ## Usage
//!
//! ```rust
//! use tally::db::store::MemoryStore;
//! use tally::libs::journal::{AddOutcome, Journal};
//! use tally::libs::record::TimeEntryFormData;
//! use tally::libs::week::SystemClock;
//!
//! let mut journal = Journal::new(MemoryStore::default());
//! let draft = TimeEntryFormData::new("2025-06-26", "09:00", "10:30", "work", None);
//! match journal.add(&draft, &SystemClock)? {
//!     AddOutcome::Added(record) => assert_eq!(record.duration, 90),
//!     AddOutcome::Rejected(errors) => panic!("unexpected errors: {:?}", errors),
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::store::{load, load_for_update, load_or_else, save, KeyValueStore, RECORDS_KEY, SETTINGS_KEY};
use crate::libs::activity::ActivityType;
use crate::libs::duration::calculate_duration;
use crate::libs::record::{TimeEntryFormData, TimeRecord};
use crate::libs::settings::{SettingsPatch, UserSettings};
use crate::libs::statistics::{aggregate, daily_breakdown, goal_progress, most_active_category, percentage_of, GoalProgress, TimeStatistics};
use crate::libs::validation::{validate, ValidationError};
use crate::libs::week::{CalendarDay, Clock, WeekCalendar};
use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Datelike, NaiveDate};
use chrono_tz::Tz;
use serde::Serialize;
use std::collections::BTreeMap;

/// Result of submitting a draft.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(TimeRecord),
    Rejected(Vec<ValidationError>),
}

/// Statistics for the week containing "now".
#[derive(Debug, Clone, Serialize)]
pub struct WeeklySummary {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub dates: [NaiveDate; 7],
    pub statistics: TimeStatistics,
    pub percentages: BTreeMap<ActivityType, u32>,
    pub most_active: Option<ActivityType>,
    pub daily: BTreeMap<String, TimeStatistics>,
    pub goal: GoalProgress,
}

pub struct Journal<S: KeyValueStore> {
    store: S,
    default_settings: UserSettings,
}

impl<S: KeyValueStore> Journal<S> {
    pub fn new(store: S) -> Self {
        Self::with_default_settings(store, UserSettings::default())
    }

    /// A journal whose first settings read seeds `default_settings`.
    pub fn with_default_settings(store: S, default_settings: UserSettings) -> Self {
        Self { store, default_settings }
    }

    /// All records, newest first.
    pub fn records(&self) -> Vec<TimeRecord> {
        let mut records = self.stored_records();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }

    /// Validates `draft` and, if acceptable, stores it as a new record.
    pub fn add(&mut self, draft: &TimeEntryFormData, clock: &dyn Clock) -> Result<AddOutcome> {
        let errors = validate(draft);
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "draft rejected");
            return Ok(AddOutcome::Rejected(errors));
        }

        let start_time = draft.start_time.trim();
        let end_time = draft.end_time.trim();
        let duration = calculate_duration(start_time, end_time);
        let activity: ActivityType = draft.activity_type.parse()?;

        let record = TimeRecord::new(
            draft.date.trim(),
            start_time,
            end_time,
            duration.duration,
            activity,
            draft.trimmed_description(),
            clock.now(),
        );

        let mut records = self.records_for_update()?;
        records.push(record.clone());
        save(&mut self.store, RECORDS_KEY, &records)?;

        tracing::info!(id = %record.id, date = %record.date, minutes = record.duration, "record added");
        Ok(AddOutcome::Added(record))
    }

    /// Removes the record with `id`. Returns `false` if there was none.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let mut records = self.records_for_update()?;
        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() == before {
            return Ok(false);
        }
        save(&mut self.store, RECORDS_KEY, &records)?;
        tracing::info!(id, "record deleted");
        Ok(true)
    }

    /// Removes every record.
    pub fn clear(&mut self) -> Result<usize> {
        let count = self.records_for_update()?.len();
        save(&mut self.store, RECORDS_KEY, &Vec::<TimeRecord>::new())?;
        Ok(count)
    }

    pub fn find(&self, id: &str) -> Option<TimeRecord> {
        self.stored_records().into_iter().find(|record| record.id == id)
    }

    /// Resolves an id or a unique id prefix to a full id.
    pub fn resolve_id(&self, prefix: &str) -> Result<Option<String>> {
        let matches: Vec<String> = self
            .stored_records()
            .into_iter()
            .map(|record| record.id)
            .filter(|id| id.starts_with(prefix))
            .collect();
        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.into_iter().next()),
            n => Err(anyhow!("id prefix '{}' matches {} records", prefix, n)),
        }
    }

    /// The first record ever created.
    pub fn earliest(&self) -> Option<TimeRecord> {
        self.stored_records().into_iter().min_by_key(|record| record.created_at)
    }

    /// Records stored under `date`, newest first.
    pub fn for_date(&self, date: NaiveDate) -> Vec<TimeRecord> {
        let key = date.format("%Y-%m-%d").to_string();
        self.records().into_iter().filter(|record| record.date == key).collect()
    }

    /// Records whose date falls in the week containing `day`, newest first.
    ///
    /// Records with an unparseable date are left out.
    pub fn for_week<D: CalendarDay + ?Sized>(&self, calendar: &WeekCalendar, day: &D) -> Vec<TimeRecord> {
        let first = calendar.first_day(day);
        self.records()
            .into_iter()
            .filter(|record| record.naive_date().is_some_and(|date| calendar.first_day(&date) == first))
            .collect()
    }

    /// Records in the calendar month of `date`, newest first.
    pub fn for_month(&self, date: NaiveDate) -> Vec<TimeRecord> {
        self.records()
            .into_iter()
            .filter(|record| {
                record
                    .naive_date()
                    .is_some_and(|day| day.year() == date.year() && day.month() == date.month())
            })
            .collect()
    }

    /// Current settings, seeding the defaults on first access.
    pub fn settings(&mut self) -> Result<UserSettings> {
        self.seed_settings()?;
        Ok(self.current_settings())
    }

    /// Applies `patch` to the stored settings and persists the result.
    pub fn update_settings(&mut self, patch: &SettingsPatch) -> Result<UserSettings> {
        self.seed_settings()?;
        let current: UserSettings = load_for_update(&self.store, SETTINGS_KEY)?;
        let updated = current.merged(patch);
        save(&mut self.store, SETTINGS_KEY, &updated)?;
        tracing::info!(?patch, "settings updated");
        Ok(updated)
    }

    /// Statistics and goal progress for the week containing the clock's "now".
    pub fn weekly_summary(&mut self, clock: &dyn Clock) -> Result<WeeklySummary> {
        let settings = self.settings()?;
        let calendar = settings.calendar();
        let now = clock.now();
        let records = self.for_week(&calendar, &now);
        let statistics = aggregate(&records);

        Ok(WeeklySummary {
            start: calendar.week_start(&now),
            end: calendar.week_end(&now),
            dates: calendar.week_dates(&now),
            percentages: percentage_of(&statistics),
            most_active: most_active_category(&statistics),
            daily: daily_breakdown(&records),
            goal: goal_progress(statistics.total, settings.weekly_goal),
            statistics,
        })
    }

    /// Writes the default settings if none are stored yet.
    fn seed_settings(&mut self) -> Result<()> {
        if self.store.get_raw(SETTINGS_KEY)?.is_none() {
            save(&mut self.store, SETTINGS_KEY, &self.default_settings)?;
        }
        Ok(())
    }

    fn stored_records(&self) -> Vec<TimeRecord> {
        load(&self.store, RECORDS_KEY)
    }

    /// The stored list for a read-modify-write; fails if it cannot be read.
    fn records_for_update(&self) -> Result<Vec<TimeRecord>> {
        let records = load_for_update(&self.store, RECORDS_KEY)
            .context("stored records could not be read, refusing to overwrite them")?;
        Ok(records)
    }

    fn current_settings(&self) -> UserSettings {
        load_or_else(&self.store, SETTINGS_KEY, || self.default_settings.clone())
    }
}
