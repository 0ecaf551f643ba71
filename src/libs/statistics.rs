//! Per-category time statistics over a list of records.
//!
//! All functions are pure: they read the records they are given and return
//! freshly built values. Nothing is cached; callers re-aggregate whenever
//! the record list changes, which is cheap at the sizes a personal log
//! reaches.
//!
//! ## Unknown Categories
//!
//! Records whose stored label is not part of [`ActivityType::ALL`] are
//! skipped without error. They contribute neither to a category nor to the
//! grand total, so statistics stay consistent when older code reads data
//! written by a newer version.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::Utc;
//! use tally::libs::activity::ActivityType;
//! use tally::libs::record::TimeRecord;
//! use tally::libs::statistics::{aggregate, most_active_category, percentage_of};
//!
//! let now = Utc::now();
//! let records = vec![
//!     TimeRecord::new("2025-06-26", "09:00", "10:00", 60, ActivityType::Work, None, now),
//!     TimeRecord::new("2025-06-26", "10:00", "10:30", 30, ActivityType::Study, None, now),
//! ];
//!
//! let stats = aggregate(&records);
//! assert_eq!(stats.total, 90);
//! assert_eq!(percentage_of(&stats)[&ActivityType::Work], 67);
//! assert_eq!(most_active_category(&stats), Some(ActivityType::Work));
//! ```

use crate::libs::activity::ActivityType;
use crate::libs::record::TimeRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Accumulated minutes per category plus the grand total.
///
/// `by_category` always holds every category, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeStatistics {
    pub by_category: BTreeMap<ActivityType, u32>,
    pub total: u32,
}

impl Default for TimeStatistics {
    fn default() -> Self {
        TimeStatistics {
            by_category: ActivityType::ALL.into_iter().map(|activity| (activity, 0)).collect(),
            total: 0,
        }
    }
}

impl TimeStatistics {
    /// Minutes logged for `activity`.
    pub fn minutes(&self, activity: ActivityType) -> u32 {
        self.by_category.get(&activity).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    fn add(&mut self, record: &TimeRecord) {
        let Some(activity) = record.category() else {
            return;
        };
        let minutes = self.by_category.entry(activity).or_insert(0);
        *minutes = minutes.saturating_add(record.duration);
        self.total = self.total.saturating_add(record.duration);
    }
}

/// Progress toward a weekly goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalProgress {
    pub achieved: u32,
    pub goal: u32,
    pub remaining: u32,
    pub percent: u32,
}

/// Folds `records` into per-category totals.
pub fn aggregate(records: &[TimeRecord]) -> TimeStatistics {
    let mut statistics = TimeStatistics::default();
    for record in records {
        statistics.add(record);
    }
    statistics
}

/// Share of the grand total per category, rounded to whole percent.
///
/// Returns an empty map when nothing has been logged, so "no data" is
/// distinguishable from "0%".
pub fn percentage_of(statistics: &TimeStatistics) -> BTreeMap<ActivityType, u32> {
    if statistics.total == 0 {
        return BTreeMap::new();
    }
    let total = f64::from(statistics.total);
    statistics
        .by_category
        .iter()
        .map(|(activity, minutes)| (*activity, (100.0 * f64::from(*minutes) / total).round() as u32))
        .collect()
}

/// The category with the largest total.
///
/// Ties go to the category declared first. `None` when every total is zero.
pub fn most_active_category(statistics: &TimeStatistics) -> Option<ActivityType> {
    let mut best: Option<(ActivityType, u32)> = None;
    for (activity, minutes) in &statistics.by_category {
        if *minutes == 0 {
            continue;
        }
        match best {
            Some((_, best_minutes)) if *minutes <= best_minutes => {}
            _ => best = Some((*activity, *minutes)),
        }
    }
    best.map(|(activity, _)| activity)
}

/// Statistics partitioned by each record's stored date string.
///
/// A date only appears if at least one of its records has a known category.
pub fn daily_breakdown(records: &[TimeRecord]) -> BTreeMap<String, TimeStatistics> {
    let mut days: BTreeMap<String, TimeStatistics> = BTreeMap::new();
    for record in records.iter().filter(|record| record.category().is_some()) {
        days.entry(record.date.clone()).or_default().add(record);
    }
    days
}

/// How far `achieved` minutes get toward a `goal` in minutes.
///
/// The percentage is capped at 100; a zero goal counts as met.
pub fn goal_progress(achieved: u32, goal: u32) -> GoalProgress {
    let percent = if goal == 0 {
        100
    } else {
        ((100.0 * f64::from(achieved) / f64::from(goal)).round() as u32).min(100)
    };
    GoalProgress {
        achieved,
        goal,
        remaining: goal.saturating_sub(achieved),
        percent,
    }
}
