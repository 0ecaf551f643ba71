use super::activity::ActivityType;
use super::formatter::{format_minutes, format_percent, FormattedRecord};
use super::record::TimeRecord;
use super::statistics::{GoalProgress, TimeStatistics};
use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use prettytable::{row, Table};
use std::collections::BTreeMap;

pub struct View {}

impl View {
    pub fn records(records: &[TimeRecord]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "START", "END", "DURATION", "ACTIVITY", "DESCRIPTION"]);
        for record in records.iter().map(FormattedRecord::from) {
            table.add_row(row![
                record.short_id,
                record.date,
                record.start,
                record.end,
                record.duration,
                record.activity,
                record.description
            ]);
        }
        table.printstd();
    }

    pub fn statistics(statistics: &TimeStatistics, percentages: &BTreeMap<ActivityType, u32>) {
        let mut table = Table::new();

        table.add_row(row!["ACTIVITY", "TIME", "SHARE"]);
        for (activity, minutes) in &statistics.by_category {
            let share = percentages.get(activity).map(|p| format_percent(*p)).unwrap_or_else(|| "-".to_string());
            table.add_row(row![activity, format_minutes(*minutes), share]);
        }
        table.add_row(row![b -> "TOTAL", b -> format_minutes(statistics.total), ""]);
        table.printstd();
    }

    pub fn daily(daily: &BTreeMap<String, TimeStatistics>) {
        let mut table = Table::new();

        table.add_row(row!["DATE", "TIME"]);
        for (date, statistics) in daily {
            table.add_row(row![date, format_minutes(statistics.total)]);
        }
        table.printstd();
    }

    pub fn goal(goal: &GoalProgress) {
        let mut table = Table::new();

        table.add_row(row!["GOAL", "LOGGED", "REMAINING", "PROGRESS"]);
        table.add_row(row![
            format_minutes(goal.goal),
            format_minutes(goal.achieved),
            format_minutes(goal.remaining),
            format_percent(goal.percent)
        ]);
        table.printstd();
    }

    pub fn week(dates: &[NaiveDate; 7], start: &DateTime<Tz>, end: &DateTime<Tz>) {
        let mut table = Table::new();

        table.add_row(row!["DAY", "DATE"]);
        for date in dates {
            table.add_row(row![date.format("%A"), date.format("%Y-%m-%d")]);
        }
        table.add_row(row![b -> "START", start.format("%Y-%m-%d %H:%M:%S %Z")]);
        table.add_row(row![b -> "END", end.format("%Y-%m-%d %H:%M:%S%.3f %Z")]);
        table.printstd();
    }
}
