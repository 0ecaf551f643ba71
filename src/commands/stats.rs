use crate::{
    commands::parse_date,
    db::store::KeyValueStore,
    libs::{
        journal::Journal,
        messages::Message,
        statistics::{aggregate, daily_breakdown, most_active_category, percentage_of, TimeStatistics},
        view::View,
        week::Clock,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;
use std::collections::BTreeMap;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Statistics for the current week with goal progress (the default)
    #[arg(short, long, conflicts_with_all = ["date", "all"])]
    week: bool,

    /// Statistics for a single date (YYYY-MM-DD or "today")
    #[arg(short, long, conflicts_with = "all")]
    date: Option<String>,

    /// Statistics over every record
    #[arg(short, long)]
    all: bool,
}

pub fn cmd<S: KeyValueStore>(args: StatsArgs, journal: &mut Journal<S>, clock: &dyn Clock) -> Result<()> {
    if args.week {
        return weekly(journal, clock);
    }

    if let Some(date) = &args.date {
        let calendar = journal.settings()?.calendar();
        let date = parse_date(date, &calendar, clock)?;
        let statistics = aggregate(&journal.for_date(date));
        msg_print!(Message::StatsHeader(date.format("%Y-%m-%d").to_string()), true);
        show(&statistics);
        return Ok(());
    }

    if args.all {
        let records = journal.records();
        let statistics = aggregate(&records);
        msg_print!(Message::StatsHeader("all dates".to_string()), true);
        if let Some(earliest) = journal.earliest() {
            msg_info!(Message::TrackingSince(earliest.date));
        }
        show(&statistics);
        daily(&daily_breakdown(&records));
        return Ok(());
    }

    weekly(journal, clock)
}

fn weekly<S: KeyValueStore>(journal: &mut Journal<S>, clock: &dyn Clock) -> Result<()> {
    let summary = journal.weekly_summary(clock)?;
    msg_print!(
        Message::WeekHeader {
            start: summary.start.format("%Y-%m-%d").to_string(),
            end: summary.end.format("%Y-%m-%d").to_string(),
        },
        true
    );
    show(&summary.statistics);
    daily(&summary.daily);
    View::goal(&summary.goal);
    Ok(())
}

fn show(statistics: &TimeStatistics) {
    if statistics.is_empty() {
        msg_info!(Message::NoActivity);
        return;
    }
    View::statistics(statistics, &percentage_of(statistics));
    if let Some(activity) = most_active_category(statistics) {
        msg_info!(Message::MostActive(activity.label().to_string()));
    }
}

fn daily(days: &BTreeMap<String, TimeStatistics>) {
    if !days.is_empty() {
        View::daily(days);
    }
}
