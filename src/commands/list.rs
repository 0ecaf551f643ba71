use crate::{
    commands::parse_date,
    db::store::KeyValueStore,
    libs::{journal::Journal, messages::Message, settings::ViewMode, view::View, week::Clock},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show records of a single date (YYYY-MM-DD or "today")
    #[arg(short, long, conflicts_with_all = ["week", "month", "all"])]
    date: Option<String>,

    /// Show records of the current week
    #[arg(short, long, conflicts_with_all = ["month", "all"])]
    week: bool,

    /// Show records of the current month
    #[arg(short, long, conflicts_with = "all")]
    month: bool,

    /// Show every record
    #[arg(short, long)]
    all: bool,
}

pub fn cmd<S: KeyValueStore>(args: ListArgs, journal: &mut Journal<S>, clock: &dyn Clock) -> Result<()> {
    let settings = journal.settings()?;
    let calendar = settings.calendar();
    let today = calendar.today(clock);

    // Without a flag the preferred view decides the scope.
    let view = if args.week {
        Some(ViewMode::Week)
    } else if args.month {
        Some(ViewMode::Month)
    } else if args.all {
        None
    } else if args.date.is_some() {
        Some(ViewMode::Day)
    } else {
        Some(settings.preferred_view)
    };

    let (scope, records) = match view {
        Some(ViewMode::Day) => {
            let date = match &args.date {
                Some(date) => parse_date(date, &calendar, clock)?,
                None => today,
            };
            (date.format("%Y-%m-%d").to_string(), journal.for_date(date))
        }
        Some(ViewMode::Week) => {
            let dates = calendar.week_dates(&today);
            let scope = format!("{} - {}", dates[0].format("%Y-%m-%d"), dates[6].format("%Y-%m-%d"));
            (scope, journal.for_week(&calendar, &today))
        }
        Some(ViewMode::Month) => (today.format("%B %Y").to_string(), journal.for_month(today)),
        None => ("all dates".to_string(), journal.records()),
    };

    if records.is_empty() {
        msg_info!(Message::RecordsNotFound);
        return Ok(());
    }

    msg_print!(Message::RecordsHeader(scope), true);
    View::records(&records);
    Ok(())
}
