use crate::{
    commands::parse_date,
    db::store::KeyValueStore,
    libs::{journal::Journal, messages::Message, view::View, week::Clock},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct WeekArgs {
    /// Any day inside the week to show (YYYY-MM-DD or "today")
    #[arg(short, long, default_value = "today")]
    date: String,
}

pub fn cmd<S: KeyValueStore>(args: WeekArgs, journal: &mut Journal<S>, clock: &dyn Clock) -> Result<()> {
    let calendar = journal.settings()?.calendar();
    let date = parse_date(&args.date, &calendar, clock)?;

    let start = calendar.week_start(&date);
    let end = calendar.week_end(&date);
    msg_print!(
        Message::WeekHeader {
            start: start.format("%Y-%m-%d").to_string(),
            end: end.format("%Y-%m-%d").to_string(),
        },
        true
    );
    View::week(&calendar.week_dates(&date), &start, &end);
    Ok(())
}
