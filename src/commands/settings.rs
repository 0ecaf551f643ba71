use crate::{
    db::store::KeyValueStore,
    libs::{
        config::prompt_settings,
        formatter::format_minutes,
        journal::Journal,
        messages::Message,
        settings::{SettingsPatch, UserSettings, ViewMode},
        week::{parse_timezone, week_start_day_from_index},
    },
    msg_bail_anyhow, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use prettytable::{row, Table};

#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// IANA timezone, e.g. "Asia/Taipei"
    #[arg(long)]
    timezone: Option<String>,

    /// First day of the week, 0 = Sunday … 6 = Saturday
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=6))]
    week_start: Option<u8>,

    /// Weekly goal in minutes
    #[arg(long)]
    goal: Option<u32>,

    /// View used by `list` when no scope is given
    #[arg(long, value_enum)]
    view: Option<ViewMode>,

    /// Turn notifications on or off
    #[arg(long)]
    notifications: Option<bool>,

    /// Edit every setting through prompts
    #[arg(short, long)]
    interactive: bool,
}

pub fn cmd<S: KeyValueStore>(args: SettingsArgs, journal: &mut Journal<S>) -> Result<()> {
    let current = journal.settings()?;

    let patch = if args.interactive {
        let edited = prompt_settings(&current)?;
        SettingsPatch {
            timezone: Some(edited.timezone),
            week_start_day: Some(edited.week_start_day),
            weekly_goal: Some(edited.weekly_goal),
            preferred_view: Some(edited.preferred_view),
            notifications: Some(edited.notifications),
        }
    } else {
        SettingsPatch {
            timezone: args.timezone,
            week_start_day: args.week_start,
            weekly_goal: args.goal,
            preferred_view: args.view,
            notifications: args.notifications,
        }
    };

    if patch.is_empty() {
        msg_print!(Message::SettingsHeader, true);
        show(&current);
        return Ok(());
    }

    if let Some(timezone) = &patch.timezone {
        if parse_timezone(timezone).is_none() {
            msg_bail_anyhow!(Message::InvalidTimezone(timezone.clone()));
        }
    }

    let updated = journal.update_settings(&patch)?;
    msg_success!(Message::SettingsUpdated);
    show(&updated);
    Ok(())
}

fn show(settings: &UserSettings) {
    let week_start = week_start_day_from_index(settings.week_start_day)
        .map(|day| format!("{} ({})", day, settings.week_start_day))
        .unwrap_or_else(|| settings.week_start_day.to_string());

    let mut table = Table::new();
    table.add_row(row!["SETTING", "VALUE"]);
    table.add_row(row!["Timezone", settings.timezone]);
    table.add_row(row!["Week starts on", week_start]);
    table.add_row(row!["Weekly goal", format_minutes(settings.weekly_goal)]);
    table.add_row(row!["Preferred view", settings.preferred_view]);
    table.add_row(row!["Notifications", settings.notifications]);
    table.printstd();
}
