//! Command-line interface.
//!
//! Every subcommand receives the already-opened [`Journal`] and a [`Clock`],
//! so commands never open storage or read the system time on their own.

pub mod add;
pub mod delete;
pub mod export;
pub mod init;
pub mod list;
pub mod settings;
pub mod stats;
pub mod week;

use crate::{
    db::store::{KeyValueStore, SqliteStore},
    libs::{config::Config, journal::Journal, week::{Clock, SystemClock, WeekCalendar}},
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Log a time record")]
    Add(add::AddArgs),
    #[command(about = "List time records")]
    List(list::ListArgs),
    #[command(about = "Delete a time record", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Show time statistics")]
    Stats(stats::StatsArgs),
    #[command(about = "Show the days and boundaries of a week")]
    Week(week::WeekArgs),
    #[command(about = "Show or change user settings")]
    Settings(settings::SettingsArgs),
    #[command(about = "Export records or statistics")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();

        if let Commands::Init(args) = cli.command {
            return init::cmd(args);
        }

        let config = Config::read()?;
        let store = SqliteStore::new(&config)?;
        let mut journal = Journal::with_default_settings(store, config.default_settings());
        cli.run(&mut journal, &SystemClock)
    }

    fn run<S: KeyValueStore>(self, journal: &mut Journal<S>, clock: &dyn Clock) -> Result<()> {
        match self.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args, journal, clock),
            Commands::List(args) => list::cmd(args, journal, clock),
            Commands::Delete(args) => delete::cmd(args, journal),
            Commands::Stats(args) => stats::cmd(args, journal, clock),
            Commands::Week(args) => week::cmd(args, journal, clock),
            Commands::Settings(args) => settings::cmd(args, journal),
            Commands::Export(args) => export::cmd(args, journal, clock),
        }
    }
}

/// Parses `YYYY-MM-DD`, or `today` in the calendar's timezone.
pub(crate) fn parse_date(date_str: &str, calendar: &WeekCalendar, clock: &dyn Clock) -> Result<NaiveDate> {
    if date_str.trim().eq_ignore_ascii_case("today") {
        Ok(calendar.today(clock))
    } else {
        NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", date_str))
    }
}
