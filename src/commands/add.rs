//! Logs a new time record.
//!
//! Values not given as flags are asked for interactively. The draft goes
//! through the same validation as any other entry point, and every problem
//! is listed before the command fails.

use crate::{
    db::store::KeyValueStore,
    libs::{
        activity::ActivityType,
        formatter::{format_minutes, short_id},
        journal::{AddOutcome, Journal},
        messages::Message,
        record::TimeEntryFormData,
        week::Clock,
    },
    msg_bail_anyhow, msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Date of the activity (YYYY-MM-DD or "today")
    #[arg(short, long)]
    date: Option<String>,

    /// Start time (HH:MM)
    #[arg(short, long)]
    start: Option<String>,

    /// End time (HH:MM)
    #[arg(short, long)]
    end: Option<String>,

    /// Activity category, e.g. "work" or "extra-study"
    #[arg(short, long)]
    activity: Option<String>,

    /// Free-text note, at most 200 characters
    #[arg(long)]
    description: Option<String>,

    /// Fail instead of prompting for missing values
    #[arg(long)]
    no_input: bool,
}

pub fn cmd<S: KeyValueStore>(args: AddArgs, journal: &mut Journal<S>, clock: &dyn Clock) -> Result<()> {
    let calendar = journal.settings()?.calendar();
    let today = calendar.today(clock).format("%Y-%m-%d").to_string();
    let theme = ColorfulTheme::default();

    let date = match args.date {
        Some(date) if date.trim().eq_ignore_ascii_case("today") => today,
        Some(date) => date,
        None if args.no_input => today,
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptDate.to_string())
            .default(today)
            .interact_text()?,
    };

    let start_time = value_or_prompt(args.start, args.no_input, &theme, Message::PromptStartTime)?;
    let end_time = value_or_prompt(args.end, args.no_input, &theme, Message::PromptEndTime)?;

    let activity_type = match args.activity {
        Some(activity) => activity,
        None if args.no_input => String::new(),
        None => {
            let labels: Vec<String> = ActivityType::ALL
                .iter()
                .map(|activity| format!("{} ({})", activity.label(), activity.cli_name()))
                .collect();
            let index = Select::with_theme(&theme)
                .with_prompt(Message::PromptActivity.to_string())
                .items(&labels)
                .default(0)
                .interact()?;
            ActivityType::ALL[index].label().to_string()
        }
    };

    let description = match args.description {
        Some(description) => Some(description),
        None if args.no_input => None,
        None => {
            let text: String = Input::with_theme(&theme)
                .with_prompt(Message::PromptDescription.to_string())
                .allow_empty(true)
                .interact_text()?;
            Some(text)
        }
    };

    let draft = TimeEntryFormData {
        date,
        start_time,
        end_time,
        activity_type,
        description,
    };

    match journal.add(&draft, clock)? {
        AddOutcome::Added(record) => {
            msg_success!(Message::RecordAdded {
                id: short_id(&record.id).to_string(),
                duration: format_minutes(record.duration),
            });
            Ok(())
        }
        AddOutcome::Rejected(errors) => {
            for error in &errors {
                msg_error!(error);
            }
            msg_bail_anyhow!(Message::RecordRejected(errors.len()))
        }
    }
}

fn value_or_prompt(value: Option<String>, no_input: bool, theme: &ColorfulTheme, prompt: Message) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None if no_input => Ok(String::new()),
        None => Ok(Input::with_theme(theme).with_prompt(prompt.to_string()).interact_text()?),
    }
}
