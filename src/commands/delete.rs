use crate::{
    db::store::KeyValueStore,
    libs::{formatter::format_minutes, journal::Journal, messages::Message},
    msg_bail_anyhow, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Record id or a unique prefix of it, as shown by `list`
    #[arg(required_unless_present = "all")]
    id: Option<String>,

    /// Delete every record
    #[arg(long)]
    all: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd<S: KeyValueStore>(args: DeleteArgs, journal: &mut Journal<S>) -> Result<()> {
    if args.all {
        let count = journal.records().len();
        if count == 0 {
            msg_warning!(Message::RecordsNotFound);
            return Ok(());
        }
        if !args.yes && !confirm(Message::ConfirmClearRecords(count))? {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
        let removed = journal.clear()?;
        msg_success!(Message::RecordsCleared(removed));
        return Ok(());
    }

    let prefix = args.id.unwrap_or_default();
    let Some(id) = journal.resolve_id(prefix.trim())? else {
        msg_bail_anyhow!(Message::RecordNotFound(prefix));
    };

    if !args.yes {
        if let Some(record) = journal.find(&id) {
            let summary = format!(
                "{} {}-{} {} ({})",
                record.date,
                record.start_time,
                record.end_time,
                record.activity_type,
                format_minutes(record.duration)
            );
            if !confirm(Message::ConfirmDeleteRecord(summary))? {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
        }
    }

    if journal.delete(&id)? {
        msg_success!(Message::RecordDeleted(id));
        Ok(())
    } else {
        msg_bail_anyhow!(Message::RecordNotFound(id))
    }
}

fn confirm(prompt: Message) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?)
}
