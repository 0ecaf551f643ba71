use crate::{
    db::store::KeyValueStore,
    libs::{
        export::{ExportData, ExportFormat, Exporter},
        journal::Journal,
        messages::Message,
        week::Clock,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// What to export
    #[arg(value_enum, default_value = "records")]
    data: ExportData,

    /// Output file format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file path (defaults to a timestamped name in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd<S: KeyValueStore>(args: ExportArgs, journal: &mut Journal<S>, clock: &dyn Clock) -> Result<()> {
    msg_info!(Message::ExportingData(format!("{:?}", args.data), format!("{:?}", args.format)));

    let exporter = Exporter::new(args.format, args.output, clock.now());
    let path = exporter.export(args.data, &journal.records())?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
