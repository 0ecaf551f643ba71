//! Text for every user-facing [`Message`].
//!
//! Keeping all wording in one `match` means a new variant cannot be shown
//! without an explicit decision about its text, and parameters are
//! interpolated with their types checked at compile time.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === RECORD MESSAGES ===
            Message::RecordAdded { id, duration } => format!("Record {} added ({})", id, duration),
            Message::RecordRejected(count) => format!("Record not saved: {} problem(s) found", count),
            Message::RecordDeleted(id) => format!("Record {} deleted", id),
            Message::RecordNotFound(id) => format!("No record matches '{}'", id),
            Message::RecordsNotFound => "No records found".to_string(),
            Message::RecordsHeader(scope) => format!("Records for {}", scope),
            Message::RecordsCleared(count) => format!("{} record(s) removed", count),
            Message::ConfirmDeleteRecord(summary) => format!("Delete {}?", summary),
            Message::ConfirmClearRecords(count) => format!("Delete all {} record(s)? This cannot be undone", count),

            // === STATISTICS MESSAGES ===
            Message::StatsHeader(scope) => format!("Statistics for {}", scope),
            Message::MostActive(activity) => format!("Most time spent on: {}", activity),
            Message::NoActivity => "Nothing logged yet".to_string(),
            Message::TrackingSince(date) => format!("Tracking since {}", date),
            Message::WeekHeader { start, end } => format!("Week {} - {}", start, end),

            // === SETTINGS MESSAGES ===
            Message::SettingsHeader => "Current settings".to_string(),
            Message::SettingsUpdated => "Settings updated".to_string(),
            Message::InvalidTimezone(name) => format!("'{}' is not a known IANA timezone", name),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleStorage => "Storage settings".to_string(),
            Message::ConfigModuleDefaults => "Defaults for new users".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingData(data, format) => format!("Exporting {} as {}", data, format),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === STORAGE MESSAGES ===
            Message::StoreKeyMissing(key) => format!("Nothing stored under '{}', using defaults", key),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select the sections to configure".to_string(),
            Message::PromptDbFile => "Database file".to_string(),
            Message::PromptTimezone => "Timezone (IANA name)".to_string(),
            Message::PromptWeekStart => "First day of the week".to_string(),
            Message::PromptWeeklyGoal => "Weekly goal in minutes".to_string(),
            Message::PromptPreferredView => "Preferred view".to_string(),
            Message::PromptNotifications => "Enable notifications".to_string(),
            Message::PromptDate => "Date (YYYY-MM-DD)".to_string(),
            Message::PromptStartTime => "Start time (HH:MM)".to_string(),
            Message::PromptEndTime => "End time (HH:MM)".to_string(),
            Message::PromptActivity => "Activity".to_string(),
            Message::PromptDescription => "Description (optional)".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::DatabaseVersion(version) => format!("Database schema is at version {}", version),
        };
        write!(f, "{}", text)
    }
}
