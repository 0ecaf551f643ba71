#[derive(Debug, Clone)]
pub enum Message {
    // === RECORD MESSAGES ===
    RecordAdded { id: String, duration: String },
    RecordRejected(usize), // error count
    RecordDeleted(String), // id
    RecordNotFound(String), // id or prefix
    RecordsNotFound,
    RecordsHeader(String), // scope description
    RecordsCleared(usize), // count
    ConfirmDeleteRecord(String), // record summary
    ConfirmClearRecords(usize), // count

    // === STATISTICS MESSAGES ===
    StatsHeader(String), // scope description
    MostActive(String),  // activity label
    NoActivity,
    TrackingSince(String), // date of earliest record
    WeekHeader { start: String, end: String },

    // === SETTINGS MESSAGES ===
    SettingsHeader,
    SettingsUpdated,
    InvalidTimezone(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleStorage,
    ConfigModuleDefaults,

    // === EXPORT MESSAGES ===
    ExportingData(String, String), // data, format
    ExportCompleted(String),       // path

    // === STORAGE MESSAGES ===
    StoreKeyMissing(String), // key

    // === PROMPTS ===
    PromptSelectModules,
    PromptDbFile,
    PromptTimezone,
    PromptWeekStart,
    PromptWeeklyGoal,
    PromptPreferredView,
    PromptNotifications,
    PromptDate,
    PromptStartTime,
    PromptEndTime,
    PromptActivity,
    PromptDescription,

    // === GENERAL MESSAGES ===
    OperationCancelled,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationFailed(u32, String),  // version, error
    DatabaseVersion(u32),
}
