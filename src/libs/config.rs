//! Application configuration.
//!
//! The configuration file holds installation-level choices that are not part
//! of the user's tracked data: where the database lives, and which settings a
//! brand-new user starts with. It is read once at startup and passed
//! explicitly to whatever needs it.
//!
//! ## File Location
//!
//! `config.json` lives in the application data directory resolved by
//! [`DataStorage`]:
//! - **Override**: `$TALLY_DATA_DIR/config.json`
//! - **Windows**: `%LOCALAPPDATA%\tally\tally\config.json`
//! - **macOS**: `~/Library/Application Support/tally/tally/config.json`
//! - **Linux**: `~/.local/share/tally/tally/config.json`
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use tally::libs::config::Config;
//!
//! let config = Config::read()?;
//! let settings = config.default_settings();
//! println!("New users start in {}", settings.timezone);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::settings::{UserSettings, ViewMode};
use crate::libs::week::parse_timezone;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_DB_FILE_NAME: &str = "tally.db";

/// A configurable section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Where records and settings are persisted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// Database file name, relative to the data directory unless absolute.
    pub db_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            db_file: DEFAULT_DB_FILE_NAME.to_string(),
        }
    }
}

/// Root configuration object.
///
/// Every section is optional; a missing section means "use the built-in
/// defaults", which keeps hand-edited files short.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,

    /// Settings seeded into the store the first time a user's settings are read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<UserSettings>,
}

impl Config {
    /// Reads the configuration from the default data directory.
    ///
    /// A missing file is not an error and yields the default configuration.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Absolute path of the database file.
    pub fn db_path(&self, storage: &DataStorage) -> Result<PathBuf> {
        let db_file = self.storage.clone().unwrap_or_default().db_file;
        let path = PathBuf::from(&db_file);
        if path.is_absolute() {
            return Ok(path);
        }
        storage.get_path(&db_file)
    }

    /// Settings a user starts with before changing anything.
    pub fn default_settings(&self) -> UserSettings {
        self.defaults.clone().unwrap_or_default()
    }

    /// Runs the interactive setup wizard, starting from the saved configuration.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "storage".to_string(),
                name: "Storage".to_string(),
            },
            ConfigModule {
                key: "defaults".to_string(),
                name: "Default settings".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "storage" => {
                    let default = config.storage.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleStorage);
                    config.storage = Some(StorageConfig {
                        db_file: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDbFile.to_string())
                            .default(default.db_file)
                            .interact_text()?,
                    });
                }
                "defaults" => {
                    msg_print!(Message::ConfigModuleDefaults);
                    config.defaults = Some(prompt_settings(&config.default_settings())?);
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

/// Prompts for every settings field, pre-filled with `current`.
pub fn prompt_settings(current: &UserSettings) -> Result<UserSettings> {
    let theme = ColorfulTheme::default();

    let timezone: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTimezone.to_string())
        .default(current.timezone.clone())
        .validate_with(|input: &String| -> Result<(), String> {
            parse_timezone(input)
                .map(|_| ())
                .ok_or_else(|| Message::InvalidTimezone(input.clone()).to_string())
        })
        .interact_text()?;

    let weekdays = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];
    let week_start_day = Select::with_theme(&theme)
        .with_prompt(Message::PromptWeekStart.to_string())
        .items(&weekdays)
        .default(usize::from(current.week_start_day.min(6)))
        .interact()? as u8;

    let weekly_goal: u32 = Input::with_theme(&theme)
        .with_prompt(Message::PromptWeeklyGoal.to_string())
        .default(current.weekly_goal)
        .interact_text()?;

    let views = [ViewMode::Day, ViewMode::Week, ViewMode::Month];
    let view_index = Select::with_theme(&theme)
        .with_prompt(Message::PromptPreferredView.to_string())
        .items(&views)
        .default(views.iter().position(|view| *view == current.preferred_view).unwrap_or(1))
        .interact()?;

    let notifications = dialoguer::Confirm::with_theme(&theme)
        .with_prompt(Message::PromptNotifications.to_string())
        .default(current.notifications)
        .interact()?;

    Ok(UserSettings {
        timezone: timezone.trim().to_string(),
        week_start_day,
        weekly_goal,
        preferred_view: views[view_index],
        notifications,
    })
}
