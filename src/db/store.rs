//! Key-value persistence for JSON documents.
//!
//! The whole record list and the user settings are each stored as one JSON
//! document under a fixed key. Reading is forgiving: a missing key, a failed
//! read or a document that no longer deserializes all produce the type's
//! default value, so a damaged store never stops the application from
//! starting. Read-modify-write cycles use [`load_for_update`] instead, which
//! fails rather than replace a document it cannot read. Writes report their
//! errors.
//!
//! ## Implementations
//!
//! - [`SqliteStore`]: `kv_store` table in the application database.
//! - [`MemoryStore`]: a plain map, for tests and throwaway sessions.
//!
//! ## Usage
//!
//! ```rust
//! use tally::db::store::{load, save, MemoryStore};
//! use tally::libs::settings::UserSettings;
//!
//! let mut store = MemoryStore::default();
//! let settings: UserSettings = load(&store, "user_settings");
//! assert_eq!(settings, UserSettings::default());
//!
//! save(&mut store, "user_settings", &settings)?;
//! # Ok::<(), tally::db::store::StoreError>(())
//! ```

use crate::db::db::Db;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Key holding the JSON array of time records.
pub const RECORDS_KEY: &str = "time_records";
/// Key holding the JSON user settings object.
pub const SETTINGS_KEY: &str = "user_settings";

const SELECT_VALUE: &str = "SELECT value FROM kv_store WHERE key = ?1";
const UPSERT_VALUE: &str = "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, CURRENT_TIMESTAMP)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP";
const DELETE_VALUE: &str = "DELETE FROM kv_store WHERE key = ?1";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// String-keyed storage of serialized documents.
pub trait KeyValueStore {
    fn get_raw(&self, key: &str) -> StoreResult<Option<String>>;
    fn set_raw(&mut self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get_raw(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_raw(key)
    }

    fn set_raw(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_raw(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}

/// Reads and deserializes `key`, falling back to `T::default()`.
pub fn load<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    load_or_else(store, key, T::default)
}

/// Reads and deserializes `key`, falling back to `fallback()`.
pub fn load_or_else<T, S, F>(store: &S, key: &str, fallback: F) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
    F: FnOnce() -> T,
{
    match store.get_raw(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "stored value does not deserialize, using default");
                fallback()
            }
        },
        Ok(None) => {
            msg_debug!(Message::StoreKeyMissing(key.to_string()));
            fallback()
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read stored value, using default");
            fallback()
        }
    }
}

/// Reads and deserializes `key` ahead of a write.
///
/// Only a missing key yields `T::default()`. Read and parse failures are
/// returned, so a document that cannot be understood is never overwritten.
pub fn load_for_update<T, S>(store: &S, key: &str) -> StoreResult<T>
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    match store.get_raw(key)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(T::default()),
    }
}

/// Serializes `value` as JSON under `key`.
pub fn save<T, S>(store: &mut S, key: &str, value: &T) -> StoreResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set_raw(key, &raw)
}

/// Key-value store backed by the SQLite `kv_store` table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens the database configured in `config`.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::from_db(Db::new(config)?))
    }

    pub fn from_db(db: Db) -> Self {
        Self { conn: db.conn }
    }
}

impl KeyValueStore for SqliteStore {
    fn get_raw(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(SELECT_VALUE, params![key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set_raw(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(UPSERT_VALUE, params![key, value])?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.conn.execute(DELETE_VALUE, params![key])?;
        Ok(())
    }
}

/// In-memory key-value store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_raw(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
