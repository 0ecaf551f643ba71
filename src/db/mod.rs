//! Persistence layer.
//!
//! Records and settings are kept as JSON documents in a key-value table of a
//! local SQLite database. The schema is versioned by the migrations module.
//!
//! ## Usage
//!
//! ```rust
//! use tally::db::{db::Db, store::{KeyValueStore, SqliteStore}};
//!
//! let mut store = SqliteStore::from_db(Db::in_memory()?);
//! store.set_raw("greeting", "\"hello\"")?;
//! assert_eq!(store.get_raw("greeting")?, Some("\"hello\"".to_string()));
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection setup: opens the database file and applies migrations.
pub mod db;

/// Versioned schema changes and their history.
pub mod migrations;

/// Key-value document storage with default-on-failure reads.
pub mod store;
