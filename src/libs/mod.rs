//! Core library modules.
//!
//! ## Features
//!
//! - **Domain Logic**: categories, duration calculation, validation, week
//!   boundaries and statistics, all pure and free of I/O
//! - **Record Ownership**: the journal that reads and writes records and
//!   settings through the store
//! - **Infrastructure**: configuration, data directory resolution, messages
//! - **Presentation**: formatting, console tables, file export
//!
//! ## Usage
//!
//! ```rust
//! use tally::libs::duration::calculate_duration;
//! use tally::libs::statistics::aggregate;
//!
//! assert_eq!(calculate_duration("08:15", "09:00").duration, 45);
//! assert_eq!(aggregate(&[]).total, 0);
//! ```

pub mod activity;
pub mod config;
pub mod data_storage;
pub mod duration;
pub mod export;
pub mod formatter;
pub mod journal;
pub mod messages;
pub mod record;
pub mod settings;
pub mod statistics;
pub mod validation;
pub mod view;
pub mod week;
