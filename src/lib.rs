//! # Tally - personal time tracking
//!
//! A command-line utility for logging activity intervals by category and
//! reviewing where the time went.
//!
//! ## Features
//!
//! - **Time Records**: `HH:MM` start/end entries per day, validated field by field
//! - **Categories**: A fixed set of activity categories shared by validation and statistics
//! - **Week Boundaries**: Timezone-aware weeks starting on any configured weekday
//! - **Statistics**: Per-category totals, shares, most active category, daily breakdown
//! - **Weekly Goal**: Progress toward a configurable number of minutes per week
//! - **Data Export**: Records and statistics as CSV or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tally::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
