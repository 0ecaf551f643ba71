//! The closed set of activity categories a time record can belong to.
//!
//! Every record carries one category label. The list is shared between the
//! validation rules and the statistics aggregator, and the stored labels are
//! part of the persisted data format: renaming or reordering variants is a
//! breaking change for existing data and for the statistics tie-break order.
//!
//! ## Labels
//!
//! Each category has two spellings:
//!
//! - **Stored label**: the string written to storage and shown in reports
//!   (e.g. `工作`).
//! - **CLI name**: an ASCII kebab-case alias accepted on the command line
//!   (e.g. `work`).
//!
//! Parsing accepts either spelling; serialization always writes the stored
//! label.
//!
//! ## Examples
//!
//! ```rust
//! use tally::libs::activity::ActivityType;
//!
//! let work: ActivityType = "work".parse().unwrap();
//! assert_eq!(work.label(), "工作");
//! assert_eq!("工作".parse::<ActivityType>().unwrap(), ActivityType::Work);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Activity category of a time record.
///
/// The derived ordering follows declaration order, which is also the order
/// used for statistics output and for breaking ties between categories with
/// equal totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActivityType {
    #[serde(rename = "工作", alias = "work")]
    Work,
    #[serde(rename = "學習", alias = "study")]
    Study,
    #[serde(rename = "聆聽", alias = "listening")]
    Listening,
    #[serde(rename = "品格塑造", alias = "character-building")]
    CharacterBuilding,
    #[serde(rename = "額外工作", alias = "extra-work")]
    ExtraWork,
    #[serde(rename = "額外學習", alias = "extra-study")]
    ExtraStudy,
    #[serde(rename = "額外聆聽", alias = "extra-listening")]
    ExtraListening,
    #[serde(rename = "額外品格塑造", alias = "extra-character-building")]
    ExtraCharacterBuilding,
}

impl ActivityType {
    /// All categories in declaration order.
    pub const ALL: [ActivityType; 8] = [
        ActivityType::Work,
        ActivityType::Study,
        ActivityType::Listening,
        ActivityType::CharacterBuilding,
        ActivityType::ExtraWork,
        ActivityType::ExtraStudy,
        ActivityType::ExtraListening,
        ActivityType::ExtraCharacterBuilding,
    ];

    /// The label written to storage.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Work => "工作",
            ActivityType::Study => "學習",
            ActivityType::Listening => "聆聽",
            ActivityType::CharacterBuilding => "品格塑造",
            ActivityType::ExtraWork => "額外工作",
            ActivityType::ExtraStudy => "額外學習",
            ActivityType::ExtraListening => "額外聆聽",
            ActivityType::ExtraCharacterBuilding => "額外品格塑造",
        }
    }

    /// The ASCII alias accepted on the command line.
    pub fn cli_name(&self) -> &'static str {
        match self {
            ActivityType::Work => "work",
            ActivityType::Study => "study",
            ActivityType::Listening => "listening",
            ActivityType::CharacterBuilding => "character-building",
            ActivityType::ExtraWork => "extra-work",
            ActivityType::ExtraStudy => "extra-study",
            ActivityType::ExtraListening => "extra-listening",
            ActivityType::ExtraCharacterBuilding => "extra-character-building",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown activity type '{0}'")]
pub struct UnknownActivity(pub String);

impl FromStr for ActivityType {
    type Err = UnknownActivity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ActivityType::ALL
            .into_iter()
            .find(|activity| activity.label() == s || activity.cli_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownActivity(s.to_string()))
    }
}
