//! Export of records and statistics to files.
//!
//! Two data sets can be exported:
//!
//! - **Records**: every stored record, newest first.
//! - **Stats**: totals and shares per category for all records, the most
//!   active category and a per-day breakdown.
//!
//! Each can be written as CSV (one flat table) or pretty-printed JSON. When
//! no output path is given a timestamped file name is generated in the
//! current directory.

use crate::libs::activity::ActivityType;
use crate::libs::formatter::{format_minutes, FormattedRecord};
use crate::libs::record::TimeRecord;
use crate::libs::statistics::{aggregate, daily_breakdown, most_active_category, percentage_of};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    Records,
    Stats,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ExportCategory {
    pub activity: String,
    pub minutes: u32,
    pub duration: String,
    pub percent: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ExportDay {
    pub date: String,
    pub minutes: u32,
    pub duration: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ExportStats {
    pub categories: Vec<ExportCategory>,
    pub total_minutes: u32,
    pub total: String,
    pub most_active: Option<String>,
    pub days: Vec<ExportDay>,
}

impl ExportStats {
    pub fn from_records(records: &[TimeRecord]) -> Self {
        let statistics = aggregate(records);
        let percentages = percentage_of(&statistics);

        let categories = ActivityType::ALL
            .into_iter()
            .map(|activity| {
                let minutes = statistics.minutes(activity);
                ExportCategory {
                    activity: activity.label().to_string(),
                    minutes,
                    duration: format_minutes(minutes),
                    percent: percentages.get(&activity).copied(),
                }
            })
            .collect();

        let days = daily_breakdown(records)
            .into_iter()
            .map(|(date, day)| ExportDay {
                date,
                minutes: day.total,
                duration: format_minutes(day.total),
            })
            .collect();

        ExportStats {
            categories,
            total_minutes: statistics.total,
            total: format_minutes(statistics.total),
            most_active: most_active_category(&statistics).map(|activity| activity.label().to_string()),
            days,
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, now: DateTime<Utc>) -> Self {
        let default_name = format!("tally_export_{}", now.format("%Y%m%d_%H%M%S"));
        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `data` computed from `records` and returns the output path.
    pub fn export(&self, data: ExportData, records: &[TimeRecord]) -> Result<&Path> {
        match data {
            ExportData::Records => self.export_records(records)?,
            ExportData::Stats => self.export_stats(&ExportStats::from_records(records))?,
        }
        tracing::info!(path = %self.output_path.display(), ?data, "export written");
        Ok(&self.output_path)
    }

    fn export_records(&self, records: &[TimeRecord]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;
                wtr.write_record(["ID", "Date", "Start", "End", "Minutes", "Duration", "Activity", "Description", "Created At"])?;
                for record in records {
                    let formatted = FormattedRecord::from(record);
                    wtr.write_record([
                        record.id.clone(),
                        formatted.date,
                        formatted.start,
                        formatted.end,
                        record.duration.to_string(),
                        formatted.duration,
                        formatted.activity,
                        formatted.description,
                        record.created_at.to_rfc3339(),
                    ])?;
                }
                wtr.flush()?;
            }
            ExportFormat::Json => self.write_json(records)?,
        }
        Ok(())
    }

    fn export_stats(&self, stats: &ExportStats) -> Result<()> {
        match self.format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;
                wtr.write_record(["Activity", "Minutes", "Duration", "Percent"])?;
                for category in &stats.categories {
                    wtr.write_record([
                        category.activity.clone(),
                        category.minutes.to_string(),
                        category.duration.clone(),
                        category.percent.map(|p| p.to_string()).unwrap_or_default(),
                    ])?;
                }
                wtr.write_record(["TOTAL".to_string(), stats.total_minutes.to_string(), stats.total.clone(), String::new()])?;
                wtr.flush()?;
            }
            ExportFormat::Json => self.write_json(stats)?,
        }
        Ok(())
    }

    fn write_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }
}
