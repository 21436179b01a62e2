// ABOUTME: Tracker configuration - data root, derived dataset/report paths, and race date
// ABOUTME: Environment-only like the rest of the stack, with a command-line root override
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

//! # Tracker Configuration
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `HM_TRACKER_ROOT` | current directory | Root holding `data/` and `README.md` |
//! | `HM_RACE_DATE` | `2026-04-11` | Race day, `YYYY-MM-DD` |
//!
//! Goal thresholds are read by [`GoalConfig::from_env`].

use std::env;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use hm_core::constants::race::DEFAULT_RACE_DATE;
use hm_core::errors::AppError;
use hm_intelligence::{ConfigError as GoalConfigError, GoalConfig};
use thiserror::Error;

const RAW_DIR: &str = "data/raw";
const PROCESSED_DIR: &str = "data/processed";
const PARQUET_FILE: &str = "runs.parquet";
const CSV_FILE: &str = "runs.csv";
const README_FILE: &str = "README.md";

/// Tracker configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// `HM_RACE_DATE` is not a `YYYY-MM-DD` date
    #[error("Invalid race date '{0}', expected YYYY-MM-DD")]
    InvalidRaceDate(String),

    /// `HM_TRACKER_ROOT` is set but empty
    #[error("Invalid tracker root: {0}")]
    InvalidRoot(String),

    /// Goal threshold overrides are invalid
    #[error(transparent)]
    Goals(#[from] GoalConfigError),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}

/// Paths and settings shared by both entry points
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    root: PathBuf,
    race_date: NaiveDate,
    goals: GoalConfig,
}

impl TrackerConfig {
    /// Configuration rooted at `root` with default race date and thresholds
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            race_date: default_race_date(),
            goals: GoalConfig::default(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set but invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        let root = match env::var("HM_TRACKER_ROOT") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidRoot("HM_TRACKER_ROOT is empty".into()));
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => PathBuf::from("."),
        };

        let race_date = match env::var("HM_RACE_DATE") {
            Ok(val) => parse_race_date(&val)?,
            Err(_) => default_race_date(),
        };

        Ok(Self {
            root,
            race_date,
            goals: GoalConfig::from_env()?,
        })
    }

    /// Replace the root, e.g. from a `--root` flag
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Replace the race date
    #[must_use]
    pub const fn with_race_date(mut self, race_date: NaiveDate) -> Self {
        self.race_date = race_date;
        self
    }

    /// Data root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Race day
    #[must_use]
    pub const fn race_date(&self) -> NaiveDate {
        self.race_date
    }

    /// Goal thresholds
    #[must_use]
    pub const fn goals(&self) -> &GoalConfig {
        &self.goals
    }

    /// Directory holding one subdirectory of FIT files per category
    #[must_use]
    pub fn raw_dir(&self) -> PathBuf {
        self.root.join(RAW_DIR)
    }

    /// Directory holding the dataset files
    #[must_use]
    pub fn processed_dir(&self) -> PathBuf {
        self.root.join(PROCESSED_DIR)
    }

    /// Columnar dataset file
    #[must_use]
    pub fn parquet_path(&self) -> PathBuf {
        self.processed_dir().join(PARQUET_FILE)
    }

    /// Plain-text dataset file
    #[must_use]
    pub fn csv_path(&self) -> PathBuf {
        self.processed_dir().join(CSV_FILE)
    }

    /// Document carrying the goal-status markers
    #[must_use]
    pub fn readme_path(&self) -> PathBuf {
        self.root.join(README_FILE)
    }
}

fn default_race_date() -> NaiveDate {
    let (year, month, day) = DEFAULT_RACE_DATE;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn parse_race_date(value: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ConfigError::InvalidRaceDate(value.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_race_date() {
        assert_eq!(
            default_race_date(),
            NaiveDate::from_ymd_opt(2026, 4, 11).unwrap()
        );
    }

    #[test]
    fn test_parse_race_date() {
        assert_eq!(
            parse_race_date(" 2026-10-04 ").unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 4).unwrap()
        );
        assert_eq!(
            parse_race_date("04/10/2026"),
            Err(ConfigError::InvalidRaceDate("04/10/2026".into()))
        );
    }

    #[test]
    fn test_derived_paths() {
        let config = TrackerConfig::new("/tmp/hm");
        assert_eq!(config.raw_dir(), PathBuf::from("/tmp/hm/data/raw"));
        assert_eq!(
            config.parquet_path(),
            PathBuf::from("/tmp/hm/data/processed/runs.parquet")
        );
        assert_eq!(
            config.csv_path(),
            PathBuf::from("/tmp/hm/data/processed/runs.csv")
        );
        assert_eq!(config.readme_path(), PathBuf::from("/tmp/hm/README.md"));
    }
}
