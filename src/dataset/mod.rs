// ABOUTME: Run dataset persistence - sorted record set stored as Parquet plus a CSV copy
// ABOUTME: Writes go to temporary siblings and are renamed into place once both succeed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

//! # Run Dataset
//!
//! The dataset is rebuilt wholesale on every ingestion. Loading prefers the
//! columnar file, falls back to the CSV copy, and treats a missing dataset as
//! the valid empty state.

/// Plain-text serialization
pub mod csv;
/// Columnar serialization
pub mod parquet;

use std::fs;
use std::path::{Path, PathBuf};

use hm_core::errors::{AppError, AppResult};
use hm_core::models::RunRecord;
use tracing::{info, warn};

use crate::config::TrackerConfig;

const TEMP_SUFFIX: &str = "tmp";

/// Locations of the two dataset files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    /// Columnar file
    pub parquet: PathBuf,
    /// Plain-text file
    pub csv: PathBuf,
}

impl DatasetPaths {
    /// Paths derived from the tracker configuration
    #[must_use]
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self {
            parquet: config.parquet_path(),
            csv: config.csv_path(),
        }
    }

    /// Both files in `dir` under their standard names
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            parquet: dir.join("runs.parquet"),
            csv: dir.join("runs.csv"),
        }
    }
}

/// Where a loaded dataset came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSource {
    /// Columnar file
    Parquet,
    /// CSV fallback
    Csv,
    /// Neither file exists
    Empty,
}

/// Sorted collection of run records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunDataset {
    records: Vec<RunRecord>,
}

impl RunDataset {
    /// Build a dataset, sorting by date, category, then source path
    #[must_use]
    pub fn new(mut records: Vec<RunRecord>) -> Self {
        records.sort_by(|a, b| {
            a.date()
                .cmp(&b.date())
                .then_with(|| a.run_type().cmp(&b.run_type()))
                .then_with(|| a.source_file().cmp(b.source_file()))
        });
        Self { records }
    }

    /// Records in dataset order
    #[must_use]
    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    /// Take the records
    #[must_use]
    pub fn into_records(self) -> Vec<RunRecord> {
        self.records
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when there are no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write both files, replacing any previous dataset
    ///
    /// # Errors
    ///
    /// Returns a storage or serialization error. A serialization failure
    /// modifies neither target. If the CSV cannot be moved into place after
    /// the Parquet file was, the Parquet file is already new and the CSV
    /// keeps its previous contents; its temporary file is removed.
    pub fn save(&self, paths: &DatasetPaths) -> AppResult<()> {
        for path in [&paths.parquet, &paths.csv] {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::storage(format!("Failed to create {}: {e}", parent.display()))
                        .with_source(e)
                })?;
            }
        }

        let parquet_tmp = temp_sibling(&paths.parquet);
        let csv_tmp = temp_sibling(&paths.csv);

        let written = parquet::write(&parquet_tmp, &self.records)
            .and_then(|()| csv::write(&csv_tmp, &self.records));
        if let Err(e) = written {
            discard(&parquet_tmp);
            discard(&csv_tmp);
            return Err(e);
        }

        if let Err(e) = rename(&parquet_tmp, &paths.parquet) {
            discard(&parquet_tmp);
            discard(&csv_tmp);
            return Err(e);
        }
        if let Err(e) = rename(&csv_tmp, &paths.csv) {
            discard(&csv_tmp);
            return Err(e);
        }

        info!(
            rows = self.records.len(),
            parquet = %paths.parquet.display(),
            csv = %paths.csv.display(),
            "Dataset written"
        );
        Ok(())
    }

    /// Load the dataset, preferring Parquet, then CSV, then empty
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or decoded
    pub fn load(paths: &DatasetPaths) -> AppResult<Self> {
        Self::load_with_source(paths).map(|(dataset, _)| dataset)
    }

    /// Like [`RunDataset::load`], also reporting which file was used
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or decoded
    pub fn load_with_source(paths: &DatasetPaths) -> AppResult<(Self, DatasetSource)> {
        if paths.parquet.exists() {
            let records = parquet::read(&paths.parquet)?;
            return Ok((Self::new(records), DatasetSource::Parquet));
        }

        if paths.csv.exists() {
            warn!(
                parquet = %paths.parquet.display(),
                csv = %paths.csv.display(),
                "Parquet dataset missing, falling back to CSV"
            );
            let records = csv::read(&paths.csv)?;
            return Ok((Self::new(records), DatasetSource::Csv));
        }

        Ok((Self::default(), DatasetSource::Empty))
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(ToOwned::to_owned).unwrap_or_default();
    name.push(".");
    name.push(TEMP_SUFFIX);
    path.with_file_name(name)
}

fn rename(from: &Path, to: &Path) -> AppResult<()> {
    fs::rename(from, to).map_err(|e| {
        AppError::storage(format!(
            "Failed to move {} into place: {e}",
            to.display()
        ))
        .with_source(e)
    })
}

fn discard(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!(path = %path.display(), error = %e, "Failed to remove temporary file");
        }
    }
}
