// ABOUTME: FIT ingestion - scans category directories and derives one run record per activity file
// ABOUTME: Aggregates, sorts, and rewrites the run dataset; a malformed file aborts the whole run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

//! # Ingestion
//!
//! Run category comes from the directory a file sits in:
//!
//! ```text
//! data/raw/easy/*.fit       -> easy
//! data/raw/long/*.fit       -> long
//! data/raw/threshold/*.fit  -> threshold
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use glob::{glob_with, MatchOptions, Pattern};
use hm_core::errors::{AppError, AppResult};
use hm_core::models::{RunCategory, RunRecord, RunRecordBuilder};
use tracing::{debug, info, warn};

use crate::config::TrackerConfig;
use crate::dataset::{DatasetPaths, RunDataset};
use crate::fit::SessionSummary;

/// Outcome of one ingestion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    /// Activity files parsed
    pub files: usize,
    /// Whether the dataset files were rewritten
    pub written: bool,
    /// Where the dataset lives
    pub paths: DatasetPaths,
}

/// FIT files of one category, sorted by path
///
/// The category directory is created if missing. The `.fit` extension is
/// matched case-insensitively and hidden files are skipped.
///
/// # Errors
///
/// Returns a storage error if the directory cannot be created or listed
pub fn category_files(raw_dir: &Path, category: RunCategory) -> AppResult<Vec<PathBuf>> {
    let dir = raw_dir.join(category.dir_name());
    fs::create_dir_all(&dir).map_err(|e| {
        AppError::storage(format!("Failed to create {}: {e}", dir.display())).with_source(e)
    })?;

    let dir_str = dir.to_str().ok_or_else(|| {
        AppError::storage(format!("Non UTF-8 directory path: {}", dir.display()))
    })?;
    let pattern = format!("{}/*.fit", Pattern::escape(dir_str));
    let options = MatchOptions {
        case_sensitive: false,
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let entries = glob_with(&pattern, options).map_err(|e| {
        AppError::internal(format!("Invalid scan pattern {pattern}: {e}")).with_source(e)
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            AppError::storage(format!("Failed to read {}: {e}", e.path().display()))
        })?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Decode a FIT file and summarize its first session
///
/// # Errors
///
/// Returns a storage error if the file cannot be read, or a malformed-input
/// error naming the file
pub fn summarize_file(path: &Path) -> AppResult<SessionSummary> {
    let bytes = fs::read(path).map_err(|e| {
        AppError::storage(format!("Failed to read {}: {e}", path.display())).with_source(e)
    })?;

    SessionSummary::from_bytes(&bytes).map_err(|e| {
        let error = AppError::from(e);
        AppError {
            message: format!("{}: {}", path.display(), error.message),
            ..error
        }
    })
}

/// Build the run record for one activity file
///
/// `root` is stripped from the path stored in `source_file`.
///
/// # Errors
///
/// Returns any error from [`summarize_file`], or a storage error if the
/// modification time is needed and unavailable
pub fn record_from_file(path: &Path, category: RunCategory, root: &Path) -> AppResult<RunRecord> {
    let summary = summarize_file(path)?;

    let date = match summary.start_time {
        Some(start) => start.date_naive(),
        None => modified_date(path)?,
    };

    debug!(
        file = %path.display(),
        %date,
        run_type = %category,
        distance_m = ?summary.distance_m,
        duration_s = ?summary.duration_secs,
        avg_hr = ?summary.avg_heart_rate,
        "Session parsed"
    );

    Ok(RunRecordBuilder::new(date, category, source_label(path, root))
        .distance_meters(summary.distance_m.unwrap_or(0.0))
        .duration_seconds(summary.duration_secs.unwrap_or(0.0))
        .maybe_average_heart_rate(summary.avg_heart_rate)
        .build())
}

fn modified_date(path: &Path) -> AppResult<NaiveDate> {
    let modified = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|e| {
            AppError::storage(format!(
                "No session time and no modification time for {}: {e}",
                path.display()
            ))
            .with_source(e)
        })?;
    Ok(DateTime::<Utc>::from(modified).date_naive())
}

/// Path relative to `root` with forward slashes
fn source_label(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative.to_string_lossy().replace('\\', "/")
}

/// Scan every category directory and build the sorted dataset
///
/// # Errors
///
/// Returns the first error encountered; no partial dataset is produced
pub fn collect_runs(config: &TrackerConfig) -> AppResult<RunDataset> {
    let raw_dir = config.raw_dir();
    let mut records = Vec::new();

    for category in RunCategory::ALL {
        let files = category_files(&raw_dir, category)?;
        debug!(run_type = %category, files = files.len(), "Category scanned");
        for path in files {
            records.push(record_from_file(&path, category, config.root())?);
        }
    }

    Ok(RunDataset::new(records))
}

/// Rebuild the dataset from the raw FIT files
///
/// With no input files nothing is written and prior outputs stay in place.
///
/// # Errors
///
/// Returns the first parse or storage error
pub fn ingest(config: &TrackerConfig) -> AppResult<IngestReport> {
    let dataset = collect_runs(config)?;
    let paths = DatasetPaths::from_config(config);

    if dataset.is_empty() {
        warn!(
            raw_dir = %config.raw_dir().display(),
            "No .fit files found under the raw data directories"
        );
        return Ok(IngestReport {
            files: 0,
            written: false,
            paths,
        });
    }

    dataset.save(&paths)?;
    info!(files = dataset.len(), "Ingestion complete");

    Ok(IngestReport {
        files: dataset.len(),
        written: true,
        paths,
    })
}
