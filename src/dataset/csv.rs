// ABOUTME: CSV encoding of the run dataset - header row, ISO dates, empty cells for nulls
// ABOUTME: Rows pass through RunRecord::from_parts on load so stored values keep record invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

use std::path::Path;

use chrono::NaiveDate;
use hm_core::errors::{AppError, AppResult};
use hm_core::models::{RunCategory, RunRecord};
use serde::{Deserialize, Serialize};

/// One CSV row, columns in dataset order
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    date: NaiveDate,
    week: String,
    run_type: String,
    duration_min: f64,
    distance_mi: f64,
    avg_pace_minmi: Option<f64>,
    avg_hr: Option<u32>,
    source_file: String,
}

impl From<&RunRecord> for CsvRow {
    fn from(record: &RunRecord) -> Self {
        Self {
            date: record.date(),
            week: record.week().to_owned(),
            run_type: record.run_type().as_str().to_owned(),
            duration_min: record.duration_min(),
            distance_mi: record.distance_mi(),
            avg_pace_minmi: record.avg_pace_minmi(),
            avg_hr: record.avg_hr(),
            source_file: record.source_file().to_owned(),
        }
    }
}

impl TryFrom<CsvRow> for RunRecord {
    type Error = AppError;

    fn try_from(row: CsvRow) -> AppResult<Self> {
        let run_type: RunCategory = row.run_type.parse().map_err(|e| {
            AppError::serialization(format!("{e} in {}", row.source_file)).with_source(e)
        })?;
        Ok(Self::from_parts(
            row.date,
            row.week,
            run_type,
            row.duration_min,
            row.distance_mi,
            row.avg_pace_minmi,
            row.avg_hr,
            row.source_file,
        ))
    }
}

/// Write records to `path` with a header row
///
/// # Errors
///
/// Returns a serialization error if the file cannot be written
pub fn write(path: &Path, records: &[RunRecord]) -> AppResult<()> {
    let mut writer = ::csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| {
            AppError::storage(format!("Failed to create {}: {e}", path.display())).with_source(e)
        })?;

    for record in records {
        writer.serialize(CsvRow::from(record)).map_err(|e| {
            AppError::serialization(format!("Failed to write CSV row: {e}")).with_source(e)
        })?;
    }
    writer.flush().map_err(|e| {
        AppError::storage(format!("Failed to flush {}: {e}", path.display())).with_source(e)
    })?;
    Ok(())
}

/// Read every record from `path`
///
/// # Errors
///
/// Returns a storage error if the file cannot be opened, or a
/// serialization error for malformed rows or unknown categories
pub fn read(path: &Path) -> AppResult<Vec<RunRecord>> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| {
            AppError::storage(format!("Failed to open {}: {e}", path.display())).with_source(e)
        })?;

    reader
        .deserialize::<CsvRow>()
        .map(|row| {
            let row = row.map_err(|e| {
                AppError::serialization(format!("Malformed CSV row: {e}")).with_source(e)
            })?;
            RunRecord::try_from(row)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_rejected() {
        let row = CsvRow {
            date: NaiveDate::from_ymd_opt(2026, 1, 6).unwrap(),
            week: "2026-W02".into(),
            run_type: "tempo".into(),
            duration_min: 30.0,
            distance_mi: 3.0,
            avg_pace_minmi: Some(10.0),
            avg_hr: None,
            source_file: "data/raw/tempo/a.fit".into(),
        };
        let err = RunRecord::try_from(row).unwrap_err();
        assert_eq!(err.code, hm_core::errors::ErrorCode::SerializationError);
    }

    #[test]
    fn test_empty_cells_are_nulls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs.csv");
        std::fs::write(
            &path,
            "date,week,run_type,duration_min,distance_mi,avg_pace_minmi,avg_hr,source_file\n\
             2026-01-06,2026-W02,easy,0.0,0.0,,,data/raw/easy/a.fit\n",
        )
        .unwrap();
        let records = read(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].avg_pace_minmi(), None);
        assert_eq!(records[0].avg_hr(), None);
        assert_eq!(records[0].run_type(), RunCategory::Easy);
    }
}
