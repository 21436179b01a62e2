// ABOUTME: Parquet encoding of the run dataset through Arrow record batches
// ABOUTME: Date32 day column, nullable pace and heart-rate columns, category stored as its label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use ::arrow::array::{Array, ArrayRef, Date32Array, Float64Array, Int32Array, StringArray};
use ::arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use ::arrow::record_batch::RecordBatch;
use ::parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use ::parquet::arrow::ArrowWriter;
use ::parquet::basic::Compression;
use ::parquet::file::properties::WriterProperties;
use chrono::{Datelike, NaiveDate};
use hm_core::errors::{AppError, AppResult};
use hm_core::models::{RunCategory, RunRecord};

/// Day number of 1970-01-01 counted from 0001-01-01 (day 1)
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Arrow schema of the stored dataset
#[must_use]
pub fn schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new("date", DataType::Date32, false),
        Field::new("week", DataType::Utf8, false),
        Field::new("run_type", DataType::Utf8, false),
        Field::new("duration_min", DataType::Float64, false),
        Field::new("distance_mi", DataType::Float64, false),
        Field::new("avg_pace_minmi", DataType::Float64, true),
        Field::new("avg_hr", DataType::Int32, true),
        Field::new("source_file", DataType::Utf8, false),
    ]))
}

fn days_since_epoch(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

fn date_from_days(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?)
}

/// Convert records to a single record batch
///
/// # Errors
///
/// Returns a serialization error if Arrow rejects the columns
pub fn to_batch(records: &[RunRecord]) -> AppResult<RecordBatch> {
    let date = Date32Array::from_iter_values(records.iter().map(|r| days_since_epoch(r.date())));
    let week = StringArray::from_iter_values(records.iter().map(RunRecord::week));
    let run_type = StringArray::from_iter_values(records.iter().map(|r| r.run_type().as_str()));
    let duration_min = Float64Array::from_iter_values(records.iter().map(RunRecord::duration_min));
    let distance_mi = Float64Array::from_iter_values(records.iter().map(RunRecord::distance_mi));
    let avg_pace_minmi: Float64Array = records.iter().map(RunRecord::avg_pace_minmi).collect();
    let avg_hr: Int32Array = records
        .iter()
        .map(|r| r.avg_hr().and_then(|hr| i32::try_from(hr).ok()))
        .collect();
    let source_file = StringArray::from_iter_values(records.iter().map(RunRecord::source_file));

    let columns: Vec<ArrayRef> = vec![
        Arc::new(date),
        Arc::new(week),
        Arc::new(run_type),
        Arc::new(duration_min),
        Arc::new(distance_mi),
        Arc::new(avg_pace_minmi),
        Arc::new(avg_hr),
        Arc::new(source_file),
    ];

    RecordBatch::try_new(schema(), columns).map_err(|e| {
        AppError::serialization(format!("Failed to build record batch: {e}")).with_source(e)
    })
}

/// Write records to `path`
///
/// # Errors
///
/// Returns a storage error if the file cannot be created, or a
/// serialization error if Parquet encoding fails
pub fn write(path: &Path, records: &[RunRecord]) -> AppResult<()> {
    let batch = to_batch(records)?;
    let file = File::create(path).map_err(|e| {
        AppError::storage(format!("Failed to create {}: {e}", path.display())).with_source(e)
    })?;

    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();

    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props)).map_err(|e| {
        AppError::serialization(format!("Failed to create Parquet writer: {e}")).with_source(e)
    })?;
    writer.write(&batch).map_err(|e| {
        AppError::serialization(format!("Failed to write batch: {e}")).with_source(e)
    })?;
    writer.close().map_err(|e| {
        AppError::serialization(format!("Failed to close Parquet writer: {e}")).with_source(e)
    })?;
    Ok(())
}

/// Read every record from `path`
///
/// # Errors
///
/// Returns a storage error if the file cannot be opened, or a
/// serialization error for unreadable or mistyped columns
pub fn read(path: &Path) -> AppResult<Vec<RunRecord>> {
    let file = File::open(path).map_err(|e| {
        AppError::storage(format!("Failed to open {}: {e}", path.display())).with_source(e)
    })?;

    let reader = ParquetRecordBatchReaderBuilder::try_new(file)
        .and_then(ParquetRecordBatchReaderBuilder::build)
        .map_err(|e| {
            AppError::serialization(format!("Failed to open Parquet reader: {e}")).with_source(e)
        })?;

    let mut records = Vec::new();
    for batch in reader {
        let batch = batch.map_err(|e| {
            AppError::serialization(format!("Failed to read batch: {e}")).with_source(e)
        })?;
        records.extend(from_batch(&batch)?);
    }
    Ok(records)
}

fn column<'a, T: Array + 'static>(batch: &'a RecordBatch, name: &str) -> AppResult<&'a T> {
    batch
        .column_by_name(name)
        .and_then(|c| c.as_any().downcast_ref::<T>())
        .ok_or_else(|| AppError::serialization(format!("Column '{name}' missing or mistyped")))
}

/// Convert a record batch back into records
///
/// # Errors
///
/// Returns a serialization error for missing columns, null required
/// values, or unknown category labels
pub fn from_batch(batch: &RecordBatch) -> AppResult<Vec<RunRecord>> {
    let date = column::<Date32Array>(batch, "date")?;
    let week = column::<StringArray>(batch, "week")?;
    let run_type = column::<StringArray>(batch, "run_type")?;
    let duration_min = column::<Float64Array>(batch, "duration_min")?;
    let distance_mi = column::<Float64Array>(batch, "distance_mi")?;
    let avg_pace_minmi = column::<Float64Array>(batch, "avg_pace_minmi")?;
    let avg_hr = column::<Int32Array>(batch, "avg_hr")?;
    let source_file = column::<StringArray>(batch, "source_file")?;

    let required = |array: &dyn Array, name: &str, row: usize| -> AppResult<()> {
        if array.is_null(row) {
            return Err(AppError::serialization(format!(
                "Null '{name}' in row {row}"
            )));
        }
        Ok(())
    };
    let optional_f64 =
        |array: &Float64Array, row: usize| (!array.is_null(row)).then_some(array.value(row));

    let mut records = Vec::with_capacity(batch.num_rows());
    for row in 0..batch.num_rows() {
        required(date, "date", row)?;
        required(run_type, "run_type", row)?;
        required(source_file, "source_file", row)?;

        let day = date_from_days(date.value(row))
            .ok_or_else(|| AppError::serialization(format!("Date out of range in row {row}")))?;
        let category: RunCategory = run_type.value(row).parse().map_err(|e| {
            AppError::serialization(format!("Row {row}: {e}")).with_source(e)
        })?;
        let hr = if avg_hr.is_null(row) {
            None
        } else {
            u32::try_from(avg_hr.value(row)).ok()
        };
        let week_label = if week.is_null(row) {
            hm_core::models::iso_week_label(day)
        } else {
            week.value(row).to_owned()
        };

        records.push(RunRecord::from_parts(
            day,
            week_label,
            category,
            optional_f64(duration_min, row).unwrap_or(0.0),
            optional_f64(distance_mi, row).unwrap_or(0.0),
            optional_f64(avg_pace_minmi, row),
            hr,
            source_file.value(row).to_owned(),
        ));
    }
    Ok(records)
}
