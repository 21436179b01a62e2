// ABOUTME: FIT fixture builder - temporary tracker roots populated with synthetic activity files
// ABOUTME: Also wraps hand-written record streams in a valid header and CRC for session decoding tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};
use hm_goal_tracker::config::TrackerConfig;
use hm_goal_tracker::constants::units::METERS_PER_MILE;
use hm_goal_tracker::fit::{encode_activity, fit_crc, SessionSpec};
use hm_goal_tracker::models::{RunCategory, RunRecord, RunRecordBuilder};
use tempfile::TempDir;

/// Calendar day shortcut
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Session of `minutes` over `miles` starting at 07:00 UTC on `date`
pub fn session(date: NaiveDate, minutes: f64, miles: f64, avg_hr: Option<u8>) -> SessionSpec {
    SessionSpec {
        start_time: date
            .and_time(NaiveTime::from_hms_opt(7, 0, 0).unwrap())
            .and_utc(),
        duration_secs: minutes * 60.0,
        distance_m: miles * METERS_PER_MILE,
        avg_heart_rate: avg_hr,
    }
}

/// Run record built the same way ingestion builds one
pub fn run(
    date: NaiveDate,
    category: RunCategory,
    minutes: f64,
    miles: f64,
    avg_hr: Option<u32>,
) -> RunRecord {
    RunRecordBuilder::new(
        date,
        category,
        format!("data/raw/{category}/{date}.fit"),
    )
    .distance_meters(miles * METERS_PER_MILE)
    .duration_seconds(minutes * 60.0)
    .maybe_average_heart_rate(avg_hr)
    .build()
}

/// Wrap a record stream in a 12-byte header (no header CRC) and file CRC
pub fn wrap_records(records: &[u8]) -> Vec<u8> {
    let mut bytes = vec![12, 0x10];
    bytes.extend_from_slice(&2132_u16.to_le_bytes());
    bytes.extend_from_slice(&(records.len() as u32).to_le_bytes());
    bytes.extend_from_slice(b".FIT");
    bytes.extend_from_slice(records);
    let crc = fit_crc(&bytes);
    bytes.extend_from_slice(&crc.to_le_bytes());
    bytes
}

/// Temporary tracker root with helpers to drop FIT files into it
pub struct TrackerFixture {
    dir: TempDir,
    config: TrackerConfig,
}

impl TrackerFixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = TrackerConfig::new(dir.path());
        Self { dir, config }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Write raw bytes as `data/raw/<category>/<name>`
    pub fn add_bytes(&self, category: RunCategory, name: &str, bytes: &[u8]) -> PathBuf {
        let dir = self.config.raw_dir().join(category.dir_name());
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    /// Encode and write a synthetic activity
    pub fn add_session(&self, category: RunCategory, name: &str, spec: &SessionSpec) -> PathBuf {
        self.add_bytes(category, name, &encode_activity(spec))
    }

    /// Write a README containing one empty marker span between `before` and `after`
    pub fn write_readme(&self, before: &str, after: &str) -> PathBuf {
        let path = self.config.readme_path();
        fs::write(
            &path,
            format!("{before}<!-- GOAL_STATUS_START -->\nplaceholder\n<!-- GOAL_STATUS_END -->{after}"),
        )
        .unwrap();
        path
    }
}
