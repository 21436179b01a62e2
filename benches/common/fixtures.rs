// ABOUTME: Benchmark fixtures for generating realistic training histories
// ABOUTME: Deterministic run records and encoded FIT activities for reproducible measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

//! Benchmark fixtures for generating realistic training histories.

use chrono::{Duration, NaiveDate, NaiveTime};
use hm_goal_tracker::fit::{encode_activity, SessionSpec};
use hm_goal_tracker::models::{RunCategory, RunRecord, RunRecordBuilder};

/// Predefined dataset sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// One training block (24 runs)
    Block,
    /// About a year of training (150 runs)
    Season,
    /// Several seasons (1000 runs)
    Archive,
}

impl HistorySize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Block => 24,
            Self::Season => 150,
            Self::Archive => 1000,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Season => "season",
            Self::Archive => "archive",
        }
    }
}

/// Fixed end of every generated history so results do not drift with the clock
fn last_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 28).unwrap_or(NaiveDate::MIN)
}

const fn category(index: usize) -> RunCategory {
    match index % 3 {
        0 => RunCategory::Easy,
        1 => RunCategory::Threshold,
        _ => RunCategory::Long,
    }
}

#[allow(clippy::cast_precision_loss)]
fn session_for(index: usize) -> (NaiveDate, RunCategory, SessionSpec) {
    let run_type = category(index);
    let days_ago = i64::try_from(index * 2).unwrap_or(i64::MAX / 2);
    let date = last_day() - Duration::days(days_ago);

    let distance_m = match run_type {
        RunCategory::Long => 12_000.0 + ((index * 251) % 6_000) as f64,
        _ => 5_000.0 + ((index * 137) % 3_000) as f64,
    };
    let pace_secs_per_m = 0.6 + ((index * 17) % 25) as f64 / 100.0;
    let avg_hr = run_type.hr_cap() - 12 + u32::try_from((index * 7) % 16).unwrap_or(0);

    let spec = SessionSpec {
        start_time: date
            .and_time(NaiveTime::from_hms_opt(6, 30, 0).unwrap_or(NaiveTime::MIN))
            .and_utc(),
        duration_secs: distance_m * pace_secs_per_m,
        distance_m,
        avg_heart_rate: u8::try_from(avg_hr).ok(),
    };
    (date, run_type, spec)
}

/// Run records as ingestion would produce them, newest first
#[must_use]
pub fn generate_runs(size: HistorySize) -> Vec<RunRecord> {
    (0..size.count())
        .map(|i| {
            let (date, run_type, spec) = session_for(i);
            RunRecordBuilder::new(date, run_type, format!("data/raw/{run_type}/bench_{i}.fit"))
                .distance_meters(spec.distance_m)
                .duration_seconds(spec.duration_secs)
                .maybe_average_heart_rate(spec.avg_heart_rate.map(u32::from))
                .build()
        })
        .collect()
}

/// One encoded FIT activity
#[must_use]
pub fn generate_fit_file(index: usize) -> Vec<u8> {
    let (_, _, spec) = session_for(index);
    encode_activity(&spec)
}
