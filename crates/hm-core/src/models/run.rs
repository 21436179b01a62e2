// ABOUTME: Run record model - one summarized activity file in the run dataset
// ABOUTME: RunRecordBuilder derives miles, minutes, pace, and ISO week from raw session totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::RunCategory;
use crate::constants::units::{METERS_PER_MILE, SECONDS_PER_MINUTE};

/// One row of the run dataset
///
/// Fields are private so the derived columns (week, pace) can never disagree
/// with the base columns. Use [`RunRecordBuilder`] to construct from raw
/// session totals, or [`RunRecord::from_parts`] when loading stored rows.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use hm_core::models::{RunCategory, RunRecordBuilder};
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 6).unwrap();
/// let run = RunRecordBuilder::new(date, RunCategory::Threshold, "data/raw/threshold/a.fit")
///     .distance_meters(4988.97)
///     .duration_seconds(1500.0)
///     .average_heart_rate(170)
///     .build();
///
/// assert_eq!(run.week(), "2026-W02");
/// assert!((run.avg_pace_minmi().unwrap() - 8.064).abs() < 0.01);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    date: NaiveDate,
    week: String,
    run_type: RunCategory,
    duration_min: f64,
    distance_mi: f64,
    avg_pace_minmi: Option<f64>,
    avg_hr: Option<u32>,
    source_file: String,
}

impl RunRecord {
    /// Rebuild a record from stored columns
    ///
    /// Negative duration or distance is clamped to zero and the pace is
    /// recomputed as missing when either is non-positive.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        date: NaiveDate,
        week: String,
        run_type: RunCategory,
        duration_min: f64,
        distance_mi: f64,
        avg_pace_minmi: Option<f64>,
        avg_hr: Option<u32>,
        source_file: String,
    ) -> Self {
        let duration_min = duration_min.max(0.0);
        let distance_mi = distance_mi.max(0.0);
        let avg_pace_minmi = if duration_min > 0.0 && distance_mi > 0.0 {
            avg_pace_minmi
        } else {
            None
        };
        Self {
            date,
            week,
            run_type,
            duration_min,
            distance_mi,
            avg_pace_minmi,
            avg_hr,
            source_file,
        }
    }

    /// Calendar day of the run
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// ISO week label, `{year}-W{week:02}`
    #[must_use]
    pub fn week(&self) -> &str {
        &self.week
    }

    /// Category inferred from the storage directory
    #[must_use]
    pub const fn run_type(&self) -> RunCategory {
        self.run_type
    }

    /// Timer duration in minutes
    #[must_use]
    pub const fn duration_min(&self) -> f64 {
        self.duration_min
    }

    /// Distance in miles
    #[must_use]
    pub const fn distance_mi(&self) -> f64 {
        self.distance_mi
    }

    /// Average pace in minutes per mile, absent when distance or duration is zero
    #[must_use]
    pub const fn avg_pace_minmi(&self) -> Option<f64> {
        self.avg_pace_minmi
    }

    /// Average heart rate in beats per minute
    #[must_use]
    pub const fn avg_hr(&self) -> Option<u32> {
        self.avg_hr
    }

    /// Path of the activity file, relative to the data root
    #[must_use]
    pub fn source_file(&self) -> &str {
        &self.source_file
    }
}

/// Builder deriving a [`RunRecord`] from raw session totals
#[derive(Debug, Clone)]
pub struct RunRecordBuilder {
    date: NaiveDate,
    run_type: RunCategory,
    source_file: String,
    distance_meters: f64,
    duration_seconds: f64,
    avg_hr: Option<u32>,
}

impl RunRecordBuilder {
    /// Start a record for the given day, category, and source path
    pub fn new(date: NaiveDate, run_type: RunCategory, source_file: impl Into<String>) -> Self {
        Self {
            date,
            run_type,
            source_file: source_file.into(),
            distance_meters: 0.0,
            duration_seconds: 0.0,
            avg_hr: None,
        }
    }

    /// Total distance in meters
    #[must_use]
    pub const fn distance_meters(mut self, meters: f64) -> Self {
        self.distance_meters = meters;
        self
    }

    /// Total timer time in seconds
    #[must_use]
    pub const fn duration_seconds(mut self, seconds: f64) -> Self {
        self.duration_seconds = seconds;
        self
    }

    /// Average heart rate in beats per minute
    #[must_use]
    pub const fn average_heart_rate(mut self, bpm: u32) -> Self {
        self.avg_hr = Some(bpm);
        self
    }

    /// Optional average heart rate
    #[must_use]
    pub const fn maybe_average_heart_rate(mut self, bpm: Option<u32>) -> Self {
        self.avg_hr = bpm;
        self
    }

    /// Finish the record, deriving miles, minutes, pace, and week label
    #[must_use]
    pub fn build(self) -> RunRecord {
        let distance_mi = (self.distance_meters / METERS_PER_MILE).max(0.0);
        let duration_min = (self.duration_seconds / SECONDS_PER_MINUTE).max(0.0);
        RunRecord {
            date: self.date,
            week: iso_week_label(self.date),
            run_type: self.run_type,
            duration_min,
            distance_mi,
            avg_pace_minmi: pace_min_per_mile(distance_mi, duration_min),
            avg_hr: self.avg_hr,
            source_file: self.source_file,
        }
    }
}

/// Pace in minutes per mile, `None` unless both inputs are positive
#[must_use]
pub fn pace_min_per_mile(distance_mi: f64, duration_min: f64) -> Option<f64> {
    if distance_mi <= 0.0 || duration_min <= 0.0 {
        return None;
    }
    Some(duration_min / distance_mi)
}

/// ISO week label for a day, e.g. `2026-W02`
#[must_use]
pub fn iso_week_label(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_unit_conversion() {
        let run = RunRecordBuilder::new(day(2026, 1, 6), RunCategory::Easy, "easy/a.fit")
            .distance_meters(1609.344 * 3.0)
            .duration_seconds(1800.0)
            .build();
        assert!((run.distance_mi() - 3.0).abs() < 1e-9);
        assert!((run.duration_min() - 30.0).abs() < 1e-9);
        assert!((run.avg_pace_minmi().unwrap() - 10.0).abs() < 1e-9);
        assert_eq!(run.avg_hr(), None);
    }

    #[test]
    fn test_pace_missing_without_distance_or_duration() {
        assert_eq!(pace_min_per_mile(0.0, 30.0), None);
        assert_eq!(pace_min_per_mile(3.0, 0.0), None);
        assert_eq!(pace_min_per_mile(-1.0, 30.0), None);

        let treadmill = RunRecordBuilder::new(day(2026, 1, 6), RunCategory::Easy, "easy/t.fit")
            .duration_seconds(1800.0)
            .build();
        assert_eq!(treadmill.avg_pace_minmi(), None);
    }

    #[test]
    fn test_iso_week_label_crosses_year_boundary() {
        assert_eq!(iso_week_label(day(2026, 1, 1)), "2026-W01");
        assert_eq!(iso_week_label(day(2027, 1, 1)), "2026-W53");
        assert_eq!(iso_week_label(day(2025, 12, 29)), "2026-W01");
    }

    #[test]
    fn test_from_parts_enforces_invariants() {
        let run = RunRecord::from_parts(
            day(2026, 2, 1),
            "2026-W05".to_owned(),
            RunCategory::Long,
            -5.0,
            4.0,
            Some(9.0),
            Some(150),
            "long/x.fit".to_owned(),
        );
        assert!(run.duration_min().abs() < f64::EPSILON);
        assert_eq!(run.avg_pace_minmi(), None);
    }
}
