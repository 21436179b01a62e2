// ABOUTME: Date-window helpers shared by the goal heuristics
// ABOUTME: Latest-day lookup and inclusive [start, end] record filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

use chrono::{Duration, NaiveDate};
use hm_core::models::RunRecord;

/// Latest run date in the dataset
pub(crate) fn latest_date(records: &[RunRecord]) -> Option<NaiveDate> {
    records.iter().map(RunRecord::date).max()
}

/// First day of a window reaching `days_back` days before `end`
///
/// Saturates at the earliest representable date.
pub(crate) fn window_start(end: NaiveDate, days_back: i64) -> NaiveDate {
    Duration::try_days(days_back)
        .and_then(|back| end.checked_sub_signed(back))
        .unwrap_or(NaiveDate::MIN)
}

/// Records dated within `[start, end]`, both ends inclusive, in dataset order
pub(crate) fn in_window(
    records: &[RunRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> impl Iterator<Item = &RunRecord> {
    records
        .iter()
        .filter(move |run| run.date() >= start && run.date() <= end)
}
