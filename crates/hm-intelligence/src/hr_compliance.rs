// ABOUTME: Rolling-window heart-rate compliance gate over the run dataset
// ABOUTME: Partitions recent runs per category against the category HR cap and lists violations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

//! # HR Compliance Gate
//!
//! The gate fails if any run inside the window averaged above its category
//! cap. Runs without a heart-rate reading are ignored rather than counted as
//! passing or failing.

use chrono::NaiveDate;
use hm_core::models::{RunCategory, RunRecord};
use serde::{Deserialize, Serialize};

use crate::window::{in_window, latest_date, window_start};

/// Pass/fail tally for one category inside the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCompliance {
    /// Category the tally is for
    pub run_type: RunCategory,
    /// Runs at or under the cap
    pub pass: usize,
    /// Runs over the cap
    pub fail: usize,
    /// Cap applied, in beats per minute
    pub cap: u32,
}

impl CategoryCompliance {
    /// Zeroed tally for a category
    #[must_use]
    pub const fn empty(run_type: RunCategory) -> Self {
        Self {
            run_type,
            pass: 0,
            fail: 0,
            cap: run_type.hr_cap(),
        }
    }

    /// Runs with a heart-rate reading that were judged
    #[must_use]
    pub const fn total(&self) -> usize {
        self.pass + self.fail
    }
}

/// A single run that exceeded its category cap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrViolation {
    /// Day of the run
    pub date: NaiveDate,
    /// Category of the run
    pub run_type: RunCategory,
    /// Observed average heart rate
    pub avg_hr: u32,
    /// Cap that was exceeded
    pub cap: u32,
    /// Source activity file
    pub source_file: String,
}

/// Outcome of the HR gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrComplianceReport {
    /// True when no run in the window exceeded its cap
    pub passed: bool,
    /// Look-back of the window in days
    pub window_days: i64,
    /// First day of the window; absent for an empty dataset
    pub window_start: Option<NaiveDate>,
    /// Last day of the window ("today"); absent for an empty dataset
    pub window_end: Option<NaiveDate>,
    /// Per-category tallies in category order; empty for an empty dataset
    pub counts: Vec<CategoryCompliance>,
    /// Violations in category order, then dataset order
    pub failures: Vec<HrViolation>,
}

impl HrComplianceReport {
    fn trivially_passing(window_days: i64) -> Self {
        Self {
            passed: true,
            window_days,
            window_start: None,
            window_end: None,
            counts: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Human label for the window, e.g. "last 14 days"
    #[must_use]
    pub fn window_label(&self) -> String {
        format!("last {} days", self.window_days)
    }

    /// Tally for a category, zeroed if the category was not evaluated
    #[must_use]
    pub fn counts_for(&self, run_type: RunCategory) -> CategoryCompliance {
        self.counts
            .iter()
            .find(|c| c.run_type == run_type)
            .copied()
            .unwrap_or_else(|| CategoryCompliance::empty(run_type))
    }

    /// First violation, the one surfaced in reports and goal evidence
    #[must_use]
    pub fn first_failure(&self) -> Option<&HrViolation> {
        self.failures.first()
    }
}

/// Evaluate the gate over `records`
///
/// `today` defaults to the latest record's date. The window covers
/// `[today - window_days, today]` inclusive.
#[must_use]
pub fn compute_hr_compliance(
    records: &[RunRecord],
    today: Option<NaiveDate>,
    window_days: i64,
) -> HrComplianceReport {
    let Some(today) = today.or_else(|| latest_date(records)) else {
        return HrComplianceReport::trivially_passing(window_days);
    };
    let start = window_start(today, window_days);

    let mut counts = Vec::with_capacity(RunCategory::ALL.len());
    let mut failures = Vec::new();

    for run_type in RunCategory::ALL {
        let cap = run_type.hr_cap();
        let mut tally = CategoryCompliance::empty(run_type);

        for run in in_window(records, start, today).filter(|r| r.run_type() == run_type) {
            let Some(avg_hr) = run.avg_hr() else {
                continue;
            };
            if avg_hr > cap {
                tally.fail += 1;
                failures.push(HrViolation {
                    date: run.date(),
                    run_type,
                    avg_hr,
                    cap,
                    source_file: run.source_file().to_owned(),
                });
            } else {
                tally.pass += 1;
            }
        }
        counts.push(tally);
    }

    tracing::debug!(
        window.start = %start,
        window.end = %today,
        failures = failures.len(),
        "HR compliance evaluated"
    );

    HrComplianceReport {
        passed: failures.is_empty(),
        window_days,
        window_start: Some(start),
        window_end: Some(today),
        counts,
        failures,
    }
}
