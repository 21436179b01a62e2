// ABOUTME: Finish and time goal heuristics for the half-marathon target
// ABOUTME: GoalEvaluator bundles the HR gate, goal statuses, and pace confidence per snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

//! # Goal Heuristics
//!
//! Three goals are tracked:
//!
//! - **Finish**: consistency (runs per week) plus long-run duration over the
//!   finish window.
//! - **Sub-2:30 / sub-2:00**: hard-failed by the HR gate. When the gate
//!   passes both report "possible"; pace discrimination between the two has
//!   not been implemented.

use std::fmt;

use chrono::NaiveDate;
use hm_core::constants::finish_goal::MIN_WINDOW_WEEKS;
use hm_core::constants::units::DAYS_PER_WEEK;
use hm_core::models::{RunCategory, RunRecord};
use serde::{Deserialize, Serialize};

use crate::config::GoalConfig;
use crate::hr_compliance::{compute_hr_compliance, HrComplianceReport};
use crate::pace_confidence::PaceConfidence;
use crate::window::{in_window, latest_date, window_start};

const NO_RUNS_EVIDENCE: &str = "No runs recorded yet.";
const GATE_FAILED_EVIDENCE: &str = "HR cap exceeded in the rolling window.";
const GATE_PASSED_EVIDENCE: &str =
    "HR compliant recently; add pace/efficiency logic next for a stronger call.";

/// Status label of a goal
///
/// `AtRisk` and `Possible` are the same middle tier; the finish goal words it
/// "at risk", the time goals "possible".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalLabel {
    /// Evidence supports the goal
    OnTrack,
    /// Finish goal is reachable but consistency is slipping
    AtRisk,
    /// Time goal is not ruled out
    Possible,
    /// Evidence rules the goal out for now
    NotOnTrack,
}

impl GoalLabel {
    /// Decorative marker shown before the label
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::OnTrack => "✅",
            Self::AtRisk | Self::Possible => "⚠️",
            Self::NotOnTrack => "❌",
        }
    }

    /// Label text without the marker
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::OnTrack => "On track",
            Self::AtRisk => "At risk",
            Self::Possible => "Possible",
            Self::NotOnTrack => "Not on track",
        }
    }
}

impl fmt::Display for GoalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.marker(), self.text())
    }
}

/// Label plus the evidence that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalStatus {
    /// Status label
    pub label: GoalLabel,
    /// Free-text evidence
    pub evidence: String,
}

impl GoalStatus {
    fn new(label: GoalLabel, evidence: impl Into<String>) -> Self {
        Self {
            label,
            evidence: evidence.into(),
        }
    }
}

/// Finish-time goals gated by HR compliance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeGoal {
    /// Finish under two and a half hours
    Sub230,
    /// Finish under two hours
    Sub200,
}

impl TimeGoal {
    /// Row title in the goal table
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Sub230 => "Finish under 2:30",
            Self::Sub200 => "Finish under 2:00",
        }
    }
}

/// Everything the report needs about one dataset snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAssessment {
    /// Latest run date; `None` for an empty dataset
    pub latest_date: Option<NaiveDate>,
    /// HR gate evaluated at the latest date
    pub hr_compliance: HrComplianceReport,
    /// Finish goal
    pub finish: GoalStatus,
    /// Sub-2:30 goal
    pub sub_2_30: GoalStatus,
    /// Sub-2:00 goal
    pub sub_2_00: GoalStatus,
    /// Pace-confidence level
    pub pace: PaceConfidence,
}

/// Rule engine over a run dataset snapshot
#[derive(Debug, Clone, Default)]
pub struct GoalEvaluator {
    config: GoalConfig,
}

impl GoalEvaluator {
    /// Create an evaluator with the given thresholds
    #[must_use]
    pub const fn new(config: GoalConfig) -> Self {
        Self { config }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn config(&self) -> &GoalConfig {
        &self.config
    }

    /// HR gate over `records`, with "today" defaulting to the latest run
    #[must_use]
    pub fn hr_compliance(
        &self,
        records: &[RunRecord],
        today: Option<NaiveDate>,
    ) -> HrComplianceReport {
        compute_hr_compliance(records, today, self.config.hr_gate_window_days)
    }

    /// Finish goal: consistency plus long-run duration over the finish window
    #[must_use]
    pub fn finish_goal(&self, records: &[RunRecord]) -> GoalStatus {
        let Some(today) = latest_date(records) else {
            return GoalStatus::new(GoalLabel::NotOnTrack, NO_RUNS_EVIDENCE);
        };

        let lookback = self.config.finish_lookback_days;
        let start = window_start(today, lookback.saturating_sub(1));
        let window: Vec<&RunRecord> = in_window(records, start, today).collect();

        let days = (today - start).num_days() + 1;
        let weeks = (days as f64 / DAYS_PER_WEEK).max(MIN_WINDOW_WEEKS);
        let runs_per_week = window.len() as f64 / weeks;

        let longest_long_run = window
            .iter()
            .filter(|run| run.run_type() == RunCategory::Long)
            .map(|run| run.duration_min())
            .fold(0.0_f64, f64::max);

        let label = if runs_per_week >= self.config.min_runs_per_week
            && longest_long_run >= self.config.long_run_min_target
        {
            GoalLabel::OnTrack
        } else if runs_per_week >= self.config.at_risk_runs_per_week {
            GoalLabel::AtRisk
        } else {
            GoalLabel::NotOnTrack
        };

        GoalStatus::new(
            label,
            format!(
                "{runs_per_week:.1} runs/week (last {lookback}d); longest long run {longest_long_run:.0} min."
            ),
        )
    }

    /// Time goal, hard-failed by the HR gate
    ///
    /// `_goal` is accepted so both goals share one call site; the rule does
    /// not yet distinguish them.
    #[must_use]
    pub fn time_goal(
        &self,
        records: &[RunRecord],
        _goal: TimeGoal,
        hr_compliance: &HrComplianceReport,
    ) -> GoalStatus {
        if records.is_empty() {
            return GoalStatus::new(GoalLabel::NotOnTrack, NO_RUNS_EVIDENCE);
        }

        if !hr_compliance.passed {
            let evidence = hr_compliance.first_failure().map_or_else(
                || GATE_FAILED_EVIDENCE.to_owned(),
                |f| {
                    format!(
                        "HR cap exceeded: {} avg HR {} > {} on {}.",
                        f.run_type, f.avg_hr, f.cap, f.date
                    )
                },
            );
            return GoalStatus::new(GoalLabel::NotOnTrack, evidence);
        }

        GoalStatus::new(GoalLabel::Possible, GATE_PASSED_EVIDENCE)
    }

    /// Pace-confidence level over the whole dataset
    #[must_use]
    pub fn pace_confidence(&self, records: &[RunRecord]) -> PaceConfidence {
        PaceConfidence::from_records(records)
    }

    /// Evaluate every goal against one snapshot
    #[must_use]
    pub fn assess(&self, records: &[RunRecord]) -> GoalAssessment {
        let latest = latest_date(records);
        let hr_compliance = self.hr_compliance(records, latest);
        let finish = self.finish_goal(records);
        let sub_2_30 = self.time_goal(records, TimeGoal::Sub230, &hr_compliance);
        let sub_2_00 = self.time_goal(records, TimeGoal::Sub200, &hr_compliance);

        tracing::info!(
            runs = records.len(),
            hr.passed = hr_compliance.passed,
            finish = %finish.label,
            "Goals assessed"
        );

        GoalAssessment {
            latest_date: latest,
            hr_compliance,
            finish,
            sub_2_30,
            sub_2_00,
            pace: self.pace_confidence(records),
        }
    }
}
