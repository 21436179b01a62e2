// ABOUTME: Markdown goal-status block - weeks to race, pace confidence, HR gate, goal table
// ABOUTME: Rendered from a GoalAssessment; an empty dataset yields a minimal "no runs" block
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

use std::fmt::Write as _;

use chrono::NaiveDate;
use hm_core::constants::pace_confidence::MAX_LEVEL;
use hm_core::constants::units::{DAYS_PER_WEEK, SECONDS_PER_MINUTE};
use hm_core::models::RunCategory;
use hm_intelligence::{GoalAssessment, GoalStatus, HrComplianceReport, PaceConfidence, TimeGoal};

const FINISH_GOAL_TITLE: &str = "Finish the half marathon";

/// Weeks between the latest run and race day, negative once the race is past
#[must_use]
pub fn weeks_to_race(latest: NaiveDate, race_date: NaiveDate) -> f64 {
    (race_date - latest).num_days() as f64 / DAYS_PER_WEEK
}

/// Pace in minutes per mile as `m:ss /mi`
#[must_use]
pub fn format_pace(min_per_mile: f64) -> String {
    let total_secs = (min_per_mile * SECONDS_PER_MINUTE).round().max(0.0) as u64;
    format!("{}:{:02} /mi", total_secs / 60, total_secs % 60)
}

fn pace_line(pace: &PaceConfidence) -> String {
    let mean = if pace.mean_pace > 0.0 {
        format_pace(pace.mean_pace)
    } else {
        "n/a".to_owned()
    };
    format!(
        "**Pace confidence:** {} {}/{MAX_LEVEL} ({}), mean pace {mean}",
        pace.bar(),
        pace.level,
        pace.label()
    )
}

fn hr_lines(report: &HrComplianceReport) -> Vec<String> {
    let verdict = if report.passed { "✅ Pass" } else { "❌ Fail" };
    let mut lines = vec![format!(
        "**HR compliance ({}):** {verdict}",
        report.window_label()
    )];

    for run_type in RunCategory::ALL {
        let counts = report.counts_for(run_type);
        lines.push(format!(
            "- {run_type} cap {}: {}/{} pass",
            counts.cap,
            counts.pass,
            counts.total()
        ));
    }

    if !report.passed {
        if let Some(failure) = report.first_failure() {
            lines.push(format!(
                "- First failure: **{}** avg HR **{}** > {} on **{}**",
                failure.run_type, failure.avg_hr, failure.cap, failure.date
            ));
        }
    }
    lines
}

fn table_row(title: &str, status: &GoalStatus) -> String {
    format!("| {title} | {} | {} |", status.label, status.evidence)
}

/// Render the block placed between the goal-status markers
///
/// `today` is only used for the timestamp of an empty dataset.
#[must_use]
pub fn build_goal_block(
    assessment: &GoalAssessment,
    race_date: NaiveDate,
    today: NaiveDate,
) -> String {
    let Some(latest) = assessment.latest_date else {
        return format!("_Last updated: {today}_\n\nNo runs yet.");
    };

    let mut block = String::new();
    let _ = writeln!(
        block,
        "**Weeks to race:** {:.1}\n",
        weeks_to_race(latest, race_date)
    );
    let _ = writeln!(block, "{}\n", pace_line(&assessment.pace));

    for line in hr_lines(&assessment.hr_compliance) {
        let _ = writeln!(block, "{line}");
    }
    block.push('\n');

    let rows = [
        table_row(FINISH_GOAL_TITLE, &assessment.finish),
        table_row(TimeGoal::Sub230.title(), &assessment.sub_2_30),
        table_row(TimeGoal::Sub200.title(), &assessment.sub_2_00),
    ];
    block.push_str("| Goal | Status | Evidence |\n|---|---|---|\n");
    for row in rows {
        let _ = writeln!(block, "{row}");
    }

    let _ = write!(block, "\n_Last updated: {latest}_");
    block
}
