// ABOUTME: Integration tests for the goal rule engine over synthetic run datasets
// ABOUTME: Window boundaries of the HR gate and finish goal, time-goal gating, and pace confidence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use chrono::{Duration, NaiveDate};
use helpers::fit_builder::{day, run};
use hm_goal_tracker::intelligence::{GoalConfig, GoalEvaluator, GoalLabel, TimeGoal};
use hm_goal_tracker::models::{RunCategory, RunRecord};

const LATEST: (i32, u32, u32) = (2026, 3, 28);

fn latest() -> NaiveDate {
    day(LATEST.0, LATEST.1, LATEST.2)
}

fn days_before(n: i64) -> NaiveDate {
    latest() - Duration::days(n)
}

/// `count` easy runs spread back from the latest day, plus one long run of `long_minutes`
fn training_block(count: usize, long_minutes: f64) -> Vec<RunRecord> {
    let mut records = vec![run(latest(), RunCategory::Long, long_minutes, 6.0, Some(150))];
    for i in 1..count {
        records.push(run(
            days_before(i64::try_from(i).unwrap() * 3),
            RunCategory::Easy,
            35.0,
            3.0,
            Some(140),
        ));
    }
    records
}

#[test]
fn test_hr_window_includes_fourteenth_day_back() {
    let records = vec![
        run(days_before(14), RunCategory::Easy, 30.0, 3.0, Some(150)),
        run(latest(), RunCategory::Easy, 30.0, 3.0, Some(140)),
    ];
    let report = GoalEvaluator::default().hr_compliance(&records, None);
    assert!(!report.passed);
    assert_eq!(report.window_start, Some(days_before(14)));
    assert_eq!(report.window_end, Some(latest()));
    assert_eq!(report.first_failure().unwrap().date, days_before(14));
}

#[test]
fn test_hr_window_excludes_fifteenth_day_back() {
    let records = vec![
        run(days_before(15), RunCategory::Easy, 30.0, 3.0, Some(150)),
        run(latest(), RunCategory::Easy, 30.0, 3.0, Some(140)),
    ];
    let report = GoalEvaluator::default().hr_compliance(&records, None);
    assert!(report.passed);
    assert_eq!(report.counts_for(RunCategory::Easy).pass, 1);
    assert_eq!(report.counts_for(RunCategory::Easy).total(), 1);
}

#[test]
fn test_hr_gate_explicit_today() {
    let records = vec![run(days_before(3), RunCategory::Threshold, 30.0, 3.5, Some(170))];
    let evaluator = GoalEvaluator::default();

    assert!(!evaluator.hr_compliance(&records, Some(latest())).passed);
    assert!(evaluator
        .hr_compliance(&records, Some(latest() + Duration::days(30)))
        .passed);
}

#[test]
fn test_gate_passes_exactly_when_no_failures() {
    let evaluator = GoalEvaluator::default();
    let datasets = [
        vec![run(latest(), RunCategory::Easy, 30.0, 3.0, Some(145))],
        vec![run(latest(), RunCategory::Easy, 30.0, 3.0, Some(146))],
        vec![run(latest(), RunCategory::Long, 90.0, 7.0, None)],
        training_block(8, 70.0),
    ];
    for records in &datasets {
        let report = evaluator.hr_compliance(records, None);
        assert_eq!(report.passed, report.failures.is_empty());
        let failed: usize = report.counts.iter().map(|c| c.fail).sum();
        assert_eq!(failed, report.failures.len());
    }
}

#[test]
fn test_finish_on_track_at_boundary() {
    let status = GoalEvaluator::default().finish_goal(&training_block(8, 60.0));
    assert_eq!(status.label, GoalLabel::OnTrack);
    assert_eq!(
        status.evidence,
        "2.0 runs/week (last 28d); longest long run 60 min."
    );
}

#[test]
fn test_finish_short_long_run_is_at_risk() {
    let status = GoalEvaluator::default().finish_goal(&training_block(8, 59.0));
    assert_eq!(status.label, GoalLabel::AtRisk);
}

#[test]
fn test_finish_at_risk_and_not_on_track_thresholds() {
    let evaluator = GoalEvaluator::default();
    assert_eq!(
        evaluator.finish_goal(&training_block(6, 90.0)).label,
        GoalLabel::AtRisk
    );
    assert_eq!(
        evaluator.finish_goal(&training_block(5, 90.0)).label,
        GoalLabel::NotOnTrack
    );
    let sparse = evaluator.finish_goal(&training_block(4, 90.0));
    assert_eq!(sparse.label, GoalLabel::NotOnTrack);
    assert!(sparse.evidence.starts_with("1.0 runs/week"));
}

#[test]
fn test_finish_window_is_twenty_eight_days() {
    let evaluator = GoalEvaluator::default();

    let mut inside = training_block(7, 60.0);
    inside.push(run(days_before(27), RunCategory::Easy, 30.0, 3.0, Some(140)));
    assert_eq!(evaluator.finish_goal(&inside).label, GoalLabel::OnTrack);

    let mut outside = training_block(7, 60.0);
    outside.push(run(days_before(28), RunCategory::Easy, 30.0, 3.0, Some(140)));
    assert_eq!(evaluator.finish_goal(&outside).label, GoalLabel::AtRisk);
}

#[test]
fn test_custom_finish_thresholds() {
    let evaluator = GoalEvaluator::new(GoalConfig {
        min_runs_per_week: 1.0,
        at_risk_runs_per_week: 0.5,
        long_run_min_target: 45.0,
        ..GoalConfig::default()
    });
    let status = evaluator.finish_goal(&training_block(4, 50.0));
    assert_eq!(status.label, GoalLabel::OnTrack);
}

#[test]
fn test_time_goals_follow_gate() {
    let evaluator = GoalEvaluator::default();

    let compliant = training_block(8, 60.0);
    let gate = evaluator.hr_compliance(&compliant, None);
    for goal in [TimeGoal::Sub230, TimeGoal::Sub200] {
        assert_eq!(
            evaluator.time_goal(&compliant, goal, &gate).label,
            GoalLabel::Possible
        );
    }

    let mut hot = compliant;
    hot.push(run(days_before(2), RunCategory::Easy, 30.0, 3.0, Some(151)));
    let assessment = evaluator.assess(&hot);
    assert_eq!(assessment.sub_2_30.label, GoalLabel::NotOnTrack);
    assert_eq!(assessment.sub_2_00.label, GoalLabel::NotOnTrack);
    assert_eq!(
        assessment.sub_2_30.evidence,
        format!("HR cap exceeded: easy avg HR 151 > 145 on {}.", days_before(2))
    );
}

#[test]
fn test_empty_dataset_assessment() {
    let assessment = GoalEvaluator::default().assess(&[]);
    assert_eq!(assessment.latest_date, None);
    assert!(assessment.hr_compliance.passed);
    assert!(assessment.hr_compliance.counts.is_empty());
    assert_eq!(assessment.finish.label, GoalLabel::NotOnTrack);
    assert_eq!(assessment.finish.evidence, "No runs recorded yet.");
    assert_eq!(assessment.sub_2_30.label, GoalLabel::NotOnTrack);
    assert_eq!(assessment.sub_2_00.label, GoalLabel::NotOnTrack);
    assert_eq!(assessment.pace.level, 1);
}

#[test]
fn test_pace_confidence_is_monotone_in_pace() {
    let evaluator = GoalEvaluator::default();
    let mut previous = 0_u8;
    // Slowest to fastest: the level must never drop
    for minutes in [50.0, 42.0, 37.0, 33.0, 31.0, 28.0] {
        let records = vec![run(latest(), RunCategory::Easy, minutes, 3.0, Some(140))];
        let level = evaluator.pace_confidence(&records).level;
        assert!((1..=5).contains(&level));
        assert!(level >= previous, "{minutes} min gave level {level} < {previous}");
        previous = level;
    }
    assert_eq!(previous, 5);
}

#[test]
fn test_pace_confidence_excludes_long_runs() {
    let evaluator = GoalEvaluator::default();
    let base = vec![
        run(days_before(2), RunCategory::Easy, 33.0, 3.0, Some(140)),
        run(days_before(1), RunCategory::Threshold, 29.0, 3.0, Some(160)),
    ];
    let before = evaluator.pace_confidence(&base);

    let mut with_long = base;
    with_long.push(run(latest(), RunCategory::Long, 200.0, 10.0, Some(150)));
    let after = evaluator.pace_confidence(&with_long);

    assert_eq!(before, after);
    assert!((after.mean_pace - 10.333_333).abs() < 1e-4);
    assert_eq!(after.level, 4);
}

#[test]
fn test_pace_confidence_without_pace() {
    let records = vec![run(latest(), RunCategory::Easy, 30.0, 0.0, Some(140))];
    let pace = GoalEvaluator::default().pace_confidence(&records);
    assert_eq!(pace.level, 1);
    assert!(pace.mean_pace.abs() < f64::EPSILON);
}

#[test]
fn test_oversized_windows_do_not_panic() {
    let config = GoalConfig {
        hr_gate_window_days: i64::MAX / 1000,
        finish_lookback_days: i64::MAX,
        ..GoalConfig::default()
    };
    assert!(config.validate().is_err());

    let records = vec![run(latest(), RunCategory::Easy, 30.0, 3.0, Some(150))];
    let assessment = GoalEvaluator::new(config).assess(&records);
    assert!(!assessment.hr_compliance.passed);
    assert_eq!(assessment.hr_compliance.window_start, Some(NaiveDate::MIN));
    assert_eq!(assessment.finish.label, GoalLabel::NotOnTrack);
}
