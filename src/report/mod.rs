// ABOUTME: README goal-status report - assembles the markdown block and substitutes it between markers
// ABOUTME: Ties the dataset snapshot, the goal evaluator, and the report template together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

/// Markdown block assembly
pub mod goal_block;
/// Marker substitution in the target document
pub mod readme;

pub use goal_block::{build_goal_block, format_pace, weeks_to_race};
pub use readme::{replace_goal_block, update_document, GOAL_STATUS_END, GOAL_STATUS_START};

use chrono::{NaiveDate, Utc};
use hm_core::errors::AppResult;
use hm_intelligence::{GoalAssessment, GoalEvaluator};
use tracing::info;

use crate::config::TrackerConfig;
use crate::dataset::{DatasetPaths, RunDataset};

/// Evaluate `dataset` and render the goal-status block
#[must_use]
pub fn render_block(
    dataset: &RunDataset,
    evaluator: &GoalEvaluator,
    race_date: NaiveDate,
    today: NaiveDate,
) -> String {
    let assessment = evaluator.assess(dataset.records());
    build_goal_block(&assessment, race_date, today)
}

/// Load the dataset, regenerate the block, and rewrite the README
///
/// Returns the assessment the block was rendered from.
///
/// # Errors
///
/// Returns dataset load errors, or any error from [`update_document`]
pub fn update_readme(config: &TrackerConfig) -> AppResult<GoalAssessment> {
    let dataset = RunDataset::load(&DatasetPaths::from_config(config))?;
    let evaluator = GoalEvaluator::new(config.goals().clone());
    let today = Utc::now().date_naive();

    let assessment = evaluator.assess(dataset.records());
    let block = build_goal_block(&assessment, config.race_date(), today);
    update_document(&config.readme_path(), &block)?;

    info!(runs = dataset.len(), race_date = %config.race_date(), "README updated");
    Ok(assessment)
}
