// ABOUTME: Report entry point - evaluates goals over the run dataset and rewrites the README block
// ABOUTME: Runs with no arguments; --root and --race-date override the environment, --json dumps the assessment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

//! Regenerate the goal-status block between the README markers.
//!
//! Usage:
//! ```bash
//! cargo run --bin update-readme
//! cargo run --bin update-readme -- --race-date 2026-10-04
//!
//! # Also print the assessment as JSON
//! cargo run --bin update-readme -- --json
//! ```

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use hm_goal_tracker::config::TrackerConfig;
use hm_goal_tracker::{logging, report};

#[derive(Parser)]
#[command(
    name = "update-readme",
    about = "Rewrite the README goal-status block",
    long_about = "Load data/processed/runs.parquet (or runs.csv), evaluate the goals, and replace the GOAL_STATUS block of README.md"
)]
struct UpdateArgs {
    /// Tracker root (overrides `HM_TRACKER_ROOT`)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Race day as YYYY-MM-DD (overrides `HM_RACE_DATE`)
    #[arg(long)]
    race_date: Option<NaiveDate>,

    /// Print the goal assessment as JSON after updating
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = UpdateArgs::parse();
    logging::init_from_env("update-readme")?;

    let mut config = TrackerConfig::from_env()?;
    if let Some(root) = args.root {
        config = config.with_root(root);
    }
    if let Some(race_date) = args.race_date {
        config = config.with_race_date(race_date);
    }

    let assessment = report::update_readme(&config)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        println!("README updated.");
    }
    Ok(())
}
