// ABOUTME: Synthetic run seeder - writes plausible FIT activity files into the raw category directories
// ABOUTME: Lets the ingestion and report pipeline be exercised without a watch export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

//! Synthetic run seeder.
//!
//! Usage:
//! ```bash
//! # Twelve weeks of training ending today
//! cargo run --bin seed-runs
//!
//! # Reproducible data ending on a fixed day
//! cargo run --bin seed-runs -- --seed 7 --end-date 2026-03-28 --weeks 16
//!
//! # Add some easy runs over the HR cap
//! cargo run --bin seed-runs -- --hot-runs 2
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use clap::Parser;
use hm_goal_tracker::config::TrackerConfig;
use hm_goal_tracker::constants::units::{METERS_PER_MILE, SECONDS_PER_MINUTE};
use hm_goal_tracker::fit::{encode_activity, SessionSpec};
use hm_goal_tracker::logging;
use hm_goal_tracker::models::RunCategory;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-runs",
    about = "Synthetic FIT run seeder",
    long_about = "Write synthetic easy, long, and threshold FIT files under data/raw for testing"
)]
struct SeedArgs {
    /// Tracker root (overrides `HM_TRACKER_ROOT`)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Number of training weeks to generate
    #[arg(long, default_value = "12")]
    weeks: u32,

    /// Last day of generated training (default: today, UTC)
    #[arg(long)]
    end_date: Option<NaiveDate>,

    /// Easy runs in the final week whose average HR exceeds the cap
    #[arg(long, default_value = "0")]
    hot_runs: u32,

    /// Random seed for reproducible data (optional)
    #[arg(long)]
    seed: Option<u64>,
}

/// Generation ranges for one category
struct RunProfile {
    category: RunCategory,
    /// Day offsets within the week
    weekdays: &'static [i64],
    /// Distance range in meters
    distance_range: (f64, f64),
    /// Pace range in minutes per mile
    pace_range: (f64, f64),
    /// Average heart rate range, bpm
    heart_rate_range: (u8, u8),
}

const PROFILES: [RunProfile; 3] = [
    RunProfile {
        category: RunCategory::Easy,
        weekdays: &[1, 3],
        distance_range: (4_800.0, 8_000.0),
        pace_range: (11.5, 13.5),
        heart_rate_range: (128, 145),
    },
    RunProfile {
        category: RunCategory::Long,
        weekdays: &[6],
        distance_range: (9_600.0, 19_300.0),
        pace_range: (12.0, 14.0),
        heart_rate_range: (135, 155),
    },
    RunProfile {
        category: RunCategory::Threshold,
        weekdays: &[4],
        distance_range: (4_800.0, 8_000.0),
        pace_range: (9.5, 11.0),
        heart_rate_range: (150, 165),
    },
];

fn write_run(dir: &Path, name: &str, spec: &SessionSpec) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, encode_activity(spec))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

fn main() -> Result<()> {
    let args = SeedArgs::parse();
    logging::init_from_env("seed-runs")?;

    let mut config = TrackerConfig::from_env()?;
    if let Some(root) = args.root {
        config = config.with_root(root);
    }

    let end_date = args.end_date.unwrap_or_else(|| Utc::now().date_naive());
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = StdRng::seed_from_u64(seed);
    info!(seed, weeks = args.weeks, %end_date, "Seeding synthetic runs");

    let first_day = end_date - Duration::weeks(i64::from(args.weeks));
    let start_clock = NaiveTime::from_hms_opt(6, 30, 0).unwrap_or(NaiveTime::MIN);
    let mut written = 0_usize;
    let mut hot_remaining = args.hot_runs;

    for profile in &PROFILES {
        let dir = config.raw_dir().join(profile.category.dir_name());
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        for week in 0..i64::from(args.weeks) {
            for offset in profile.weekdays {
                let day = first_day + Duration::weeks(week) + Duration::days(*offset);
                if day > end_date {
                    continue;
                }

                let distance_m = rng.gen_range(profile.distance_range.0..=profile.distance_range.1);
                let pace = rng.gen_range(profile.pace_range.0..=profile.pace_range.1);
                let duration_secs = distance_m / METERS_PER_MILE * pace * SECONDS_PER_MINUTE;

                let is_last_week = end_date - day < Duration::days(7);
                let avg_hr = if profile.category == RunCategory::Easy
                    && is_last_week
                    && hot_remaining > 0
                {
                    hot_remaining -= 1;
                    rng.gen_range(150..=165)
                } else {
                    rng.gen_range(profile.heart_rate_range.0..=profile.heart_rate_range.1)
                };

                let spec = SessionSpec {
                    start_time: day.and_time(start_clock).and_utc(),
                    duration_secs,
                    distance_m,
                    avg_heart_rate: Some(avg_hr),
                };
                let name = format!("{day}-{}.fit", profile.category);
                write_run(&dir, &name, &spec)?;
                written += 1;
            }
        }
    }

    info!(files = written, raw_dir = %config.raw_dir().display(), "Synthetic runs written");
    println!("Wrote {written} synthetic runs under {}", config.raw_dir().display());
    Ok(())
}
