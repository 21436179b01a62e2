// ABOUTME: Ingestion entry point - decodes raw FIT files and rewrites the run dataset
// ABOUTME: Runs with no arguments; --root overrides HM_TRACKER_ROOT
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

//! Rebuild `data/processed/runs.parquet` and `runs.csv` from `data/raw`.
//!
//! Usage:
//! ```bash
//! cargo run --bin ingest-runs
//! cargo run --bin ingest-runs -- --root /path/to/tracker
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use hm_goal_tracker::config::TrackerConfig;
use hm_goal_tracker::ingestion;
use hm_goal_tracker::logging;

#[derive(Parser)]
#[command(
    name = "ingest-runs",
    about = "Decode FIT files into the run dataset",
    long_about = "Scan data/raw/{easy,long,threshold} for .fit files and rewrite data/processed/runs.parquet and runs.csv"
)]
struct IngestArgs {
    /// Tracker root (overrides `HM_TRACKER_ROOT`)
    #[arg(long)]
    root: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = IngestArgs::parse();
    logging::init_from_env("ingest-runs")?;

    let mut config = TrackerConfig::from_env()?;
    if let Some(root) = args.root {
        config = config.with_root(root);
    }

    let report = ingestion::ingest(&config)?;
    if report.written {
        println!(
            "Wrote {} runs -> {} and {}",
            report.files,
            report.paths.parquet.display(),
            report.paths.csv.display()
        );
    } else {
        println!(
            "No .fit files found under {}/*",
            config.raw_dir().display()
        );
    }
    Ok(())
}
