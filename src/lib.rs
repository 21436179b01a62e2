// ABOUTME: Main library entry point for the half-marathon goal tracker
// ABOUTME: FIT ingestion, run dataset storage, and README goal-status reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

#![deny(unsafe_code)]

//! # HM Goal Tracker
//!
//! Tracks one runner's training against a half-marathon goal. Two batch
//! entry points share this library:
//!
//! - `ingest-runs` decodes the FIT files under `data/raw/{easy,long,threshold}`
//!   and rewrites `data/processed/runs.parquet` and `runs.csv`.
//! - `update-readme` loads the dataset, evaluates the goals, and replaces the
//!   goal-status block of `README.md`.
//!
//! ## Architecture
//!
//! - **fit**: FIT session summaries via `fitparser`, and a minimal encoder
//! - **ingestion**: Category directory scan and record derivation
//! - **dataset**: Parquet and CSV persistence of the run dataset
//! - **report**: Markdown block assembly and marker substitution
//! - **config** / **logging**: Environment-driven setup
//!
//! The rule engine lives in `hm-intelligence` and the shared types in
//! `hm-core`; both are re-exported here.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use hm_goal_tracker::config::TrackerConfig;
//! use hm_goal_tracker::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = TrackerConfig::from_env()?;
//!     let outcome = hm_goal_tracker::ingestion::ingest(&config)?;
//!     println!("{} runs ingested", outcome.files);
//!     hm_goal_tracker::report::update_readme(&config)?;
//!     Ok(())
//! }
//! ```

/// Tracker configuration (root, paths, race date)
pub mod config;

/// Run dataset persistence
pub mod dataset;

/// FIT binary codec
pub mod fit;

/// Category directory scan and record derivation
pub mod ingestion;

/// Logging setup
pub mod logging;

/// Goal-status report
pub mod report;

pub use hm_core::{constants, errors, models};

/// Rule engine: HR gate, goal heuristics, pace confidence
pub use hm_intelligence as intelligence;
