// ABOUTME: Core data models for the half-marathon goal tracker
// ABOUTME: Re-exports RunRecord, RunRecordBuilder and the RunCategory enumeration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

//! # Data Models
//!
//! - `RunRecord`: one summarized activity file, the unit of the run dataset
//! - `RunCategory`: easy / long / threshold, with the per-category heart-rate cap

mod category;
mod run;

pub use category::{ParseCategoryError, RunCategory};
pub use run::{iso_week_label, pace_min_per_mile, RunRecord, RunRecordBuilder};
