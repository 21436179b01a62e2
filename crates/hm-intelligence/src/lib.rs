// ABOUTME: Goal-evaluation rule engine for the half-marathon goal tracker
// ABOUTME: Evaluates HR compliance, finish likelihood, time goals, and pace confidence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

#![deny(unsafe_code)]

//! # HM Intelligence
//!
//! Pure functions over a run dataset snapshot. Nothing here performs I/O or
//! keeps state between calls: every status is recomputed from the records it
//! is handed and discarded after rendering.
//!
//! ## Modules
//!
//! - **`hr_compliance`**: rolling-window heart-rate gate
//! - **goals**: finish goal and the sub-2:30 / sub-2:00 time goals
//! - **`pace_confidence`**: 1-5 ordinal from mean non-long pace
//! - **config**: thresholds and window lengths

/// Goal engine configuration (windows and thresholds)
pub mod config;

/// Rolling-window heart-rate compliance gate
pub mod hr_compliance;

/// Finish and time goal heuristics
pub mod goals;

/// Pace-confidence level
pub mod pace_confidence;

mod window;

pub use config::{ConfigError, GoalConfig};
pub use goals::{GoalAssessment, GoalEvaluator, GoalLabel, GoalStatus, TimeGoal};
pub use hr_compliance::{CategoryCompliance, HrComplianceReport, HrViolation};
pub use pace_confidence::PaceConfidence;
