// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for unit conversion, heart-rate caps, and goal thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Unit conversion and measurement constants
pub mod units;

/// Per-category heart-rate caps in beats per minute
pub mod heart_rate_caps {
    /// Cap for easy runs
    pub const EASY_HR_CAP: u32 = 145;
    /// Cap for long runs
    pub const LONG_HR_CAP: u32 = 155;
    /// Cap for threshold runs
    pub const THRESHOLD_HR_CAP: u32 = 165;
}

/// Rolling windows used by the goal heuristics
pub mod windows {
    /// Look-back of the heart-rate compliance gate, in days before "today"
    pub const HR_GATE_WINDOW_DAYS: i64 = 14;
    /// Length of the finish-goal consistency window, in days (inclusive of the latest day)
    pub const FINISH_LOOKBACK_DAYS: i64 = 28;
    /// Longest accepted window of either kind, in days
    pub const MAX_WINDOW_DAYS: i64 = 3650;
}

/// Finish-goal thresholds
pub mod finish_goal {
    /// Average runs per week required for "on track"
    pub const MIN_RUNS_PER_WEEK: f64 = 2.0;
    /// Average runs per week below which the goal is "not on track"
    pub const AT_RISK_RUNS_PER_WEEK: f64 = 1.5;
    /// Longest long run (minutes) required for "on track"
    pub const LONG_RUN_MIN_TARGET: f64 = 60.0;
    /// Guards the runs-per-week division against a zero-length window
    pub const MIN_WINDOW_WEEKS: f64 = 1e-6;
}

/// Pace-confidence breakpoints in minutes per mile
pub mod pace_confidence {
    /// Mean pace strictly below this is level 5
    pub const LEVEL_5_BELOW: f64 = 10.0;
    /// Mean pace strictly below this is level 4
    pub const LEVEL_4_BELOW: f64 = 11.6;
    /// Mean pace strictly below this is level 3
    pub const LEVEL_3_BELOW: f64 = 13.0;
    /// Mean pace at or below this is level 2
    pub const LEVEL_2_AT_MOST: f64 = 15.0;
    /// Number of segments in the rendered confidence bar
    pub const MAX_LEVEL: u8 = 5;
}

/// Race defaults
pub mod race {
    /// Default race day as (year, month, day)
    pub const DEFAULT_RACE_DATE: (i32, u32, u32) = (2026, 4, 11);
}
