// ABOUTME: Unit conversion constants for distance, time, and FIT timestamps
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

/// Meters per statute mile
pub const METERS_PER_MILE: f64 = 1609.344;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Days per week
pub const DAYS_PER_WEEK: f64 = 7.0;

/// Seconds between the Unix epoch and the FIT epoch (1989-12-31T00:00:00Z)
pub const FIT_EPOCH_OFFSET_SECS: i64 = 631_065_600;
