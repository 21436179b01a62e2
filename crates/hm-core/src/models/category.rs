// ABOUTME: Run category enumeration (easy, long, threshold) inferred from storage location
// ABOUTME: Carries the heart-rate cap and directory name for each category as associated data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::heart_rate_caps::{EASY_HR_CAP, LONG_HR_CAP, THRESHOLD_HR_CAP};

/// Training category of a run
///
/// The category is never read from the activity file itself; it comes from
/// the directory the file was filed under. Variant order matches the lexical
/// order of the labels, so sorting by category and sorting by label agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunCategory {
    /// Conversational-pace aerobic run
    Easy,
    /// Weekly long run
    Long,
    /// Lactate-threshold workout
    Threshold,
}

impl RunCategory {
    /// All categories, in evaluation order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Long, Self::Threshold];

    /// Average heart-rate cap in beats per minute
    #[must_use]
    pub const fn hr_cap(self) -> u32 {
        match self {
            Self::Easy => EASY_HR_CAP,
            Self::Long => LONG_HR_CAP,
            Self::Threshold => THRESHOLD_HR_CAP,
        }
    }

    /// Name of the raw-data directory holding files of this category
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        self.as_str()
    }

    /// Label used in the dataset and in rendered reports
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Long => "long",
            Self::Threshold => "threshold",
        }
    }

    /// Whether runs of this category say anything about race pace
    #[must_use]
    pub const fn is_pace_representative(self) -> bool {
        !matches!(self, Self::Long)
    }
}

impl fmt::Display for RunCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored label is not a known category
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown run category '{0}'")]
pub struct ParseCategoryError(pub String);

impl FromStr for RunCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "long" => Ok(Self::Long),
            "threshold" => Ok(Self::Threshold),
            other => Err(ParseCategoryError(other.to_owned())),
        }
    }
}
