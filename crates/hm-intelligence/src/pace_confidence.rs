// ABOUTME: Pace-confidence level - a 1-5 ordinal from mean easy/threshold pace
// ABOUTME: Long runs are excluded as unrepresentative of race pace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

use hm_core::constants::pace_confidence::{
    LEVEL_2_AT_MOST, LEVEL_3_BELOW, LEVEL_4_BELOW, LEVEL_5_BELOW, MAX_LEVEL,
};
use hm_core::models::RunRecord;
use serde::{Deserialize, Serialize};

const FILLED_SEGMENT: char = '█';
const EMPTY_SEGMENT: char = '░';

/// Pace-confidence level with the mean pace it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaceConfidence {
    /// Ordinal in `1..=5`, higher is faster
    pub level: u8,
    /// Mean pace in minutes per mile, 0.0 when no qualifying runs exist
    pub mean_pace: f64,
}

impl PaceConfidence {
    /// Compute the level over all easy and threshold runs with a pace
    #[must_use]
    pub fn from_records(records: &[RunRecord]) -> Self {
        let paces: Vec<f64> = records
            .iter()
            .filter(|run| run.run_type().is_pace_representative())
            .filter_map(RunRecord::avg_pace_minmi)
            .collect();

        if paces.is_empty() {
            return Self {
                level: 1,
                mean_pace: 0.0,
            };
        }

        let mean_pace = paces.iter().sum::<f64>() / paces.len() as f64;
        Self {
            level: level_for_pace(mean_pace),
            mean_pace,
        }
    }

    /// Five-segment bar with `level` filled segments
    #[must_use]
    pub fn bar(&self) -> String {
        let filled = self.level.min(MAX_LEVEL);
        (0..MAX_LEVEL)
            .map(|i| if i < filled { FILLED_SEGMENT } else { EMPTY_SEGMENT })
            .collect()
    }

    /// Finish-time wording for the level
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self.level {
            5 => "Under 2:00",
            4 => "Under 2:30",
            3 => "Around 2:30-2:45",
            2 => "Finish comfortably",
            _ => "Building base",
        }
    }
}

/// Map a mean pace (min/mi) onto the 1-5 scale
#[must_use]
pub fn level_for_pace(mean_pace: f64) -> u8 {
    if mean_pace < LEVEL_5_BELOW {
        5
    } else if mean_pace < LEVEL_4_BELOW {
        4
    } else if mean_pace < LEVEL_3_BELOW {
        3
    } else if mean_pace <= LEVEL_2_AT_MOST {
        2
    } else {
        1
    }
}
