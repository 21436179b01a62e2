// ABOUTME: Goal engine configuration with environment overrides and validation
// ABOUTME: Window lengths and runs-per-week / long-run thresholds for the goal heuristics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

use std::env;

use hm_core::constants::{finish_goal, windows};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Goal configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A window length override could not be parsed or is not positive
    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    /// A threshold override could not be parsed or is out of range
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),
}

/// Thresholds and windows used by [`crate::GoalEvaluator`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalConfig {
    /// Days before "today" still inside the HR gate window
    pub hr_gate_window_days: i64,
    /// Length of the finish-goal window in days, latest day included
    pub finish_lookback_days: i64,
    /// Runs per week required for "on track"
    pub min_runs_per_week: f64,
    /// Runs per week required for "at risk" rather than "not on track"
    pub at_risk_runs_per_week: f64,
    /// Longest long run, in minutes, required for "on track"
    pub long_run_min_target: f64,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            hr_gate_window_days: windows::HR_GATE_WINDOW_DAYS,
            finish_lookback_days: windows::FINISH_LOOKBACK_DAYS,
            min_runs_per_week: finish_goal::MIN_RUNS_PER_WEEK,
            at_risk_runs_per_week: finish_goal::AT_RISK_RUNS_PER_WEEK,
            long_run_min_target: finish_goal::LONG_RUN_MIN_TARGET,
        }
    }
}

impl GoalConfig {
    /// Load configuration from environment variables, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set but does not parse, or if
    /// the resulting configuration fails [`GoalConfig::validate`]
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(val) = env::var("HM_HR_GATE_WINDOW_DAYS") {
            config.hr_gate_window_days = val
                .parse()
                .map_err(|_| ConfigError::InvalidWindow("HM_HR_GATE_WINDOW_DAYS".into()))?;
        }

        if let Ok(val) = env::var("HM_FINISH_LOOKBACK_DAYS") {
            config.finish_lookback_days = val
                .parse()
                .map_err(|_| ConfigError::InvalidWindow("HM_FINISH_LOOKBACK_DAYS".into()))?;
        }

        if let Ok(val) = env::var("HM_MIN_RUNS_PER_WEEK") {
            config.min_runs_per_week = val
                .parse()
                .map_err(|_| ConfigError::InvalidThreshold("HM_MIN_RUNS_PER_WEEK".into()))?;
        }

        if let Ok(val) = env::var("HM_LONG_RUN_MIN_TARGET") {
            config.long_run_min_target = val
                .parse()
                .map_err(|_| ConfigError::InvalidThreshold("HM_LONG_RUN_MIN_TARGET".into()))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for windows outside `0..=MAX_WINDOW_DAYS`
    /// (the finish window must be at least one day), negative thresholds, or
    /// an at-risk threshold above the on-track threshold
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0..=windows::MAX_WINDOW_DAYS).contains(&self.hr_gate_window_days) {
            return Err(ConfigError::InvalidWindow(format!(
                "hr_gate_window_days must be within 0..={}, got {}",
                windows::MAX_WINDOW_DAYS,
                self.hr_gate_window_days
            )));
        }
        if !(1..=windows::MAX_WINDOW_DAYS).contains(&self.finish_lookback_days) {
            return Err(ConfigError::InvalidWindow(format!(
                "finish_lookback_days must be within 1..={}, got {}",
                windows::MAX_WINDOW_DAYS,
                self.finish_lookback_days
            )));
        }
        if self.min_runs_per_week < 0.0 || self.long_run_min_target < 0.0 {
            return Err(ConfigError::InvalidThreshold(
                "thresholds must be non-negative".into(),
            ));
        }
        if self.at_risk_runs_per_week > self.min_runs_per_week {
            return Err(ConfigError::InvalidThreshold(format!(
                "at_risk_runs_per_week ({}) exceeds min_runs_per_week ({})",
                self.at_risk_runs_per_week, self.min_runs_per_week
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults_validate() {
        let config = GoalConfig::default();
        assert_eq!(config.hr_gate_window_days, 14);
        assert_eq!(config.finish_lookback_days, 28);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_at_risk_above_on_track_rejected() {
        let config = GoalConfig {
            at_risk_runs_per_week: 3.0,
            ..GoalConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_oversized_windows_rejected() {
        let huge_gate = GoalConfig {
            hr_gate_window_days: i64::MAX / 1000,
            ..GoalConfig::default()
        };
        assert!(matches!(
            huge_gate.validate(),
            Err(ConfigError::InvalidWindow(_))
        ));

        let huge_finish = GoalConfig {
            finish_lookback_days: windows::MAX_WINDOW_DAYS + 1,
            ..GoalConfig::default()
        };
        assert!(matches!(
            huge_finish.validate(),
            Err(ConfigError::InvalidWindow(_))
        ));

        let longest = GoalConfig {
            hr_gate_window_days: windows::MAX_WINDOW_DAYS,
            finish_lookback_days: windows::MAX_WINDOW_DAYS,
            ..GoalConfig::default()
        };
        assert!(longest.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_override_and_parse_error() {
        env::set_var("HM_FINISH_LOOKBACK_DAYS", "21");
        let config = GoalConfig::from_env().unwrap();
        assert_eq!(config.finish_lookback_days, 21);

        env::set_var("HM_FINISH_LOOKBACK_DAYS", "three weeks");
        assert_eq!(
            GoalConfig::from_env(),
            Err(ConfigError::InvalidWindow("HM_FINISH_LOOKBACK_DAYS".into()))
        );
        env::remove_var("HM_FINISH_LOOKBACK_DAYS");
    }
}
