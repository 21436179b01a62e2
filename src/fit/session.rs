// ABOUTME: Session summary extraction - start time, duration, distance, and average HR
// ABOUTME: Reads the first session message decoded by fitparser, with timer and start-time fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

use chrono::{DateTime, Utc};
use fitparser::profile::MesgNum;
use fitparser::{FitDataField, FitDataRecord, Value};
use hm_core::constants::units::FIT_EPOCH_OFFSET_SECS;

use super::profile::DATE_TIME_MIN;
use super::FitError;

/// Totals of one activity, taken from its first `session` message
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    /// Start of the session, falling back to the session timestamp
    pub start_time: Option<DateTime<Utc>>,
    /// Timer time in seconds, falling back to elapsed time
    pub duration_secs: Option<f64>,
    /// Distance in meters
    pub distance_m: Option<f64>,
    /// Average heart rate in bpm
    pub avg_heart_rate: Option<u32>,
}

impl SessionSummary {
    /// Summarize the first session among decoded `records`
    ///
    /// # Errors
    ///
    /// Returns [`FitError::NoSession`] if there is no `session` message
    pub fn from_records(records: &[FitDataRecord]) -> Result<Self, FitError> {
        let session = records
            .iter()
            .find(|record| matches!(record.kind(), MesgNum::Session))
            .ok_or(FitError::NoSession)?;
        Ok(Self::from_session(session))
    }

    /// Decode and summarize in one step
    ///
    /// # Errors
    ///
    /// Returns [`FitError::Empty`], a decoding error, or [`FitError::NoSession`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FitError> {
        if bytes.is_empty() {
            return Err(FitError::Empty);
        }
        Self::from_records(&fitparser::from_bytes(bytes)?)
    }

    fn from_session(session: &FitDataRecord) -> Self {
        let value = |name: &str| {
            session
                .fields()
                .iter()
                .find(|field| field.name() == name)
                .map(FitDataField::value)
        };
        let date_time = |name: &str| value(name).and_then(as_date_time);
        let seconds = |name: &str| value(name).and_then(as_f64);

        Self {
            start_time: date_time("start_time").or_else(|| date_time("timestamp")),
            duration_secs: seconds("total_timer_time")
                .or_else(|| seconds("total_elapsed_time")),
            distance_m: value("total_distance").and_then(as_f64),
            avg_heart_rate: value("avg_heart_rate").and_then(as_u32),
        }
    }
}

/// Convert a raw FIT `date_time` to UTC; device-relative values are rejected
#[must_use]
pub fn fit_date_time(raw: u32) -> Option<DateTime<Utc>> {
    if raw < DATE_TIME_MIN {
        return None;
    }
    DateTime::from_timestamp(i64::from(raw) + FIT_EPOCH_OFFSET_SECS, 0)
}

fn as_date_time(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Timestamp(time) => {
            let time = time.with_timezone(&Utc);
            let since_epoch = time.timestamp() - FIT_EPOCH_OFFSET_SECS;
            (since_epoch >= i64::from(DATE_TIME_MIN)).then_some(time)
        }
        Value::UInt32(raw) => fit_date_time(*raw),
        _ => None,
    }
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Float64(v) => Some(*v),
        Value::Float32(v) => Some(f64::from(*v)),
        Value::UInt8(v) | Value::UInt8z(v) => Some(f64::from(*v)),
        Value::UInt16(v) | Value::UInt16z(v) => Some(f64::from(*v)),
        Value::UInt32(v) | Value::UInt32z(v) => Some(f64::from(*v)),
        Value::SInt8(v) => Some(f64::from(*v)),
        Value::SInt16(v) => Some(f64::from(*v)),
        Value::SInt32(v) => Some(f64::from(*v)),
        _ => None,
    }
}

fn as_u32(value: &Value) -> Option<u32> {
    match value {
        Value::UInt8(v) | Value::UInt8z(v) => Some(u32::from(*v)),
        Value::UInt16(v) | Value::UInt16z(v) => Some(u32::from(*v)),
        Value::UInt32(v) | Value::UInt32z(v) => Some(*v),
        Value::Float64(v) if v.fract().abs() < f64::EPSILON && (0.0..=f64::from(u32::MAX)).contains(v) => {
            Some(*v as u32)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fit_epoch() {
        // 1_000_000_000 s after 1989-12-31T00:00:00Z
        let time = fit_date_time(1_000_000_000).unwrap();
        assert_eq!(time, Utc.with_ymd_and_hms(2021, 9, 8, 1, 46, 40).unwrap());
    }

    #[test]
    fn test_device_relative_time_rejected() {
        assert!(fit_date_time(0x0FFF_FFFF).is_none());
        assert!(as_date_time(&Value::UInt32(42)).is_none());
    }

    #[test]
    fn test_numeric_conversions() {
        assert_eq!(as_f64(&Value::Float64(1500.0)), Some(1500.0));
        assert_eq!(as_f64(&Value::UInt32(7)), Some(7.0));
        assert_eq!(as_f64(&Value::String("x".into())), None);
        assert_eq!(as_u32(&Value::UInt8(150)), Some(150));
        assert_eq!(as_u32(&Value::Float64(150.0)), Some(150));
        assert_eq!(as_u32(&Value::Float64(150.5)), None);
    }

    #[test]
    fn test_missing_session() {
        assert_eq!(SessionSummary::from_records(&[]), Err(FitError::NoSession));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(SessionSummary::from_bytes(&[]), Err(FitError::Empty));
    }
}
