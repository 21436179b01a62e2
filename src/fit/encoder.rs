// ABOUTME: Minimal FIT writer - definition and data messages, 14-byte header, header and file CRCs
// ABOUTME: Used by the synthetic-run seeder and by fixtures to produce decodable activity files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

use chrono::{DateTime, Utc};
use hm_core::constants::units::FIT_EPOCH_OFFSET_SECS;

use super::fit_crc;
use super::profile::{
    file_id_field, mesg_num, session_field, BaseType, DISTANCE_SCALE, FILE_TYPE_ACTIVITY,
    TIME_SCALE,
};

const HEADER_SIZE: u8 = 14;
const PROTOCOL_VERSION: u8 = 0x20;
const PROFILE_VERSION: u16 = 2132;
const DEFINITION_FLAG: u8 = 0x40;
const MANUFACTURER_DEVELOPMENT: u16 = 255;

/// Field layout entry of a definition message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field definition number
    pub number: u8,
    /// Base type of the single element
    pub base_type: BaseType,
}

impl FieldSpec {
    /// Single-element field
    #[must_use]
    pub const fn new(number: u8, base_type: BaseType) -> Self {
        Self { number, base_type }
    }
}

/// Streaming writer for a single-segment, little-endian FIT file
#[derive(Debug, Default)]
pub struct FitEncoder {
    records: Vec<u8>,
    layouts: [Vec<FieldSpec>; 16],
}

impl FitEncoder {
    /// Empty file
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `local` (0-15) to a global message and field layout
    pub fn definition(&mut self, local: u8, global_number: u16, fields: &[FieldSpec]) -> &mut Self {
        let local = local & 0x0F;
        self.records.push(DEFINITION_FLAG | local);
        self.records.push(0);
        self.records.push(0);
        self.records.extend_from_slice(&global_number.to_le_bytes());
        self.records.push(fields.len() as u8);
        for field in fields {
            self.records.push(field.number);
            self.records.push(field.base_type.size() as u8);
            self.records.push(field.base_type.to_byte());
        }
        self.layouts[usize::from(local)] = fields.to_vec();
        self
    }

    /// Data message for `local`; `None` values are written as the invalid sentinel
    ///
    /// Values beyond the defined layout are ignored and missing ones are
    /// treated as `None`.
    pub fn data(&mut self, local: u8, values: &[Option<f64>]) -> &mut Self {
        let local = local & 0x0F;
        self.records.push(local);
        let layout = &self.layouts[usize::from(local)];
        for (index, field) in layout.iter().enumerate() {
            let value = values.get(index).copied().flatten();
            let bits = value.map_or_else(|| field.base_type.invalid_bits(), |v| to_bits(v, field.base_type));
            let size = field.base_type.size();
            self.records.extend_from_slice(&bits.to_le_bytes()[..size]);
        }
        self
    }

    /// Header, records, and trailing CRC
    #[must_use]
    pub fn finish(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(usize::from(HEADER_SIZE) + self.records.len() + 2);
        bytes.push(HEADER_SIZE);
        bytes.push(PROTOCOL_VERSION);
        bytes.extend_from_slice(&PROFILE_VERSION.to_le_bytes());
        bytes.extend_from_slice(&(self.records.len() as u32).to_le_bytes());
        bytes.extend_from_slice(b".FIT");
        let header_crc = fit_crc(&bytes);
        bytes.extend_from_slice(&header_crc.to_le_bytes());
        bytes.extend_from_slice(&self.records);
        let file_crc = fit_crc(&bytes);
        bytes.extend_from_slice(&file_crc.to_le_bytes());
        bytes
    }
}

fn to_bits(value: f64, base_type: BaseType) -> u64 {
    match base_type {
        BaseType::Float32 => u64::from((value as f32).to_bits()),
        BaseType::Float64 => value.to_bits(),
        BaseType::SInt8 => u64::from(value.round() as i8 as u8),
        BaseType::SInt16 => u64::from(value.round() as i16 as u16),
        BaseType::SInt32 => u64::from(value.round() as i32 as u32),
        BaseType::SInt64 => value.round() as i64 as u64,
        _ => value.round().max(0.0) as u64,
    }
}

/// Session totals for a synthetic activity file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSpec {
    /// Session start
    pub start_time: DateTime<Utc>,
    /// Timer time in seconds
    pub duration_secs: f64,
    /// Distance in meters
    pub distance_m: f64,
    /// Average heart rate, omitted when `None`
    pub avg_heart_rate: Option<u8>,
}

/// Seconds since the FIT epoch, saturating at the representable range
fn fit_timestamp(time: DateTime<Utc>) -> f64 {
    (time.timestamp() - FIT_EPOCH_OFFSET_SECS).max(0) as f64
}

/// Encode a minimal activity file: `file_id` followed by one `session`
///
/// The average heart rate field is left out of the session when absent.
#[must_use]
pub fn encode_activity(spec: &SessionSpec) -> Vec<u8> {
    let start = fit_timestamp(spec.start_time);
    let end = start + spec.duration_secs.round();
    let timer = spec.duration_secs * TIME_SCALE;

    let mut session_fields = vec![
        FieldSpec::new(session_field::TIMESTAMP, BaseType::UInt32),
        FieldSpec::new(session_field::START_TIME, BaseType::UInt32),
        FieldSpec::new(session_field::TOTAL_ELAPSED_TIME, BaseType::UInt32),
        FieldSpec::new(session_field::TOTAL_TIMER_TIME, BaseType::UInt32),
        FieldSpec::new(session_field::TOTAL_DISTANCE, BaseType::UInt32),
    ];
    let mut session_values = vec![
        Some(end),
        Some(start),
        Some(timer),
        Some(timer),
        Some(spec.distance_m * DISTANCE_SCALE),
    ];
    if let Some(hr) = spec.avg_heart_rate {
        session_fields.push(FieldSpec::new(session_field::AVG_HEART_RATE, BaseType::UInt8));
        session_values.push(Some(f64::from(hr)));
    }

    let mut encoder = FitEncoder::new();
    encoder
        .definition(
            0,
            mesg_num::FILE_ID,
            &[
                FieldSpec::new(file_id_field::TYPE, BaseType::Enum),
                FieldSpec::new(file_id_field::MANUFACTURER, BaseType::UInt16),
                FieldSpec::new(file_id_field::TIME_CREATED, BaseType::UInt32),
            ],
        )
        .data(
            0,
            &[
                Some(f64::from(FILE_TYPE_ACTIVITY)),
                Some(f64::from(MANUFACTURER_DEVELOPMENT)),
                Some(start),
            ],
        )
        .definition(1, mesg_num::SESSION, &session_fields)
        .data(1, &session_values);
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::fit::SessionSummary;

    #[test]
    fn test_missing_values_use_invalid_sentinel() {
        let mut encoder = FitEncoder::new();
        encoder
            .definition(0, mesg_num::SESSION, &[FieldSpec::new(16, BaseType::UInt8)])
            .data(0, &[None]);
        let bytes = encoder.finish();
        // header (14), definition (6 + 3), data header, one field byte, CRC (2)
        assert_eq!(bytes.len(), 14 + 9 + 2 + 2);
        assert_eq!(bytes[bytes.len() - 3], 0xFF);
    }

    #[test]
    fn test_values_round_trip_through_decoder() {
        let start = Utc.with_ymd_and_hms(2026, 1, 10, 8, 30, 0).unwrap();
        let bytes = encode_activity(&SessionSpec {
            start_time: start,
            duration_secs: 5400.0,
            distance_m: 12_070.0,
            avg_heart_rate: Some(151),
        });
        let summary = SessionSummary::from_bytes(&bytes).unwrap();
        assert_eq!(summary.start_time, Some(start));
        assert!((summary.duration_secs.unwrap() - 5400.0).abs() < 1e-9);
        assert!((summary.distance_m.unwrap() - 12_070.0).abs() < 1e-9);
        assert_eq!(summary.avg_heart_rate, Some(151));
    }

    #[test]
    fn test_absent_heart_rate_is_not_written() {
        let spec = SessionSpec {
            start_time: Utc.with_ymd_and_hms(2026, 1, 10, 8, 30, 0).unwrap(),
            duration_secs: 1800.0,
            distance_m: 4800.0,
            avg_heart_rate: None,
        };
        let without = encode_activity(&spec);
        let with = encode_activity(&SessionSpec {
            avg_heart_rate: Some(140),
            ..spec
        });
        // one field definition (3 bytes) and one value byte
        assert_eq!(with.len() - without.len(), 4);
    }

    #[test]
    fn test_header_layout() {
        let bytes = FitEncoder::new().finish();
        assert_eq!(bytes.len(), 16);
        assert_eq!(bytes[0], 14);
        assert_eq!(&bytes[8..12], b".FIT");
    }
}
