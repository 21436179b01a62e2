// ABOUTME: FIT (Flexible and Interoperable Data Transfer) activity files
// ABOUTME: Session summaries decoded through fitparser, plus a minimal writer for synthetic files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

//! # FIT Files
//!
//! Decoding is delegated to `fitparser`, which handles base types,
//! endianness, compressed timestamps, developer fields, chained files, and
//! CRC checks. Only the first `session` message is read. The encoder writes
//! single-segment little-endian files and backs the synthetic-data seeder and
//! the test fixtures.

/// Minimal activity file writer
pub mod encoder;
/// Message numbers, field numbers, and base types used by the writer
pub mod profile;
/// Session summary extraction
pub mod session;

pub use encoder::{encode_activity, FitEncoder, SessionSpec};
pub use session::SessionSummary;

use crc::{Crc, CRC_16_ARC};
use hm_core::errors::AppError;
use thiserror::Error;

/// FIT CRC-16 (polynomial 0x8005 reflected, initial value zero)
const FIT_CRC: Crc<u16> = Crc::<u16>::new(&CRC_16_ARC);

/// CRC of `bytes` as stored in FIT headers and trailers
#[must_use]
pub fn fit_crc(bytes: &[u8]) -> u16 {
    FIT_CRC.checksum(bytes)
}

/// Errors raised while reading a FIT file
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FitError {
    /// No bytes at all
    #[error("empty file")]
    Empty,
    /// Header, record stream, or CRC rejected by the decoder
    #[error("malformed FIT data: {0}")]
    Decode(String),
    /// Decoded cleanly but contains no `session` message
    #[error("no session message")]
    NoSession,
}

impl From<fitparser::Error> for FitError {
    fn from(error: fitparser::Error) -> Self {
        Self::Decode(error.to_string())
    }
}

impl From<FitError> for AppError {
    fn from(error: FitError) -> Self {
        let message = error.to_string();
        match error {
            FitError::NoSession => Self::missing_field(message),
            _ => Self::invalid_format(message),
        }
        .with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hm_core::errors::ErrorCode;

    #[test]
    fn test_crc_check_value() {
        // CRC-16/ARC check value over "123456789"
        assert_eq!(fit_crc(b"123456789"), 0xBB3D);
    }

    #[test]
    fn test_error_mapping() {
        let missing: AppError = FitError::NoSession.into();
        assert_eq!(missing.code, ErrorCode::MissingRequiredField);

        let corrupt: AppError = FitError::Decode("CRC mismatch".into()).into();
        assert_eq!(corrupt.code, ErrorCode::InvalidFormat);
        assert!(corrupt.message.contains("CRC mismatch"));
    }
}
