// ABOUTME: Subset of the FIT profile - base types, message numbers, and session field numbers
// ABOUTME: Base type bytes, sizes, and invalid sentinels used when writing activity files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

/// Global message numbers
pub mod mesg_num {
    /// File identification, first message of every activity file
    pub const FILE_ID: u16 = 0;
    /// Per-session totals
    pub const SESSION: u16 = 18;
}

/// Field numbers of the `session` message used for summaries
pub mod session_field {
    /// Session end time (`date_time`)
    pub const TIMESTAMP: u8 = 253;
    /// Session start time (`date_time`)
    pub const START_TIME: u8 = 2;
    /// Wall-clock time including pauses, seconds x 1000
    pub const TOTAL_ELAPSED_TIME: u8 = 7;
    /// Timer time excluding pauses, seconds x 1000
    pub const TOTAL_TIMER_TIME: u8 = 8;
    /// Distance, meters x 100
    pub const TOTAL_DISTANCE: u8 = 9;
    /// Average heart rate, bpm
    pub const AVG_HEART_RATE: u8 = 16;
}

/// Field numbers of the `file_id` message
pub mod file_id_field {
    /// File type (4 = activity)
    pub const TYPE: u8 = 0;
    /// Manufacturer id
    pub const MANUFACTURER: u8 = 1;
    /// Creation time (`date_time`)
    pub const TIME_CREATED: u8 = 4;
}

/// Scale of `total_*_time` fields
pub const TIME_SCALE: f64 = 1000.0;

/// Scale of `total_distance`
pub const DISTANCE_SCALE: f64 = 100.0;

/// `date_time` values below this are relative to device power-up, not the FIT epoch
pub const DATE_TIME_MIN: u32 = 0x1000_0000;

/// FIT file type value for activity files
pub const FILE_TYPE_ACTIVITY: u8 = 4;

/// FIT base types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    /// Enumeration stored as a byte
    Enum,
    /// Signed 8-bit
    SInt8,
    /// Unsigned 8-bit
    UInt8,
    /// Signed 16-bit
    SInt16,
    /// Unsigned 16-bit
    UInt16,
    /// Signed 32-bit
    SInt32,
    /// Unsigned 32-bit
    UInt32,
    /// Null-terminated UTF-8
    String,
    /// IEEE 754 single
    Float32,
    /// IEEE 754 double
    Float64,
    /// Unsigned 8-bit, zero invalid
    UInt8z,
    /// Unsigned 16-bit, zero invalid
    UInt16z,
    /// Unsigned 32-bit, zero invalid
    UInt32z,
    /// Opaque byte array
    Byte,
    /// Signed 64-bit
    SInt64,
    /// Unsigned 64-bit
    UInt64,
    /// Unsigned 64-bit, zero invalid
    UInt64z,
}

impl BaseType {
    /// Base-type byte as written in a field definition
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        match self {
            Self::Enum => 0x00,
            Self::SInt8 => 0x01,
            Self::UInt8 => 0x02,
            Self::SInt16 => 0x83,
            Self::UInt16 => 0x84,
            Self::SInt32 => 0x85,
            Self::UInt32 => 0x86,
            Self::String => 0x07,
            Self::Float32 => 0x88,
            Self::Float64 => 0x89,
            Self::UInt8z => 0x0A,
            Self::UInt16z => 0x8B,
            Self::UInt32z => 0x8C,
            Self::Byte => 0x0D,
            Self::SInt64 => 0x8E,
            Self::UInt64 => 0x8F,
            Self::UInt64z => 0x90,
        }
    }

    /// Size of one element in bytes
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::Enum
            | Self::SInt8
            | Self::UInt8
            | Self::String
            | Self::UInt8z
            | Self::Byte => 1,
            Self::SInt16 | Self::UInt16 | Self::UInt16z => 2,
            Self::SInt32 | Self::UInt32 | Self::Float32 | Self::UInt32z => 4,
            Self::Float64 | Self::SInt64 | Self::UInt64 | Self::UInt64z => 8,
        }
    }

    /// Invalid sentinel of one element, as an unsigned bit pattern
    #[must_use]
    pub const fn invalid_bits(self) -> u64 {
        match self {
            Self::Enum | Self::UInt8 | Self::Byte => 0xFF,
            Self::SInt8 => 0x7F,
            Self::SInt16 => 0x7FFF,
            Self::UInt16 => 0xFFFF,
            Self::SInt32 => 0x7FFF_FFFF,
            Self::UInt32 | Self::Float32 => 0xFFFF_FFFF,
            Self::Float64 | Self::UInt64 => u64::MAX,
            Self::SInt64 => 0x7FFF_FFFF_FFFF_FFFF,
            Self::String | Self::UInt8z | Self::UInt16z | Self::UInt32z | Self::UInt64z => 0,
        }
    }
}
