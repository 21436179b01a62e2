// ABOUTME: Core types and constants for the half-marathon goal tracker
// ABOUTME: Foundation crate with run records, run categories, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

#![deny(unsafe_code)]

//! # HM Core
//!
//! Foundation crate providing shared types and constants for the half-marathon
//! goal tracker. Both the ingestion pipeline and the rule engine depend on it,
//! so it is kept small and free of I/O.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversions, heart-rate caps, and race defaults
//! - **models**: `RunRecord` and the `RunCategory` enumeration

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`RunRecord`, `RunCategory`)
pub mod models;
