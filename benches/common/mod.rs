// ABOUTME: Common benchmark utilities and fixtures for performance testing
// ABOUTME: Provides reusable run dataset and FIT file generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

//! Common benchmark utilities and fixtures.

pub mod fixtures;
