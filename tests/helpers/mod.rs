// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the FIT fixture builder and run record shortcuts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod fit_builder;
