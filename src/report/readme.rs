// ABOUTME: Marker substitution - replaces the single GOAL_STATUS span of a markdown document
// ABOUTME: Missing, stray, or misordered markers are a template error and leave the document untouched
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 HM Goal Tracker Contributors

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use hm_core::errors::{AppError, AppResult};
use regex::Regex;
use tracing::info;

/// Opening marker of the generated region
pub const GOAL_STATUS_START: &str = "<!-- GOAL_STATUS_START -->";
/// Closing marker of the generated region
pub const GOAL_STATUS_END: &str = "<!-- GOAL_STATUS_END -->";

static GOAL_STATUS_SPAN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!(
        "(?s){}.*?{}",
        regex::escape(GOAL_STATUS_START),
        regex::escape(GOAL_STATUS_END)
    ))
    .ok()
});

/// Replace the marker span of `text` with `block`, keeping the markers
///
/// Text outside the span is returned byte for byte.
///
/// # Errors
///
/// Returns a template error unless `text` holds exactly one START marker and
/// exactly one END marker, in that order
pub fn replace_goal_block(text: &str, block: &str) -> AppResult<String> {
    let starts = text.matches(GOAL_STATUS_START).count();
    let ends = text.matches(GOAL_STATUS_END).count();
    if starts != 1 || ends != 1 {
        return Err(AppError::template(format!(
            "Expected one {GOAL_STATUS_START} and one {GOAL_STATUS_END}, found {starts} and {ends}"
        )));
    }

    let span = GOAL_STATUS_SPAN
        .as_ref()
        .ok_or_else(|| AppError::internal("Goal status marker pattern failed to compile"))?;
    let found = span.find(text).ok_or_else(|| {
        AppError::template(format!("{GOAL_STATUS_END} appears before {GOAL_STATUS_START}"))
    })?;

    let mut updated = String::with_capacity(text.len() + block.len());
    updated.push_str(&text[..found.start()]);
    updated.push_str(GOAL_STATUS_START);
    updated.push('\n');
    updated.push_str(block);
    updated.push('\n');
    updated.push_str(GOAL_STATUS_END);
    updated.push_str(&text[found.end()..]);
    Ok(updated)
}

/// Rewrite the marker span of the document at `path`
///
/// # Errors
///
/// Returns a not-found or storage error for I/O failures, or a template
/// error from [`replace_goal_block`]; the file is not modified on error
pub fn update_document(path: &Path, block: &str) -> AppResult<()> {
    let text = fs::read_to_string(path).map_err(|e| {
        let error = AppError::from(e);
        AppError {
            message: format!("{}: {}", path.display(), error.message),
            ..error
        }
    })?;

    let updated = replace_goal_block(&text, block).map_err(|error| AppError {
        message: format!("{}: {}", path.display(), error.message),
        ..error
    })?;

    fs::write(path, updated).map_err(|e| {
        AppError::storage(format!("Failed to write {}: {e}", path.display())).with_source(e)
    })?;

    info!(path = %path.display(), "Goal status updated");
    Ok(())
}
