// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blockers list loading.

use std::path::Path;

use serde_json::Value;

use crate::backlog::read_document;

/// Field of the blockers document holding the list.
pub const BLOCKERS_FIELD: &str = "blockers";

/// Returns the blocker strings of `document`, or `None` if it has no list.
///
/// Entries that are not strings are skipped; order is preserved.
pub fn extract(document: &Value) -> Option<Vec<String>> {
    let list = document.get(BLOCKERS_FIELD)?.as_array()?;
    Some(
        list.iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
    )
}

/// Loads blockers from `path`, using `fallback` when the document is unusable.
pub fn load(path: &Path, fallback: &[String]) -> Vec<String> {
    let document = match read_document(path) {
        Ok(document) => document,
        Err(e) if e.is_not_found() => {
            tracing::debug!("no blockers at {}", path.display());
            return fallback.to_vec();
        }
        Err(e) => {
            tracing::warn!("blockers {} unavailable: {}", path.display(), e);
            return fallback.to_vec();
        }
    };
    extract(&document).unwrap_or_else(|| {
        tracing::warn!("blockers {} has no '{}' list", path.display(), BLOCKERS_FIELD);
        fallback.to_vec()
    })
}

#[cfg(test)]
#[path = "blockers_tests.rs"]
mod tests;
