// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Backlog extraction.
//!
//! Turns a loosely-shaped sprint document into the ordered list of active
//! work groups and their pending items. The document is owned by other tools
//! and drifts between producers, so every lookup goes through [`Schema`] and
//! a document that cannot be read at all yields an empty backlog.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::schema::{first_list, first_text, Schema};

/// Group statuses that qualify a group for the snapshot.
pub const ACTIVE_STATUSES: [&str; 2] = ["active", "in_progress"];

/// Item statuses that mark an item as finished.
pub const DONE_STATUSES: [&str; 3] = ["done", "delivered", "skipped"];

/// Status shown for items whose record carries none.
pub const DEFAULT_ITEM_STATUS: &str = "todo";

/// Status an item carries while someone is working on it.
pub const IN_PROGRESS: &str = "in_progress";

/// One unit of work inside a [`WorkGroup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkItem {
    pub id: String,
    pub title: String,
    pub status: String,
}

impl WorkItem {
    /// True unless the status is one of [`DONE_STATUSES`].
    pub fn is_pending(&self) -> bool {
        !DONE_STATUSES.contains(&self.status.as_str())
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == IN_PROGRESS
    }
}

/// A named cluster of work (an epic) with its pending items in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkGroup {
    pub id: String,
    pub title: String,
    pub status: String,
    pub pending: Vec<WorkItem>,
}

/// Keeps the items that are not finished, preserving order.
pub fn pending(items: &[WorkItem]) -> Vec<WorkItem> {
    items.iter().filter(|i| i.is_pending()).cloned().collect()
}

/// Extracts active groups from every configured collection of `document`.
///
/// Collections are scanned in schema order and their groups concatenated;
/// a group listed in two collections appears twice.
pub fn extract(document: &Value, schema: &Schema) -> Vec<WorkGroup> {
    let Some(root) = document.as_object() else {
        tracing::debug!("backlog root is not an object, treating as empty");
        return Vec::new();
    };

    let mut groups = Vec::new();
    for collection in &schema.collections {
        let Some(records) = root.get(collection).and_then(Value::as_array) else {
            continue;
        };
        groups.extend(
            records
                .iter()
                .filter_map(Value::as_object)
                .filter_map(|record| extract_group(record, schema)),
        );
    }
    groups
}

fn extract_group(record: &Map<String, Value>, schema: &Schema) -> Option<WorkGroup> {
    let status = first_text(record, &schema.status, "");
    if !ACTIVE_STATUSES.contains(&status.as_str()) {
        return None;
    }

    let items: Vec<WorkItem> = first_list(record, &schema.group_items)
        .iter()
        .filter_map(Value::as_object)
        .map(|item| WorkItem {
            id: first_text(item, &schema.item_id, ""),
            title: first_text(item, &schema.item_title, ""),
            status: first_text(item, &schema.status, DEFAULT_ITEM_STATUS),
        })
        .collect();

    Some(WorkGroup {
        id: first_text(record, &schema.group_id, ""),
        title: first_text(record, &schema.group_title, ""),
        status,
        pending: pending(&items),
    })
}

/// Reads and parses a JSON document.
pub fn read_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;
    if !value.is_object() {
        return Err(Error::NotAnObject(path.display().to_string()));
    }
    Ok(value)
}

/// Loads the backlog at `path`, returning no groups if it is unusable.
pub fn load(path: &Path, schema: &Schema) -> Vec<WorkGroup> {
    match read_document(path) {
        Ok(document) => {
            let groups = extract(&document, schema);
            tracing::debug!("extracted {} active groups from {}", groups.len(), path.display());
            groups
        }
        Err(e) if e.is_not_found() => {
            tracing::debug!("no backlog at {}", path.display());
            Vec::new()
        }
        Err(e) => {
            tracing::warn!("backlog {} unavailable: {}", path.display(), e);
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "backlog_tests.rs"]
mod tests;
