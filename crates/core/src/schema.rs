// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Field alias table for backlog documents.
//!
//! Producers of the backlog file disagree on field names, so every logical
//! field is looked up through a priority-ordered list of synonyms. Supporting
//! a new producer means appending to a list here (or in the config file), not
//! adding another branch to the extractor.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Priority-ordered synonym keys for each logical backlog field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
    /// Top-level collections holding group records, scanned in this order.
    pub collections: Vec<String>,
    pub group_id: Vec<String>,
    pub group_title: Vec<String>,
    /// Collections of child items inside a group record.
    pub group_items: Vec<String>,
    pub item_id: Vec<String>,
    pub item_title: Vec<String>,
    /// Lifecycle status, shared by groups and items.
    pub status: Vec<String>,
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

impl Default for Schema {
    fn default() -> Self {
        Schema {
            collections: keys(&["epics", "pendingEpics", "activeEpics"]),
            group_id: keys(&["id", "epicId"]),
            group_title: keys(&["title", "name"]),
            group_items: keys(&["items", "stories"]),
            item_id: keys(&["id"]),
            item_title: keys(&["title", "name"]),
            status: keys(&["status"]),
        }
    }
}

/// Returns the first value under `keys` that `usable` accepts.
///
/// A key that is present but holds the wrong shape (a `null` id, an object
/// where a list was expected) is skipped in favour of the next synonym.
pub fn first_present<'a, T, F>(record: &'a Map<String, Value>, keys: &[String], usable: F) -> Option<T>
where
    F: Fn(&'a Value) -> Option<T>,
{
    keys.iter()
        .filter_map(|key| record.get(key))
        .find_map(usable)
}

/// Text value of the first usable alias, or `default`.
///
/// Numbers are accepted and rendered as their decimal text.
pub fn first_text(record: &Map<String, Value>, keys: &[String], default: &str) -> String {
    first_present(record, keys, as_text).unwrap_or_else(|| default.to_string())
}

/// List value of the first usable alias, or an empty slice.
pub fn first_list<'a>(record: &'a Map<String, Value>, keys: &[String]) -> &'a [Value] {
    first_present(record, keys, |v| v.as_array().map(Vec::as_slice)).unwrap_or(&[])
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
