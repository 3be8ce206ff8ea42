// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Daily memory notes (`<dir>/YYYY-MM-DD.md`) for today and yesterday.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// One daily note that exists on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryNote {
    /// File name, e.g. `2026-10-18.md`.
    pub name: String,
    pub path: PathBuf,
    pub content: String,
}

/// File name of the note for `date`.
pub fn note_name(date: NaiveDate) -> String {
    format!("{}.md", date.format("%Y-%m-%d"))
}

/// Reads today's and yesterday's notes from `dir`, in that order.
///
/// Missing or unreadable notes are skipped; a note for yesterday usually
/// exists, one for today often does not yet.
pub fn daily_notes(dir: &Path, today: NaiveDate) -> Vec<MemoryNote> {
    let dates = [Some(today), today.pred_opt()];
    dates
        .into_iter()
        .flatten()
        .filter_map(|date| {
            let name = note_name(date);
            let path = dir.join(&name);
            match fs::read_to_string(&path) {
                Ok(content) => {
                    tracing::debug!("loaded {} ({} chars)", path.display(), content.len());
                    Some(MemoryNote {
                        name,
                        path,
                        content,
                    })
                }
                Err(_) => None,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
