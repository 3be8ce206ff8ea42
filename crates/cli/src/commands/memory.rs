// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `brief memory`: today's and yesterday's daily notes.

use brief_core::memory::{daily_notes, MemoryNote};
use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::error::Result;

/// Notes for the local date of `now`, newest first.
pub fn notes(config: &Config, now: DateTime<Utc>) -> Vec<MemoryNote> {
    let today = config.timezone.date(now);
    daily_notes(&config.memory_dir(), today)
}

/// Each note under a `--- memory/<name> ---` separator.
pub fn format_notes(config: &Config, notes: &[MemoryNote]) -> String {
    let mut out = String::new();
    for note in notes {
        let shown = config.paths.memory.join(&note.name);
        out.push_str(&format!("--- {} ---\n", shown.display()));
        out.push_str(&note.content);
        if !note.content.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

pub fn run(config: &Config) -> Result<()> {
    let notes = notes(config, Utc::now());
    tracing::debug!("{} daily note(s) found", notes.len());
    print!("{}", format_notes(config, &notes));
    Ok(())
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
