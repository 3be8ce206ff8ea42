// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
}

#[test]
fn note_name_format() {
    assert_eq!(note_name(day(8)), "2026-10-08.md");
}

#[test]
fn daily_notes_today_then_yesterday() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("2026-10-17.md"), "yesterday").unwrap();
    fs::write(temp.path().join("2026-10-18.md"), "today").unwrap();
    fs::write(temp.path().join("2026-10-16.md"), "older").unwrap();

    let notes = daily_notes(temp.path(), day(18));
    let names: Vec<_> = notes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["2026-10-18.md", "2026-10-17.md"]);
    assert_eq!(notes[0].content, "today");
}

#[test]
fn daily_notes_skips_missing() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("2026-10-17.md"), "yesterday").unwrap();
    let notes = daily_notes(temp.path(), day(18));
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].path, temp.path().join("2026-10-17.md"));
}

#[test]
fn daily_notes_missing_dir_is_empty() {
    let temp = TempDir::new().unwrap();
    assert!(daily_notes(&temp.path().join("memory"), day(18)).is_empty());
}

#[test]
fn daily_notes_month_boundary() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("2026-09-30.md"), "end of month").unwrap();
    let notes = daily_notes(temp.path(), day(1));
    assert_eq!(notes[0].name, "2026-09-30.md");
}
