// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Tests for the public `run()` routing.
//!
//! Commands that probe or write are covered by the binary tests in
//! `tests/`; here only the routing edges that need no workspace.

use super::*;
use clap_complete::Shell;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_missing_explicit_config_fails_before_dispatch() {
    let temp = TempDir::new().unwrap();
    let cli = Cli {
        config: Some(temp.path().join("absent.toml")),
        verbose: false,
        command: Command::Next {
            format: OutputFormat::Text,
        },
    };
    let err = run(cli).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_completion_ignores_broken_config() {
    let cli = Cli {
        config: Some(PathBuf::from("/definitely/not/here.toml")),
        verbose: false,
        command: Command::Completion { shell: Shell::Bash },
    };
    assert!(run(cli).is_ok());
}

#[test]
fn test_config_show_with_explicit_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("brief.toml");
    std::fs::write(&path, "user_name = \"Dana\"\n").unwrap();
    let cli = Cli {
        config: Some(path),
        verbose: false,
        command: Command::Config(ConfigCommand::Show),
    };
    assert!(run(cli).is_ok());
}
