// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::net::TcpListener;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The binary with a clean environment pointed at `workspace`.
pub fn brief(workspace: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("brief");
    cmd.env_remove("BOOTSTRAP_USER_NAME")
        .env_remove("BOOTSTRAP_PROD_URL")
        .env_remove("BOOTSTRAP_TZ_OFFSET")
        .env_remove("BOOTSTRAP_TZ_LABEL")
        .env_remove("BRIEF_CONFIG")
        .env_remove("RUST_LOG")
        .env("BRIEF_WORKSPACE", workspace);
    cmd
}

/// A port nothing listens on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/healthz", addr)
}

/// A workspace whose `brief.toml` keeps the probes off the network and out
/// of the process table: the local check hits a closed port and the
/// process check runs `sh -c "echo 1"`.
pub fn workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    let config = format!(
        r#"[probes]
grace_ms = 200

[probes.local]
url = "{}"
timeout_secs = 1

[probes.process]
program = "sh"
name = "echo 1"
timeout_secs = 1
"#,
        refused_url()
    );
    write(&temp, "brief.toml", &config);
    temp
}

pub fn write(temp: &TempDir, relative: &str, contents: &str) {
    let path = temp.path().join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

pub const SPRINT: &str = r#"{
  "epics": [
    {"id": "EPIC-1", "title": "Launch", "status": "active", "items": [
      {"id": "S1", "title": "Wire probes", "status": "in_progress"},
      {"id": "S2", "title": "Write docs", "status": "todo"}
    ]}
  ]
}"#;
