// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Test infrastructure for command testing against a temporary workspace.
//!
//! `TestWorkspace` owns a temp directory and a [`Config`] pointed at it. The
//! standard probes are rewired so no test touches the network or the
//! process table: prod stays unconfigured, the local check targets a closed
//! port unless a live server is requested, and the process check runs
//! `sh -c <script>`.
//!
//! ```rust,ignore
//! let ws = TestWorkspace::new();
//! ws.write_backlog(r#"{"epics": []}"#);
//! let snapshot = build_snapshot(&ws.config, fixed_now());
//! ```

use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread;

use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

use crate::config::Config;

pub const OK_RESPONSE: &str =
    "HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";

pub struct TestWorkspace {
    pub dir: TempDir,
    pub config: Config,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.paths.workspace = dir.path().to_path_buf();
        config.probes.grace_ms = 200;
        config.probes.local.url = Some(refused_url());
        config.probes.local.timeout_secs = 1;
        config.probes.process.program = "sh".to_string();
        config.probes.process.name = "echo 1".to_string();
        config.probes.process.timeout_secs = 1;
        TestWorkspace { dir, config }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    pub fn write_backlog(&self, contents: &str) {
        self.write("workflow/sprint.json", contents);
    }

    pub fn write_blockers(&self, contents: &str) {
        self.write("workflow/blockers.json", contents);
    }

    /// Points the local check at a server that answers once with `response`.
    pub fn serve_local(&mut self, response: &'static str) {
        self.config.probes.local.url = Some(serve_once(response));
    }
}

/// 2026-03-04 05:06 UTC.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 0).unwrap()
}

pub fn serve_once(response: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{}/healthz", addr)
}

pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/healthz", addr)
}
