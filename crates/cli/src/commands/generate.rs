// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `brief generate`: the full snapshot pipeline.

use std::path::{Path, PathBuf};

use brief_core::{assemble, backlog, blockers, Snapshot, Timestamps};
use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::error::Result;
use crate::output::write_atomic;

/// Prefix of the one-line run summary.
pub const SUMMARY_TAG: &str = "[brief]";

/// Loads both sources, runs the probes and assembles the snapshot.
///
/// Never fails: missing sources and failed probes are already folded into
/// placeholders by the time they reach the assembler.
pub fn build_snapshot(config: &Config, now: DateTime<Utc>) -> Snapshot {
    let groups = backlog::load(&config.backlog_path(), &config.schema);
    let blockers = blockers::load(&config.blockers_path(), &config.blockers.fallback);
    let reports = config.coordinator().run(&config.probes());
    let stamps = Timestamps::capture(now, &config.timezone);
    tracing::debug!(
        groups = groups.len(),
        blockers = blockers.len(),
        "sources loaded"
    );
    assemble(groups, blockers, reports, &stamps, &config.snapshot_settings())
}

/// `[brief] Written BOOTSTRAP.md (N lines) at <utc> | Prod:200 AiPipe:? CF Tunnel:1`
pub fn summary_line(snapshot: &Snapshot, destination: &Path) -> String {
    let name = destination
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| destination.display().to_string());
    let tokens: Vec<String> = snapshot
        .probes
        .iter()
        .map(|r| format!("{}:{}", r.label, r.result.token))
        .collect();
    format!(
        "{} Written {} ({} lines) at {} | {}",
        SUMMARY_TAG,
        name,
        snapshot.document.lines().len(),
        snapshot.stamps.utc,
        tokens.join(" ")
    )
}

/// Runs the pipeline and writes or prints the document.
pub fn run(config: &Config, stdout: bool, output: Option<PathBuf>) -> Result<()> {
    let snapshot = build_snapshot(config, Utc::now());
    let text = snapshot.render();

    if stdout {
        print!("{}", text);
        return Ok(());
    }

    let destination = output.unwrap_or_else(|| config.output_path());
    write_atomic(&destination, &text)?;
    println!("{}", summary_line(&snapshot, &destination));
    Ok(())
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
