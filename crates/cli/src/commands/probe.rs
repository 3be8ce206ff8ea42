// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `brief probe`: run the coordinator alone.

use brief_core::snapshot::infra_summary;
use brief_core::ProbeReport;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;

#[derive(Serialize)]
struct ProbeOutput<'a> {
    probes: &'a [ProbeReport],
    summary: String,
}

/// One `label: detail` line per probe, then the summary line.
pub fn format_text(reports: &[ProbeReport]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&format!("{}: {}\n", report.label, report.detail()));
    }
    out.push_str(&format!("Infra: {}\n", infra_summary(reports)));
    out
}

pub fn run(config: &Config, format: OutputFormat) -> Result<()> {
    let reports = config.coordinator().run(&config.probes());
    match format {
        OutputFormat::Text => print!("{}", format_text(&reports)),
        OutputFormat::Json => {
            let output = ProbeOutput {
                probes: &reports,
                summary: infra_summary(&reports),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
