// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `brief next`: the recommendation without running probes.

use brief_core::recommend::recommend;
use brief_core::snapshot::recommendation_text;
use brief_core::{backlog, Recommendation};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;

/// Reads the backlog and picks the next item.
pub fn recommendation(config: &Config) -> Recommendation {
    let groups = backlog::load(&config.backlog_path(), &config.schema);
    recommend(&groups)
}

pub fn run(config: &Config, format: OutputFormat) -> Result<()> {
    let recommendation = recommendation(config);
    match format {
        OutputFormat::Text => {
            let backlog_name = config.snapshot_settings().backlog_name;
            println!("{}", recommendation_text(&recommendation, &backlog_name));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&recommendation)?),
    }
    Ok(())
}

#[cfg(test)]
#[path = "next_tests.rs"]
mod tests;
