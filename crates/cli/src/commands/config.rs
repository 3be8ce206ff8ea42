// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::ConfigCommand;
use crate::config::Config;
use crate::error::Result;

/// Execute a config subcommand.
pub fn run(config: &Config, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            print!("{}", show(config)?);
            Ok(())
        }
    }
}

/// The effective configuration as TOML, after every layer is applied.
pub fn show(config: &Config) -> Result<String> {
    config.to_toml_string()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
