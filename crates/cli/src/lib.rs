// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! briefrs - the command-line layer of the `brief` snapshot generator.
//!
//! The decision logic lives in `brief_core`; this crate wires it to the
//! outside world.
//!
//! # Main Components
//!
//! - [`Config`] - layered configuration (defaults, `brief.toml`, environment)
//! - [`Cli`] / [`Command`] - the clap command surface
//! - [`Error`] - errors that end a run with a non-zero exit
//!
//! ```rust,ignore
//! use briefrs::{Cli, run};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! run(cli)?;
//! ```

mod cli;
mod commands;
pub mod config;
pub mod env;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::{Cli, Command, ConfigCommand, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
pub fn run(cli: Cli) -> Result<()> {
    // Completion needs no configuration, so a broken config file cannot
    // block it.
    if let Command::Completion { shell } = cli.command {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "brief", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Generate { stdout, output } => commands::generate::run(&config, stdout, output),
        Command::Probe { format } => commands::probe::run(&config, format),
        Command::Next { format } => commands::next::run(&config, format),
        Command::Memory => commands::memory::run(&config),
        Command::Config(cmd) => commands::config::run(&config, cmd),
        Command::Completion { .. } => Ok(()),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
