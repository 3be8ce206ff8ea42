// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// Custom help template that groups commands into sections
const HELP_TEMPLATE: &str = "{about-with-newline}
{usage-heading} {usage}

{before-help}Options:
{options}{after-help}";

const COMMANDS_HELP: &str = "\
Snapshot:
  generate    Write the session snapshot document
  probe       Run the health probes only
  next        Show the recommended next work item
  memory      Print today's and yesterday's daily notes

Setup & Configuration:
  config      Inspect configuration
  completion  Generate shell completions";

const QUICKSTART_HELP: &str = "\
Get started:
  brief generate            Write BOOTSTRAP.md into the workspace
  brief generate --stdout   Print the snapshot instead
  brief probe               Check infra health
  brief config show         Show the effective configuration";

#[derive(Parser)]
#[command(name = "brief")]
#[command(version)]
#[command(about = "Session-bootstrap snapshot generator for an AI assistant workspace")]
#[command(
    long_about = "Session-bootstrap snapshot generator.\n\n\
    Collects the active sprint, known blockers and live infra health into one \
    markdown document an assistant can read at the start of a session."
)]
#[command(help_template = HELP_TEMPLATE)]
#[command(before_help = COMMANDS_HELP)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Config file (default: $BRIEF_CONFIG, then <workspace>/brief.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug diagnostics to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the session snapshot document
    #[command(after_help = "Examples:\n  \
        brief generate                      Write to the configured output path\n  \
        brief generate --stdout             Print to stdout, write nothing\n  \
        brief generate -o /tmp/BOOT.md      Write to another path")]
    Generate {
        /// Print the document to stdout instead of writing it
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Destination path (overrides [paths] output)
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Run the health probes and print one line per probe
    Probe {
        /// Output format (text, json)
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the recommended next work item (no probes run)
    Next {
        /// Output format (text, json)
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print today's and yesterday's daily memory notes
    Memory,

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
