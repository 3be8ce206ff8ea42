// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! stdout carries the rendered document, so logs never go there.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "warn";
const VERBOSE_LEVEL: &str = "debug";

/// Filter directive when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LEVEL
    } else {
        DEFAULT_LEVEL
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over `verbose`.
///
/// A second call is a no-op, which keeps in-process tests that share the
/// global dispatcher from failing.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
