// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for brief-core operations.
//!
//! Components never hand these to the operator directly: loaders and probes
//! downgrade them to an empty input or a `?` probe token at their boundary.

use std::time::Duration;

use thiserror::Error;

/// All possible errors that can occur in brief-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{what} timed out after {}ms", after.as_millis())]
    Timeout { what: String, after: Duration },

    #[error("{program} exited with {status}")]
    CommandFailed { program: String, status: String },

    #[error("unexpected output: {0}")]
    UnexpectedOutput(String),

    #[error("expected a JSON object in {0}")]
    NotAnObject(String),
}

impl Error {
    /// Whether the error is a missing file, which sources treat as expected.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

/// A specialized Result type for brief-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
