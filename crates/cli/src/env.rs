// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! Every variable the CLI reads is defined here with a typed accessor. The
//! name constants are generated by `build.rs` and live in [`vars`].

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Reads `name`, treating an empty value as unset.
fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Returns the value of `BOOTSTRAP_USER_NAME` if set.
pub fn user_name() -> Option<String> {
    non_empty(vars::BOOTSTRAP_USER_NAME)
}

/// Returns the value of `BOOTSTRAP_PROD_URL` if set and non-empty.
pub fn prod_url() -> Option<String> {
    non_empty(vars::BOOTSTRAP_PROD_URL).map(|v| v.trim().to_string())
}

/// Parses `BOOTSTRAP_TZ_OFFSET` as whole hours ahead of UTC.
pub fn tz_offset() -> Result<Option<i32>> {
    match non_empty(vars::BOOTSTRAP_TZ_OFFSET) {
        None => Ok(None),
        Some(value) => parse_offset(&value).map(Some),
    }
}

pub(crate) fn parse_offset(value: &str) -> Result<i32> {
    value
        .trim()
        .trim_start_matches('+')
        .parse::<i32>()
        .map_err(|_| Error::InvalidEnv {
            var: vars::BOOTSTRAP_TZ_OFFSET,
            value: value.to_string(),
        })
}

/// Returns the value of `BOOTSTRAP_TZ_LABEL` if set.
pub fn tz_label() -> Option<String> {
    non_empty(vars::BOOTSTRAP_TZ_LABEL)
}

/// Returns the value of `BRIEF_WORKSPACE` if set.
pub fn workspace() -> Option<PathBuf> {
    non_empty(vars::BRIEF_WORKSPACE).map(PathBuf::from)
}

/// Returns the value of `BRIEF_CONFIG` if set.
pub fn config_path() -> Option<PathBuf> {
    non_empty(vars::BRIEF_CONFIG).map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
