// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod config;
pub mod generate;
pub mod memory;
pub mod next;
pub mod probe;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
