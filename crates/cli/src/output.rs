// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-file replacement of the snapshot document.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Writes `contents` to `path` so readers see either the old file or the
/// complete new one.
///
/// The text goes to a sibling temp file which is then renamed over `path`.
/// The parent directory is created if needed.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let wrap = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(wrap)?;
    }

    let temp = temp_path(path);
    let written = fs::File::create(&temp).and_then(|mut file| {
        file.write_all(contents.as_bytes())?;
        file.sync_all()
    });
    let renamed = written.and_then(|()| fs::rename(&temp, path));
    if let Err(e) = renamed {
        let _ = fs::remove_file(&temp);
        return Err(wrap(e));
    }
    tracing::debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp-{}", name, std::process::id()))
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
