// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Candidate file discovery in the reference and output directories.

use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while listing candidate files
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read directory '{path}': {source}")]
    ReadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// List filenames in `dir` ending with `suffix`.
///
/// Returns the names in a `BTreeSet` so iteration is in ascending lexical
/// order. Entries whose names are not valid UTF-8 cannot carry the suffix
/// and are skipped. No file-type check is made here; a directory with a
/// matching name surfaces later as a read failure.
pub fn suffix_files(dir: &Path, suffix: &str) -> Result<BTreeSet<String>, ScanError> {
    let read_dir_err = |source| ScanError::ReadDir {
        path: dir.display().to_string(),
        source,
    };

    let mut names = BTreeSet::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        if let Ok(name) = entry.file_name().into_string() {
            if name.ends_with(suffix) {
                names.insert(name);
            }
        }
    }
    Ok(names)
}

/// Filenames present in both sets, in ascending lexical order.
pub fn common_files(reference: &BTreeSet<String>, output: &BTreeSet<String>) -> Vec<String> {
    reference.intersection(output).cloned().collect()
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
