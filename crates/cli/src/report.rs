// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verdict and notice wording.
//!
//! The printed lines are consumed verbatim by downstream tooling, so the
//! exact wording here is load-bearing.

/// Label prefix for the reference side of diff headers.
const REFERENCE_LABEL: &str = "references";
/// Label prefix for the output side of diff headers.
const OUTPUT_LABEL: &str = "output";

/// Verdict line for a file with no differences.
pub fn ok_line(filename: &str) -> String {
    format!("{} - OK (no differences)", filename)
}

/// Header line announcing differences in a file.
pub fn diff_header(filename: &str) -> String {
    format!("Differences found in file: {}", filename)
}

/// Notice printed when the two directories share no candidate files.
pub fn no_matches_notice(suffix: &str) -> String {
    format!("No matching {} files found in both directories.", suffix)
}

/// Diff header label for the reference copy of `filename`.
///
/// Labels are derived from the filename under fixed prefixes, independent
/// of which directories were actually scanned.
pub fn reference_label(filename: &str) -> String {
    format!("{}/{}", REFERENCE_LABEL, filename)
}

/// Diff header label for the output copy of `filename`.
pub fn output_label(filename: &str) -> String {
    format!("{}/{}", OUTPUT_LABEL, filename)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
