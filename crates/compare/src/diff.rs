// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unified diff rendering.

use similar::TextDiff;

/// Lines of context shown around each hunk.
pub const CONTEXT_LINES: usize = 3;

/// Render a unified diff between reference and actual content.
///
/// Content is split into lines that keep their line endings, so the diff
/// distinguishes files that differ only in a trailing newline. The result
/// carries `--- <from_label>` / `+++ <to_label>` headers followed by
/// `@@`-delimited hunks; identical inputs render as an empty string.
pub fn render_unified(from_label: &str, to_label: &str, reference: &str, actual: &str) -> String {
    let diff = TextDiff::from_lines(reference, actual);
    format!(
        "{}",
        diff.unified_diff()
            .context_radius(CONTEXT_LINES)
            .header(from_label, to_label)
    )
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
