// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]
#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

//! Shared helpers for refdiff integration tests.

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// Create a pair of (reference, output) suite directories.
pub fn suite_dirs() -> (TempDir, TempDir) {
    let ref_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    (ref_dir, out_dir)
}

/// Write one candidate file into a suite directory.
pub fn write_output(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

/// Command for the refdiff binary pointed at the given directories.
pub fn refdiff_cmd(ref_dir: &TempDir, out_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("refdiff").unwrap();
    cmd.arg(ref_dir.path()).arg(out_dir.path());
    cmd
}

/// Command for the refdiff binary with no arguments.
pub fn bare_refdiff_cmd() -> Command {
    Command::cargo_bin("refdiff").unwrap()
}
