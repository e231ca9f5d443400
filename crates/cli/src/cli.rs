// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Default directory holding reference outputs.
pub const DEFAULT_REF_DIR: &str = "references/dev";
/// Default directory holding freshly produced outputs.
pub const DEFAULT_OUT_DIR: &str = "output/dev";
/// Default filename suffix marking candidate output files.
pub const DEFAULT_SUFFIX: &str = ".out";

/// Compare reference test outputs against freshly produced ones
#[derive(Parser, Debug)]
#[command(name = "refdiff", version, about = "Compare reference test outputs against fresh ones")]
pub struct Cli {
    /// Directory holding reference (expected) outputs
    #[arg(value_name = "REF_DIR", env = "REFDIFF_REF_DIR", default_value = DEFAULT_REF_DIR)]
    pub ref_dir: PathBuf,

    /// Directory holding freshly produced outputs
    #[arg(value_name = "OUT_DIR", env = "REFDIFF_OUT_DIR", default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Filename suffix marking candidate output files
    #[arg(long, env = "REFDIFF_SUFFIX", default_value = DEFAULT_SUFFIX)]
    pub suffix: String,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
