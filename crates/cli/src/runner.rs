// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The comparison pass: scan, intersect, compare, report.

use std::io::{self, Write};
use std::path::Path;

use refdiff_compare::{compare_contents, Comparison};
use thiserror::Error;

use crate::cli::Cli;
use crate::report;
use crate::scan::{self, ScanError};

/// Errors that abort the comparison pass
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("Failed to read '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write report: {0}")]
    Write(#[from] io::Error),
}

/// Run the comparison pass, printing verdicts to stdout.
pub fn run(cli: &Cli) -> Result<(), RunError> {
    let stdout = io::stdout();
    run_with_writer(cli, &mut stdout.lock())
}

/// Run the comparison pass against an arbitrary writer.
///
/// A single linear pass: list both directories, intersect the candidate
/// filenames, and emit exactly one verdict per common file in ascending
/// lexical order. The first I/O failure aborts the pass; there is no
/// per-file recovery.
pub fn run_with_writer<W: Write>(cli: &Cli, writer: &mut W) -> Result<(), RunError> {
    let ref_files = scan::suffix_files(&cli.ref_dir, &cli.suffix)?;
    let out_files = scan::suffix_files(&cli.out_dir, &cli.suffix)?;
    let common = scan::common_files(&ref_files, &out_files);

    if common.is_empty() {
        writeln!(writer, "{}", report::no_matches_notice(&cli.suffix))?;
        return Ok(());
    }

    for filename in &common {
        let reference = read_content(&cli.ref_dir.join(filename))?;
        let actual = read_content(&cli.out_dir.join(filename))?;

        let outcome = compare_contents(
            &report::reference_label(filename),
            &report::output_label(filename),
            &reference,
            &actual,
        );

        match outcome {
            Comparison::Match => writeln!(writer, "{}", report::ok_line(filename))?,
            Comparison::Differs { diff } => {
                writeln!(writer)?;
                writeln!(writer, "{}", report::diff_header(filename))?;
                write!(writer, "{}", diff)?;
            }
        }
    }

    Ok(())
}

/// Read one file fully into memory.
///
/// Each call is a scoped acquisition: the handle is released before the
/// comparison runs.
fn read_content(path: &Path) -> Result<String, RunError> {
    std::fs::read_to_string(path).map_err(|source| RunError::ReadFile {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
