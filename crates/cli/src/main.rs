// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! refdiff binary entry point.

use clap::Parser;

use refdiff::cli::Cli;
use refdiff::output_diagnostic::print_error;
use refdiff::runner;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = runner::run(&cli) {
        print_error(e.to_string());
        std::process::exit(1);
    }
}
