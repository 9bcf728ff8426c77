// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `dataproc classify` command implementation.

use dataproc::classify::process_complex;
use dataproc::cli::{ClassifyArgs, Cli};
use dataproc::error::ExitCode;
use dataproc::report::{self, Outcome};

/// Run the `dataproc classify` command.
pub fn run(cli: &Cli, args: &ClassifyArgs) -> anyhow::Result<ExitCode> {
    let results = process_complex(&args.items)?;
    let outcome = Outcome::new("classify", results);
    report::format_outcome_to(&mut std::io::stdout().lock(), cli.output, &outcome)?;
    Ok(ExitCode::Success)
}
