// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `dataproc process` command implementation.

use std::io::BufRead;

use dataproc::cli::{Cli, ProcessArgs};
use dataproc::config::Config;
use dataproc::error::ExitCode;
use dataproc::report::{self, Outcome};
use dataproc::verbose::VerboseLogger;

/// Run the `dataproc process` command.
pub fn run(cli: &Cli, args: &ProcessArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let items = if args.items.is_empty() {
        read_stdin_items()?
    } else {
        args.items.clone()
    };

    let processor = config.processor();
    let results = processor.process(&items);
    let dropped = items.len() - results.len();

    let verbose = VerboseLogger::new(cli.verbose);
    verbose.section("process");
    verbose.field("options", processor.config().len());
    verbose.field("input", items.len());
    verbose.field("kept", results.len());
    verbose.field("dropped", dropped);
    verbose.field("cache entries", processor.cache_size());

    let outcome = Outcome::new("process", results).with_dropped(dropped);
    report::format_outcome_to(&mut std::io::stdout().lock(), cli.output, &outcome)?;
    Ok(ExitCode::Success)
}

fn read_stdin_items() -> anyhow::Result<Vec<String>> {
    let stdin = std::io::stdin();
    let items = stdin.lock().lines().collect::<Result<Vec<_>, _>>()?;
    Ok(items)
}
