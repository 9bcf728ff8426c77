// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `dataproc normalize` command implementation.

use std::time::Duration;

use anyhow::Context;

use dataproc::cli::{Cli, NormalizeArgs};
use dataproc::config::Config;
use dataproc::error::ExitCode;
use dataproc::normalize::Normalizer;
use dataproc::report::{self, Outcome};
use dataproc::verbose::VerboseLogger;

/// Run the `dataproc normalize` command on a single-threaded runtime.
pub fn run(cli: &Cli, args: &NormalizeArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let normalizer = match args.delay_ms {
        Some(ms) => Normalizer::new(Duration::from_millis(ms)),
        None => config.normalizer(),
    };

    let verbose = VerboseLogger::new(cli.verbose);
    verbose.section("normalize");
    verbose.field("delay", format!("{}ms", normalizer.delay().as_millis()));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to start async runtime")?;
    let value = runtime.block_on(normalizer.normalize(&args.value));

    let outcome = Outcome::new("normalize", vec![value]);
    report::format_outcome_to(&mut std::io::stdout().lock(), cli.output, &outcome)?;
    Ok(ExitCode::Success)
}
