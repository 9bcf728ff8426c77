// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `dataproc fib` command implementation.

use dataproc::cli::{Cli, FibArgs};
use dataproc::error::{Error, ExitCode};
use dataproc::report::{self, Outcome};
use dataproc::sequence::{fibonacci, fibonacci_big};
use dataproc::verbose::VerboseLogger;

/// Run the `dataproc fib` command.
pub fn run(cli: &Cli, args: &FibArgs) -> anyhow::Result<ExitCode> {
    let value = if args.big {
        let n = u64::try_from(args.n).map_err(|_| {
            Error::InvalidArgument(format!(
                "fibonacci index must be non-negative, got {}",
                args.n
            ))
        })?;
        fibonacci_big(n).to_string()
    } else {
        fibonacci(args.n)?.to_string()
    };

    let verbose = VerboseLogger::new(cli.verbose);
    verbose.section("fib");
    verbose.field("index", args.n);
    verbose.field("precision", if args.big { "arbitrary" } else { "u64" });
    verbose.field("digits", value.len());

    let outcome = Outcome::new("fib", vec![value]);
    report::format_outcome_to(&mut std::io::stdout().lock(), cli.output, &outcome)?;
    Ok(ExitCode::Success)
}
