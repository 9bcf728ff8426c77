// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_classify;
mod cmd_fib;
mod cmd_normalize;
mod cmd_process;

use std::io::IsTerminal;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dataproc::cli::{Cli, Command};
use dataproc::config::{self, Config};
use dataproc::discovery;
use dataproc::error::ExitCode;
use dataproc::verbose::VerboseLogger;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(&cli) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("dataproc: {:#}", err);
            let code = err
                .downcast_ref::<dataproc::Error>()
                .map(ExitCode::for_error)
                .unwrap_or(ExitCode::InternalError);
            code.into()
        }
    }
}

/// Install the stderr tracing subscriber, filtered by `DATAPROC_LOG` (default `warn`).
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("DATAPROC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = match load_config(cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("dataproc: {:#}", err);
            return Ok(ExitCode::ConfigError);
        }
    };

    match &cli.command {
        Command::Process(args) => cmd_process::run(cli, args, &config),
        Command::Classify(args) => cmd_classify::run(cli, args),
        Command::Fib(args) => cmd_fib::run(cli, args),
        Command::Normalize(args) => cmd_normalize::run(cli, args, &config),
    }
}

/// Load the explicit `--config` file, or the discovered one, or defaults.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let cwd = std::env::current_dir()?;
    let source = discovery::resolve(cli.config.as_deref(), &cwd);

    let verbose = VerboseLogger::new(cli.verbose);
    if verbose.is_enabled() {
        verbose.section("config");
        verbose.field("source", &source);
    }

    match source.path() {
        Some(path) => config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}
