// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Small text pipeline, Fibonacci generator and async normalizer
#[derive(Parser)]
#[command(name = "dataproc")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "DATAPROC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Uppercase items, dropping empty ones
    Process(ProcessArgs),
    /// Tag items by their leading character
    Classify(ClassifyArgs),
    /// Print the n-th Fibonacci number
    Fib(FibArgs),
    /// Uppercase a value after the configured delay
    Normalize(NormalizeArgs),
}

#[derive(clap::Args)]
pub struct ProcessArgs {
    /// Items to process (read from stdin, one per line, when omitted)
    #[arg(value_name = "ITEM")]
    pub items: Vec<String>,
}

#[derive(clap::Args)]
pub struct ClassifyArgs {
    /// Items to classify
    #[arg(value_name = "ITEM")]
    pub items: Vec<String>,
}

#[derive(clap::Args)]
pub struct FibArgs {
    /// Sequence index
    #[arg(allow_negative_numbers = true)]
    pub n: i64,

    /// Use arbitrary precision (no overflow limit)
    #[arg(long)]
    pub big: bool,
}

#[derive(clap::Args)]
pub struct NormalizeArgs {
    /// Value to normalize
    pub value: String,

    /// Override the configured delay in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
