// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command output formatting.
//!
//! Every command produces an [`Outcome`], rendered as text or JSON.

mod json;
mod text;

use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub command: &'static str,
    pub results: Vec<String>,
    /// Items removed by filtering (only reported by `process`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropped: Option<usize>,
}

impl Outcome {
    pub fn new(command: &'static str, results: Vec<String>) -> Self {
        Self {
            command,
            results,
            dropped: None,
        }
    }

    pub fn with_dropped(mut self, dropped: usize) -> Self {
        self.dropped = Some(dropped);
        self
    }
}

/// Renders an outcome into a writer.
pub trait OutcomeFormatter {
    fn format_to(&self, writer: &mut dyn Write, outcome: &Outcome) -> std::io::Result<()>;
}

/// Write `outcome` in `format`, followed by a trailing newline.
pub fn format_outcome_to(
    writer: &mut dyn Write,
    format: OutputFormat,
    outcome: &Outcome,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => TextFormatter.format_to(writer, outcome),
        OutputFormat::Json => JsonFormatter.format_to(writer, outcome),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
