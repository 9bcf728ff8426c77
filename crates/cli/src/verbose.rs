// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose diagnostics for CLI commands.
//!
//! Writes to stderr so stdout stays machine-readable. Enabled with
//! `--verbose`.

use std::fmt::Display;

/// Verbose output logger. All output is conditional on verbose mode.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a section header.
    pub fn section(&self, title: &str) {
        if self.enabled {
            eprintln!("\n{}:", title);
        }
    }

    /// Print an indented `name: value` line under the current section.
    pub fn field(&self, name: &str, value: impl Display) {
        if self.enabled {
            eprintln!("{}", format_field(name, value));
        }
    }
}

/// Render a `name: value` line the way [`VerboseLogger::field`] prints it.
pub fn format_field(name: &str, value: impl Display) -> String {
    format!("  {}: {}", name, value)
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
