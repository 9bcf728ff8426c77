// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plain text output: one result per line.

use std::io::Write;

use super::{Outcome, OutcomeFormatter};

pub struct TextFormatter;

impl OutcomeFormatter for TextFormatter {
    fn format_to(&self, writer: &mut dyn Write, outcome: &Outcome) -> std::io::Result<()> {
        for result in &outcome.results {
            writeln!(writer, "{}", result)?;
        }
        Ok(())
    }
}
