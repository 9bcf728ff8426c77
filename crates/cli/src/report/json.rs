// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format output.

use std::io::Write;

use super::{Outcome, OutcomeFormatter};

/// Pretty-printed JSON formatter.
pub struct JsonFormatter;

impl OutcomeFormatter for JsonFormatter {
    fn format_to(&self, writer: &mut dyn Write, outcome: &Outcome) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, outcome)?;
        writeln!(writer)
    }
}
