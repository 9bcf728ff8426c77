// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prefix-based item classification.
//!
//! Items starting with `A` are tagged by length, items starting with `B`
//! are uppercased, and everything else is replaced by its position.

use crate::error::{Error, Result};

/// Items longer than this many bytes are tagged `A_LONG_`.
const LONG_THRESHOLD: usize = 5;

/// Classification of a single item by its leading character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    TypeA,
    TypeB,
    Unknown,
}

impl ItemKind {
    /// Classify by case-sensitive prefix.
    pub fn of(item: &str) -> Self {
        if item.starts_with('A') {
            ItemKind::TypeA
        } else if item.starts_with('B') {
            ItemKind::TypeB
        } else {
            ItemKind::Unknown
        }
    }
}

/// Tag every item by its prefix. Fails on empty input.
///
/// Unlike [`Processor::process`](crate::processor::Processor::process),
/// nothing is filtered: the output has one entry per input item.
pub fn process_complex<S: AsRef<str>>(items: &[S]) -> Result<Vec<String>> {
    if items.is_empty() {
        return Err(Error::EmptyInput);
    }

    Ok(items
        .iter()
        .enumerate()
        .map(|(index, item)| classify_item(index, item.as_ref()))
        .collect())
}

fn classify_item(index: usize, item: &str) -> String {
    match ItemKind::of(item) {
        ItemKind::TypeA if item.len() > LONG_THRESHOLD => format!("A_LONG_{item}"),
        ItemKind::TypeA => format!("A_SHORT_{item}"),
        ItemKind::TypeB => format!("B_{}", item.to_uppercase()),
        ItemKind::Unknown => format!("unknown_{index}"),
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
