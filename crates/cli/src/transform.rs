// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-item text transformation.

/// Converts a single item into its processed form.
///
/// Implementations must be pure: the same input always yields the same output.
pub trait ItemTransformer: Send + Sync {
    fn transform(&self, item: &str) -> String;
}

/// Full Unicode uppercasing (`"straße"` becomes `"STRASSE"`).
#[derive(Debug, Default, Clone, Copy)]
pub struct Uppercase;

impl ItemTransformer for Uppercase {
    fn transform(&self, item: &str) -> String {
        item.to_uppercase()
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
