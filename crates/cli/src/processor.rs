// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Item-processing pipeline.
//!
//! A [`Processor`] filters out empty items and transforms the rest,
//! preserving input order.

use std::collections::HashMap;

use crate::transform::{ItemTransformer, Uppercase};

/// Filters and transforms sequences of text items.
///
/// The options map is stored as given and not interpreted. The cache is
/// never populated: `cache_size()` reports 0 for the processor's lifetime.
pub struct Processor<T = Uppercase> {
    config: HashMap<String, String>,
    cache: HashMap<String, String>,
    transformer: T,
}

impl Processor<Uppercase> {
    pub fn new(config: HashMap<String, String>) -> Self {
        Self::with_transformer(config, Uppercase)
    }
}

impl<T: ItemTransformer> Processor<T> {
    /// Create a processor that delegates each kept item to `transformer`.
    pub fn with_transformer(config: HashMap<String, String>, transformer: T) -> Self {
        Self {
            config,
            cache: HashMap::new(),
            transformer,
        }
    }

    /// Transform every non-empty item, dropping empty ones.
    pub fn process<S: AsRef<str>>(&self, items: &[S]) -> Vec<String> {
        let results: Vec<String> = items
            .iter()
            .map(AsRef::as_ref)
            .filter(|item| !item.is_empty())
            .map(|item| self.transformer.transform(item))
            .collect();

        tracing::debug!(
            input = items.len(),
            kept = results.len(),
            "processed items"
        );
        results
    }

    /// Number of entries currently held in the cache.
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    pub fn config(&self) -> &HashMap<String, String> {
        &self.config
    }
}

#[cfg(test)]
#[path = "processor_tests.rs"]
mod tests;
