// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Delayed asynchronous normalization.
//!
//! The timer sleep is the only await point. Dropping the future before it
//! completes cancels the operation with no result and no side effects.

use std::time::Duration;

use crate::config::defaults;

/// Uppercases values after a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    delay: Duration,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(Duration::from_millis(defaults::normalizer::DELAY_MS))
    }
}

impl Normalizer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait for the configured delay, then return `value` uppercased.
    pub async fn normalize(&self, value: &str) -> String {
        tokio::time::sleep(self.delay).await;
        tracing::trace!(len = value.len(), "normalized value");
        value.to_uppercase()
    }
}

/// Uppercase `value` after the default 100ms delay.
pub async fn normalize(value: &str) -> String {
    Normalizer::default().normalize(value).await
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
