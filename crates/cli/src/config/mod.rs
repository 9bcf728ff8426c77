// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing for `dataproc.toml`.

pub mod defaults;

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::normalize::Normalizer;
use crate::processor::Processor;

/// Top-level keys recognized in the config file.
const KNOWN_KEYS: &[&str] = &["version", "processor", "normalizer"];

/// Parsed `dataproc.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schema version (must be 1).
    pub version: i64,

    pub processor: ProcessorConfig,

    pub normalizer: NormalizerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: defaults::CONFIG_VERSION,
            processor: ProcessorConfig::default(),
            normalizer: NormalizerConfig::default(),
        }
    }
}

impl Config {
    /// Build a processor from `[processor.options]`.
    pub fn processor(&self) -> Processor {
        Processor::new(self.processor.options.clone())
    }

    /// Build a normalizer from `[normalizer]`.
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(Duration::from_millis(self.normalizer.delay_ms))
    }
}

/// `[processor]` section.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Opaque options handed to the processor unchanged.
    pub options: HashMap<String, String>,
}

/// `[normalizer]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Delay before the normalized value is produced, in milliseconds.
    pub delay_ms: u64,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            delay_ms: defaults::normalizer::DELAY_MS,
        }
    }
}

/// Load and validate a config file, warning about unrecognized keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    parse(&content, path)
}

/// Parse config content. `path` is only used for error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config_error = |message: String| Error::Config {
        path: path.to_path_buf(),
        message,
    };

    let table: toml::Table = toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    for key in table.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            tracing::warn!("unrecognized config key `{}` in {}", key, path.display());
        }
    }

    let config = table
        .try_into::<Config>()
        .map_err(|e| config_error(e.to_string()))?;

    if config.version != defaults::CONFIG_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (expected {})",
            config.version,
            defaults::CONFIG_VERSION
        )));
    }

    tracing::debug!(
        options = config.processor.options.len(),
        delay_ms = config.normalizer.delay_ms,
        "loaded config from {}",
        path.display()
    );
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
