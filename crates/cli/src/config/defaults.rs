// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! Config structs delegate to these constants via their `default_*` methods.

/// Name of the config file searched for by discovery.
pub const CONFIG_FILE: &str = "dataproc.toml";

/// The only config schema version currently understood.
pub const CONFIG_VERSION: i64 = 1;

/// Normalizer defaults.
pub mod normalizer {
    /// Delay before a normalized value is produced (100ms).
    pub const DELAY_MS: u64 = 100;
}
