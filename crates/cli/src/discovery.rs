// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolves which `dataproc.toml`, if any, a run should use.
//!
//! An explicit `--config` path wins. Otherwise the search climbs parent
//! directories from the working directory and gives up at the first
//! directory containing `.git`.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::defaults::CONFIG_FILE;

/// Where the effective configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config` or `DATAPROC_CONFIG`.
    Explicit(PathBuf),
    /// Found by searching upward; `levels_up` is 0 for the start directory.
    Discovered { path: PathBuf, levels_up: usize },
    /// No file: built-in defaults apply.
    Defaults,
}

impl ConfigSource {
    /// The file to load, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Discovered { path, .. } => {
                Some(path.as_path())
            }
            ConfigSource::Defaults => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(path) => write!(f, "{} (explicit)", path.display()),
            ConfigSource::Discovered { path, levels_up: 0 } => {
                write!(f, "{} (working directory)", path.display())
            }
            ConfigSource::Discovered { path, levels_up } => {
                write!(f, "{} ({} level(s) up)", path.display(), levels_up)
            }
            ConfigSource::Defaults => f.write_str("built-in defaults"),
        }
    }
}

/// Pick the config source for a run starting in `start_dir`.
pub fn resolve(explicit: Option<&Path>, start_dir: &Path) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    for (levels_up, dir) in start_dir.ancestors().enumerate() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!("found {} {} level(s) up", CONFIG_FILE, levels_up);
            return ConfigSource::Discovered {
                path: candidate,
                levels_up,
            };
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    ConfigSource::Defaults
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
