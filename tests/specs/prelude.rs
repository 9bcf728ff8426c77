// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use assert_cmd::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the dataproc binary.
///
/// Clears the environment variables that would change config or logging.
pub fn dataproc_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dataproc"));
    cmd.env_remove("DATAPROC_CONFIG").env_remove("DATAPROC_LOG");
    cmd
}

/// A temporary project directory.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// An empty project with no config file.
    ///
    /// Contains a `.git` marker so config discovery stops here.
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Write `dataproc.toml` with the given content.
    pub fn config(&self, content: &str) {
        std::fs::write(self.dir.path().join("dataproc.toml"), content).unwrap();
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A dataproc command running inside this project.
    pub fn cmd(&self) -> Command {
        let mut cmd = dataproc_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}
