// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `dataproc normalize`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::time::{Duration, Instant};

use crate::prelude::*;

/// > Value is uppercased after the default delay
#[test]
fn uppercases_after_default_delay() {
    let start = Instant::now();
    Project::empty()
        .cmd()
        .args(["normalize", "abc"])
        .assert()
        .success()
        .stdout("ABC\n");
    assert!(start.elapsed() >= Duration::from_millis(100));
}

/// > --delay-ms overrides the configured delay
#[test]
fn delay_override() {
    Project::empty()
        .cmd()
        .args(["normalize", "--delay-ms", "0", "straße"])
        .assert()
        .success()
        .stdout("STRASSE\n");
}

/// > --verbose reports the delay taken from config
#[test]
fn verbose_reports_configured_delay() {
    let project = Project::empty();
    project.config("[normalizer]\ndelay_ms = 3\n");

    project
        .cmd()
        .args(["normalize", "-v", "x"])
        .assert()
        .success()
        .stdout("X\n")
        .stderr(predicates::str::contains("delay: 3ms"));
}
