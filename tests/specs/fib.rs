// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `dataproc fib`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > fib 10 prints 55
#[test]
fn prints_tenth_term() {
    Project::empty()
        .cmd()
        .args(["fib", "10"])
        .assert()
        .success()
        .stdout("55\n");
}

/// > Negative indices are rejected with exit code 1
#[test]
fn negative_index_fails() {
    Project::empty()
        .cmd()
        .args(["fib", "-1"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("invalid argument"));
}

/// > Indices past the u64 range overflow unless --big is given
#[test]
fn overflow_fails_without_big() {
    Project::empty()
        .cmd()
        .args(["fib", "100"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("overflows"));
}

#[test]
fn big_handles_large_index() {
    Project::empty()
        .cmd()
        .args(["fib", "100", "--big"])
        .assert()
        .success()
        .stdout("354224848179261915075\n");
}

#[test]
fn big_rejects_negative_index() {
    Project::empty()
        .cmd()
        .args(["fib", "-5", "--big"])
        .assert()
        .code(1);
}

/// > JSON results are strings so arbitrary-precision terms survive intact
#[test]
fn json_results_are_strings() {
    let output = Project::empty()
        .cmd()
        .args(["fib", "100", "--big", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["command"], "fib");
    assert_eq!(value["results"], serde_json::json!(["354224848179261915075"]));
}

#[test]
fn json_small_term_is_string() {
    let output = Project::empty().cmd().args(["fib", "10", "-o", "json"]).output().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["results"], serde_json::json!(["55"]));
}
