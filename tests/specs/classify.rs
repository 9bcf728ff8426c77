// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `dataproc classify`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Items are tagged by prefix and length
#[test]
fn tags_items_by_prefix() {
    Project::empty()
        .cmd()
        .args(["classify", "Apple", "Avocado", "Banana", "cherry"])
        .assert()
        .success()
        .stdout("A_SHORT_Apple\nA_LONG_Avocado\nB_BANANA\nunknown_3\n");
}

/// > No items is an error with exit code 1
#[test]
fn no_items_fails() {
    Project::empty()
        .cmd()
        .arg("classify")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("input cannot be empty"));
}
