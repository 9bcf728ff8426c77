// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! dataproc: text item pipeline, Fibonacci terms and delayed normalization.
//!
//! The library performs no I/O apart from [`config::load`]; the `dataproc`
//! binary wraps it in a CLI.

pub mod classify;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod normalize;
pub mod processor;
pub mod report;
pub mod sequence;
pub mod transform;
pub mod verbose;

#[cfg(test)]
pub mod test_utils;

pub use classify::process_complex;
pub use error::{Error, Result};
pub use normalize::{Normalizer, normalize};
pub use processor::Processor;
pub use sequence::{fibonacci, fibonacci_big};
pub use transform::{ItemTransformer, Uppercase};

/// Library version, reported as API version.
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
