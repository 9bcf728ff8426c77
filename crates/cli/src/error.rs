// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::path::PathBuf;

/// Errors raised by dataproc operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An argument outside the operation's domain (e.g. a negative index).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The result does not fit in the native integer type.
    #[error("fibonacci({n}) overflows u64, use the arbitrary-precision variant")]
    Overflow { n: i64 },

    /// An operation that requires at least one item received none.
    #[error("input cannot be empty")]
    EmptyInput,

    /// The config file could not be parsed or has an unsupported shape.
    #[error("config error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    /// The requested operation rejected its input.
    Failure = 1,
    ConfigError = 2,
    InternalError = 3,
}

impl ExitCode {
    /// Map a library error to the exit code the CLI reports for it.
    pub fn for_error(err: &Error) -> Self {
        match err {
            Error::InvalidArgument(_) | Error::Overflow { .. } | Error::EmptyInput => {
                ExitCode::Failure
            }
            Error::Config { .. } => ExitCode::ConfigError,
            Error::Io(_) => ExitCode::InternalError,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
