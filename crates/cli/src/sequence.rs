// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fibonacci sequence terms.
//!
//! [`fibonacci`] works in `u64` and reports overflow; [`fibonacci_big`]
//! uses arbitrary precision and never fails.

use num_bigint::BigUint;

use crate::error::{Error, Result};

/// Largest index whose term fits in a `u64`.
pub const MAX_U64_INDEX: i64 = 93;

/// Compute the `n`-th Fibonacci number, with `fibonacci(0) == 0`.
///
/// Negative indices are rejected with [`Error::InvalidArgument`]; indices
/// above [`MAX_U64_INDEX`] yield [`Error::Overflow`].
pub fn fibonacci(n: i64) -> Result<u64> {
    if n < 0 {
        return Err(Error::InvalidArgument(format!(
            "fibonacci index must be non-negative, got {n}"
        )));
    }
    if n <= 1 {
        return Ok(n as u64);
    }

    let (mut a, mut b) = (0u64, 1u64);
    for _ in 1..n {
        let next = a.checked_add(b).ok_or(Error::Overflow { n })?;
        a = b;
        b = next;
    }
    Ok(b)
}

/// Compute the `n`-th Fibonacci number without an upper bound.
pub fn fibonacci_big(n: u64) -> BigUint {
    if n <= 1 {
        return BigUint::from(n);
    }

    let mut a = BigUint::from(0u32);
    let mut b = BigUint::from(1u32);
    for _ in 1..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    b
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;
