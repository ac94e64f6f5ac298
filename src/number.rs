//! Scalar number predicates and guarded arithmetic.
//!
//! This module holds the single-value operations: primality, parity,
//! factorial and a square root that refuses negative arguments.

use crate::{PrimerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest `n` whose factorial fits in a `u128`.
pub const MAX_FACTORIAL_INPUT: i64 = 34;

/// Test whether `n` is prime.
///
/// Values below 2 (including all negatives) are not prime. Otherwise every
/// candidate divisor up to `floor(sqrt(n))` is tried, stopping at the first
/// one that divides `n`.
///
/// # Examples
///
/// ```
/// use primer::number::is_prime;
///
/// assert!(is_prime(7));
/// assert!(!is_prime(1));
/// assert!(!is_prime(-10));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    let mut i: i64 = 2;
    // i <= n / i is i * i <= n without the overflow near i64::MAX
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Whether an integer is even or odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Classify `n`. Negative odd numbers are `Odd`.
    #[inline]
    pub fn of(n: i64) -> Self {
        if n % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => f.write_str("Even"),
            Parity::Odd => f.write_str("Odd"),
        }
    }
}

/// Compute `n!`.
///
/// # Errors
///
/// * [`PrimerError::NegativeInput`] if `n < 0`
/// * [`PrimerError::Overflow`] if `n > MAX_FACTORIAL_INPUT`
///
/// # Examples
///
/// ```
/// use primer::number::factorial;
///
/// assert_eq!(factorial(0).unwrap(), 1);
/// assert_eq!(factorial(5).unwrap(), 120);
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(PrimerError::NegativeInput(format!(
            "factorial is not defined for negative numbers: {}",
            n
        )));
    }
    (1..=n as u128).try_fold(1u128, |acc, i| {
        acc.checked_mul(i)
            .ok_or_else(|| PrimerError::Overflow(format!("{}! does not fit in 128 bits", n)))
    })
}

/// Square root that rejects negative input instead of returning NaN.
///
/// # Examples
///
/// ```
/// use primer::number::safe_sqrt;
///
/// assert_eq!(safe_sqrt(25.0).unwrap(), 5.0);
/// assert!(safe_sqrt(-9.0).is_err());
/// ```
pub fn safe_sqrt(x: f64) -> Result<f64> {
    if x.is_nan() {
        return Err(PrimerError::NonFinite(format!("x={}", x)));
    }
    if x < 0.0 {
        return Err(PrimerError::NegativeInput(format!(
            "cannot calculate sqrt of negative number: {}",
            x
        )));
    }
    Ok(x.sqrt())
}
