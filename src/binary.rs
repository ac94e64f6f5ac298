//! Recursive binary-digit encoding.
//!
//! [`to_binary_digits`] spells a non-negative integer in base 2 as a string.
//! [`to_binary_literal`] produces the same digits packed into a decimal
//! integer (5 becomes 101), which only fits for small inputs and therefore
//! reports overflow explicitly.

use crate::{PrimerError, Result};

fn reject_negative(n: i64) -> Result<u64> {
    u64::try_from(n).map_err(|_| {
        PrimerError::NegativeInput(format!("binary digits are not defined for {}", n))
    })
}

fn push_digits(n: u64, out: &mut String) {
    if n >= 2 {
        push_digits(n / 2, out);
    }
    out.push(if n % 2 == 0 { '0' } else { '1' });
}

/// Return the base-2 digits of `n`, most significant first.
///
/// # Errors
///
/// [`PrimerError::NegativeInput`] if `n < 0`.
///
/// # Examples
///
/// ```
/// use primer::binary::to_binary_digits;
///
/// assert_eq!(to_binary_digits(5).unwrap(), "101");
/// assert_eq!(to_binary_digits(0).unwrap(), "0");
/// ```
pub fn to_binary_digits(n: i64) -> Result<String> {
    let n = reject_negative(n)?;
    let mut out = String::with_capacity(64);
    push_digits(n, &mut out);
    Ok(out)
}

fn literal(n: u64) -> Option<u64> {
    if n == 0 {
        return Some(0);
    }
    literal(n / 2)?.checked_mul(10)?.checked_add(n % 2)
}

/// Return the binary digits of `n` read as a decimal number.
///
/// Follows `f(n) = 10 * f(n / 2) + n % 2` with `f(0) = 0`. Inputs of
/// 2^20 and above no longer fit in a `u64` this way.
///
/// # Errors
///
/// * [`PrimerError::NegativeInput`] if `n < 0`
/// * [`PrimerError::Overflow`] if the encoded value exceeds `u64::MAX`
///
/// # Examples
///
/// ```
/// use primer::binary::to_binary_literal;
///
/// assert_eq!(to_binary_literal(10).unwrap(), 1010);
/// ```
pub fn to_binary_literal(n: i64) -> Result<u64> {
    let value = reject_negative(n)?;
    literal(value).ok_or_else(|| {
        PrimerError::Overflow(format!("binary literal of {} exceeds 64 bits", n))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_powers_of_two() {
        assert_eq!(to_binary_digits(1).unwrap(), "1");
        assert_eq!(to_binary_digits(2).unwrap(), "10");
        assert_eq!(to_binary_digits(1024).unwrap(), "10000000000");
    }

    #[test]
    fn test_digits_max() {
        let digits = to_binary_digits(i64::MAX).unwrap();
        assert_eq!(digits.len(), 63);
        assert!(digits.chars().all(|c| c == '1'));
    }

    #[test]
    fn test_literal_limit() {
        // 19 ones: 1111111111111111111 < u64::MAX (about 1.8e19)
        assert_eq!(to_binary_literal((1 << 19) - 1).unwrap(), 1_111_111_111_111_111_111);
        // 21 digits cannot fit
        assert!(matches!(
            to_binary_literal(1 << 20),
            Err(PrimerError::Overflow(_))
        ));
    }

    #[test]
    fn test_negative() {
        assert!(matches!(to_binary_digits(-1), Err(PrimerError::NegativeInput(_))));
        assert!(matches!(to_binary_literal(-5), Err(PrimerError::NegativeInput(_))));
    }
}
