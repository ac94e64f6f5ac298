//! Tests for binary-digit encoding.

use primer::binary::*;
use primer::PrimerError;
use proptest::prelude::*;

#[test]
fn test_reference_values() {
    assert_eq!(to_binary_digits(5).unwrap(), "101");
    assert_eq!(to_binary_digits(10).unwrap(), "1010");
    assert_eq!(to_binary_digits(0).unwrap(), "0");

    assert_eq!(to_binary_literal(5).unwrap(), 101);
    assert_eq!(to_binary_literal(10).unwrap(), 1010);
    assert_eq!(to_binary_literal(0).unwrap(), 0);
}

#[test]
fn test_negative_input_fails() {
    assert!(matches!(to_binary_digits(-5), Err(PrimerError::NegativeInput(_))));
    assert!(matches!(to_binary_literal(-5), Err(PrimerError::NegativeInput(_))));
}

#[test]
fn test_literal_overflow_is_reported() {
    let err = to_binary_literal(i64::MAX).unwrap_err();
    assert!(matches!(err, PrimerError::Overflow(_)));
}

// =============================================================================
// Property-Based Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_digits_match_std_formatting(n in 0i64..=i64::MAX) {
        prop_assert_eq!(to_binary_digits(n).unwrap(), format!("{:b}", n));
    }

    #[test]
    fn prop_literal_matches_digits(n in 0i64..(1 << 20)) {
        let literal = to_binary_literal(n).unwrap();
        prop_assert_eq!(literal.to_string(), to_binary_digits(n).unwrap());
    }
}
