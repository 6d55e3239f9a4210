//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for validation results that give
//! more meaningful error messages than standard assertions.

use std::fmt::Debug;

use domain_identity::identity_code::{parse_digits, weighted_sum};
use domain_identity::IdentityError;

/// Asserts that a validation failed with exactly `expected`
///
/// # Panics
///
/// Panics if the result is `Ok` or carries a different error
pub fn assert_rejected_with<T: Debug>(
    result: Result<T, IdentityError>,
    expected: impl Into<IdentityError>,
) {
    let expected = expected.into();
    match result {
        Ok(value) => panic!("Expected rejection with {:?}, got Ok({:?})", expected, value),
        Err(actual) => assert_eq!(
            actual, expected,
            "Rejected for the wrong reason: actual={}, expected={}",
            actual, expected
        ),
    }
}

/// Asserts that a validation failed with an error of the given kind tag
///
/// # Panics
///
/// Panics if the result is `Ok` or the error kind differs
pub fn assert_rejected_kind<T: Debug>(result: Result<T, IdentityError>, kind: &str) {
    match result {
        Ok(value) => panic!("Expected rejection of kind {}, got Ok({:?})", kind, value),
        Err(actual) => assert_eq!(
            actual.kind(),
            kind,
            "Rejected with unexpected kind: {}",
            actual
        ),
    }
}

/// Asserts that an 11-digit code has a valid weighted checksum
///
/// # Panics
///
/// Panics if the code is malformed or the checksum does not hold
pub fn assert_checksum_valid(code: &str) {
    let digits = parse_digits(code)
        .unwrap_or_else(|error| panic!("Code {} is malformed: {}", code, error));
    let sum = weighted_sum(&digits);
    assert_eq!(
        sum % 10,
        0,
        "Checksum of {} does not hold: weighted sum {}",
        code,
        sum
    );
}
