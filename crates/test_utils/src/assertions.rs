//! Custom Test Assertions
//!
//! Assertion helpers for domain types that give more meaningful error
//! messages than the standard macros.

use core_kernel::Money;
use domain_claims::{Claim, ClaimStatus};
use rust_decimal::Decimal;

/// Asserts that two Money values are equal in currency and amount
///
/// # Panics
///
/// Panics with both values spelled out when they differ
pub fn assert_money_eq(actual: &Money, expected: &Money) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );
    assert_eq!(
        actual.amount(),
        expected.amount(),
        "amounts differ: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that two Money values are approximately equal within a tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts a claim's status with the claim number in the failure message
pub fn assert_claim_status(claim: &Claim, expected: ClaimStatus) {
    assert_eq!(
        claim.status, expected,
        "claim {} is {}, expected {}",
        claim.claim_number, claim.status, expected
    );
}
