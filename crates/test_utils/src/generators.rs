//! Property-Based Test Generators
//!
//! Proptest strategies generating random test data that maintains the
//! domain invariants.

use core_kernel::{Currency, Money};
use domain_claims::ClaimStatus;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::XOF),
        Just(Currency::XAF),
        Just(Currency::GNF),
        Just(Currency::MAD),
        Just(Currency::EUR),
        Just(Currency::USD),
    ]
}

/// Strategy for generating positive whole amounts
pub fn positive_amount_strategy() -> impl Strategy<Value = i64> {
    1i64..100_000_000i64
}

/// Strategy for generating positive Money values
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    (positive_amount_strategy(), currency_strategy())
        .prop_map(|(amount, currency)| Money::from_major(amount, currency))
}

/// Strategy for generating positive XOF Money values
pub fn xof_money_strategy() -> impl Strategy<Value = Money> {
    positive_amount_strategy().prop_map(|amount| Money::from_major(amount, Currency::XOF))
}

/// Strategy for generating reimbursement percentages (0 to 100, 2 dp)
pub fn percentage_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..=10000u32).prop_map(|n| Decimal::new(n as i64, 2))
}

/// Strategy for generating claim statuses
pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Soumis),
        Just(ClaimStatus::Verification),
        Just(ClaimStatus::Valide),
        Just(ClaimStatus::Paye),
        Just(ClaimStatus::Rejete),
    ]
}

/// Strategy for generating non-terminal claim statuses
pub fn non_terminal_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Soumis),
        Just(ClaimStatus::Verification),
        Just(ClaimStatus::Valide),
    ]
}

/// Strategy for generating care category names
pub fn care_category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("consultation".to_string()),
        Just("pharmacie".to_string()),
        Just("hospitalisation".to_string()),
        Just("optique".to_string()),
        Just("dentaire".to_string()),
    ]
}
