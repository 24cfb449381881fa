//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities. Fixtures are consistent and
//! predictable so tests can assert on exact values.

use chrono::NaiveDate;
use core_kernel::{Currency, Money};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard claimed amount (5 000 XOF)
    pub fn xof_claimed() -> Money {
        Money::from_major(5_000, Currency::XOF)
    }

    /// Claimed amount that exceeds the standard ceiling after the rate
    pub fn xof_large_claim() -> Money {
        Money::from_major(20_000, Currency::XOF)
    }

    /// Standard ceiling (10 000 XOF)
    pub fn xof_ceiling() -> Money {
        Money::from_major(10_000, Currency::XOF)
    }

    /// Monthly contribution amount
    pub fn xof_contribution() -> Money {
        Money::from_major(2_500, Currency::XOF)
    }

    /// Zero amount
    pub fn xof_zero() -> Money {
        Money::zero(Currency::XOF)
    }

    /// Amount with a fractional part that rounds up (412.5)
    pub fn xof_half() -> Money {
        Money::new(dec!(412.5), Currency::XOF)
    }

    /// EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard contract start date (Jan 1, 2026)
    pub fn contract_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    /// Standard contribution period (Jan 2026)
    pub fn contribution_period() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    /// Standard care date (Mar 10, 2026)
    pub fn medical_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    /// Standard member birth date
    pub fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1988, 5, 14).unwrap()
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    /// Standard contract reference
    pub fn contract_reference() -> &'static str {
        "CTR-2026-001"
    }

    /// Standard member number
    pub fn member_number() -> &'static str {
        "ADH-0001"
    }

    /// Standard care category
    pub fn care_category() -> &'static str {
        "consultation"
    }
}
