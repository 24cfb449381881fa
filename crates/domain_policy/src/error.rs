//! Policy domain errors

use core_kernel::{Money, StoreError};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the policy domain
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Invalid reimbursement rate: {0}% (must be between 0 and 100)")]
    InvalidRate(Decimal),

    #[error("Ceiling amount must not be negative: {0}")]
    NegativeCeiling(Money),

    #[error("An active policy already exists for category '{category}'")]
    DuplicateActivePolicy { category: String },

    #[error("Policy not found: {0}")]
    PolicyNotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
