//! Claims domain errors

use core_kernel::{Money, StoreError};
use thiserror::Error;

use crate::claim::ClaimStatus;

/// Errors that can occur in the claims domain
///
/// Everything except `Store` is a caller contract violation and propagates
/// uncaught so calling code can present a corrective message. `Store` wraps
/// availability failures of the durable store.
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Insured {0} has no paid contract and cannot submit claims")]
    NotEligible(String),

    #[error("Claim not found: {0}")]
    ClaimNotFound(String),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: ClaimStatus, to: ClaimStatus },

    #[error("An approved amount is required")]
    MissingApproval,

    #[error("Paid amount {paid:?} must be present and must not exceed approved amount {approved}")]
    InvalidAmount {
        paid: Option<Money>,
        approved: Money,
    },

    #[error("Claim status changed concurrently: expected {expected}, found {actual}")]
    StatusConflict {
        expected: ClaimStatus,
        actual: ClaimStatus,
    },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
