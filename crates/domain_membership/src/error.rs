//! Membership domain errors

use core_kernel::StoreError;
use thiserror::Error;

/// Errors that can occur in the membership domain
#[derive(Debug, Error)]
pub enum MembershipError {
    #[error("Contract not found: {0}")]
    ContractNotFound(String),

    #[error("Insured not found: {0}")]
    InsuredNotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
