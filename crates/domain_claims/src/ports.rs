//! Claims store and eligibility ports

use async_trait::async_trait;

use core_kernel::{ClaimId, InsuredId, StoreError};

use crate::claim::Claim;

/// Durable store access for claims
///
/// Each write is atomic per call; the service relies on that row-level
/// atomicity for single updates and adds an optimistic status check on top.
#[async_trait]
pub trait ClaimPort: Send + Sync {
    /// Inserts a new claim
    async fn insert(&self, claim: Claim) -> Result<(), StoreError>;

    /// Updates an existing claim by id
    async fn update(&self, claim: Claim) -> Result<(), StoreError>;

    /// Fetches a claim by id
    async fn by_id(&self, id: ClaimId) -> Result<Option<Claim>, StoreError>;

    /// Lists all claims
    async fn list(&self) -> Result<Vec<Claim>, StoreError>;
}

/// Answers whether an insured member may currently submit claims
///
/// Implemented over the membership domain at the composition root; claims
/// only see the question, not the contribution data behind it.
#[async_trait]
pub trait EligibilityPort: Send + Sync {
    async fn is_eligible(&self, insured_id: InsuredId) -> Result<bool, StoreError>;
}
