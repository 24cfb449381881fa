//! Policy store port

use async_trait::async_trait;

use core_kernel::{PolicyId, StoreError};

use crate::policy::CeilingPolicy;

/// Durable store access for ceiling policies
///
/// Implemented by the store adapter; the domain only sees this trait.
#[async_trait]
pub trait PolicyPort: Send + Sync {
    /// Inserts a new policy
    async fn insert(&self, policy: CeilingPolicy) -> Result<(), StoreError>;

    /// Updates an existing policy by id
    async fn update(&self, policy: CeilingPolicy) -> Result<(), StoreError>;

    /// Fetches a policy by id
    async fn by_id(&self, id: PolicyId) -> Result<Option<CeilingPolicy>, StoreError>;

    /// Lists all policies
    async fn list(&self) -> Result<Vec<CeilingPolicy>, StoreError>;

    /// Returns the active policy for a category, if one exists
    ///
    /// Absence is not an error: it means no ceiling applies.
    async fn active_by_category(&self, category: &str)
        -> Result<Option<CeilingPolicy>, StoreError>;
}
