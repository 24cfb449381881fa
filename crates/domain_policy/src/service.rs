//! Policy domain service

use std::sync::Arc;

use core_kernel::{Money, PolicyId};
use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::approval::{compute_approval, Approval};
use crate::error::PolicyError;
use crate::policy::CeilingPolicy;
use crate::ports::PolicyPort;

/// Service owning ceiling-policy writes and lookups
///
/// Uniqueness of the active policy per category is enforced here at write
/// time, so reads never have to disambiguate between several active policies.
pub struct PolicyService {
    store: Arc<dyn PolicyPort>,
}

impl PolicyService {
    pub fn new(store: Arc<dyn PolicyPort>) -> Self {
        Self { store }
    }

    /// Creates and persists a new active ceiling policy
    ///
    /// # Errors
    ///
    /// Returns `DuplicateActivePolicy` if an active policy already exists for
    /// the category, `InvalidRate`/`NegativeCeiling` on malformed input.
    #[instrument(skip(self))]
    pub async fn create_policy(
        &self,
        category: &str,
        rate_percent: Decimal,
        ceiling: Money,
        description: Option<String>,
    ) -> Result<CeilingPolicy, PolicyError> {
        if self.store.active_by_category(category).await?.is_some() {
            return Err(PolicyError::DuplicateActivePolicy {
                category: category.to_string(),
            });
        }

        let mut policy = CeilingPolicy::new(category, rate_percent, ceiling)?;
        policy.description = description;

        self.store.insert(policy.clone()).await?;
        info!(policy_id = %policy.id, category, "ceiling policy created");
        Ok(policy)
    }

    /// Returns the active policy for a category, if any
    pub async fn active_policy(&self, category: &str) -> Result<Option<CeilingPolicy>, PolicyError> {
        Ok(self.store.active_by_category(category).await?)
    }

    /// Takes a policy out of force
    #[instrument(skip(self))]
    pub async fn deactivate_policy(&self, id: PolicyId) -> Result<CeilingPolicy, PolicyError> {
        let mut policy = self
            .store
            .by_id(id)
            .await?
            .ok_or_else(|| PolicyError::PolicyNotFound(id.to_string()))?;

        policy.deactivate();
        self.store.update(policy.clone()).await?;
        info!(policy_id = %id, category = %policy.category, "ceiling policy deactivated");
        Ok(policy)
    }

    /// Lists all policies, active or not
    pub async fn list_policies(&self) -> Result<Vec<CeilingPolicy>, PolicyError> {
        Ok(self.store.list().await?)
    }

    /// Computes the approval for a claimed amount under the category's active policy
    pub async fn approve_amount(
        &self,
        category: &str,
        claimed: Money,
    ) -> Result<Approval, PolicyError> {
        let policy = self.store.active_by_category(category).await?;
        Ok(compute_approval(policy.as_ref(), claimed))
    }
}
