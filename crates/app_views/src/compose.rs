//! Cross-domain wiring
//!
//! The claims domain only knows the `EligibilityPort` seam; this adapter
//! answers it from the membership service at the composition root.

use std::sync::Arc;

use async_trait::async_trait;

use core_kernel::{InsuredId, StoreError};
use domain_claims::EligibilityPort;
use domain_membership::MembershipService;

/// Answers claim-eligibility questions from membership data
pub struct MembershipEligibility(Arc<MembershipService>);

impl MembershipEligibility {
    pub fn new(membership: Arc<MembershipService>) -> Self {
        Self(membership)
    }
}

#[async_trait]
impl EligibilityPort for MembershipEligibility {
    async fn is_eligible(&self, insured_id: InsuredId) -> Result<bool, StoreError> {
        self.0.is_eligible(insured_id).await
    }
}
