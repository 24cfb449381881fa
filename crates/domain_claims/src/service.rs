//! Claim lifecycle manager

use std::sync::Arc;

use tracing::{info, instrument};

use core_kernel::{ClaimId, IdentityProvider};

use crate::claim::{Claim, ClaimStatus, NewClaim, TransitionInput};
use crate::error::ClaimError;
use crate::ports::{ClaimPort, EligibilityPort};

/// Owns claim creation and status transitions
///
/// All writes go through the store before the operation returns; there is no
/// fire-and-forget. The identity provider supplies the acting user for audit
/// attribution on the log records.
pub struct ClaimService {
    claims: Arc<dyn ClaimPort>,
    eligibility: Arc<dyn EligibilityPort>,
    identity: Arc<dyn IdentityProvider>,
}

impl ClaimService {
    pub fn new(
        claims: Arc<dyn ClaimPort>,
        eligibility: Arc<dyn EligibilityPort>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            claims,
            eligibility,
            identity,
        }
    }

    /// Submits a new claim for an eligible insured member
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-positive claimed amount and
    /// `NotEligible` when the insured's contract has no paid contribution.
    #[instrument(skip(self, new), fields(insured_id = %new.insured_id))]
    pub async fn create_claim(&self, new: NewClaim) -> Result<Claim, ClaimError> {
        if !new.claimed_amount.is_positive() {
            return Err(ClaimError::InvalidInput(format!(
                "claimed amount must be positive, got {}",
                new.claimed_amount
            )));
        }

        if !self.eligibility.is_eligible(new.insured_id).await? {
            return Err(ClaimError::NotEligible(new.insured_id.to_string()));
        }

        let claim = Claim::submit(new);
        self.claims.insert(claim.clone()).await?;

        let user = self.identity.current_user();
        info!(
            claim_id = %claim.id,
            claim_number = %claim.claim_number,
            category = %claim.care_category,
            by = %user.display_name,
            "claim submitted"
        );
        Ok(claim)
    }

    /// Transitions a claim to a new status
    ///
    /// When `input.expected_status` is set, the transition only applies if
    /// the claim is still in that status; a concurrent staff action that got
    /// there first surfaces as `StatusConflict` instead of being silently
    /// overwritten.
    #[instrument(skip(self, input))]
    pub async fn transition(
        &self,
        claim_id: ClaimId,
        target: ClaimStatus,
        input: TransitionInput,
    ) -> Result<Claim, ClaimError> {
        let mut claim = self
            .claims
            .by_id(claim_id)
            .await?
            .ok_or_else(|| ClaimError::ClaimNotFound(claim_id.to_string()))?;

        if let Some(expected) = input.expected_status {
            if claim.status != expected {
                return Err(ClaimError::StatusConflict {
                    expected,
                    actual: claim.status,
                });
            }
        }

        let from = claim.status;
        claim.apply_transition(target, &input)?;
        self.claims.update(claim.clone()).await?;

        let user = self.identity.current_user();
        info!(
            claim_id = %claim.id,
            claim_number = %claim.claim_number,
            from = %from,
            to = %target,
            by = %user.display_name,
            "claim status changed"
        );
        Ok(claim)
    }

    /// Fetches a claim by id
    pub async fn claim(&self, claim_id: ClaimId) -> Result<Claim, ClaimError> {
        self.claims
            .by_id(claim_id)
            .await?
            .ok_or_else(|| ClaimError::ClaimNotFound(claim_id.to_string()))
    }
}
