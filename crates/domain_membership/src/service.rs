//! Membership domain service

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, instrument};

use core_kernel::{ContractId, ContributionId, InsuredId, StoreError};

use crate::contract::Contribution;
use crate::eligibility::{filter_eligible_insured, paid_contract_ids};
use crate::error::MembershipError;
use crate::insured::Insured;
use crate::ports::MembershipPort;

/// Service answering eligibility questions over the membership population
pub struct MembershipService {
    store: Arc<dyn MembershipPort>,
}

impl MembershipService {
    pub fn new(store: Arc<dyn MembershipPort>) -> Self {
        Self { store }
    }

    /// Ids of contracts with at least one paid contribution
    pub async fn paid_contract_ids(&self) -> Result<HashSet<ContractId>, StoreError> {
        let contributions = self.store.list_contributions().await?;
        Ok(paid_contract_ids(&contributions))
    }

    /// The currently claim-eligible insured population
    pub async fn eligible_insured(&self) -> Result<Vec<Insured>, StoreError> {
        let paid = self.paid_contract_ids().await?;
        let insured = self.store.list_insured().await?;
        Ok(filter_eligible_insured(insured, &paid))
    }

    /// Whether one insured member is currently claim-eligible
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the insured does not exist; eligibility of a
    /// missing member is a caller error, not `false`.
    pub async fn is_eligible(&self, insured_id: InsuredId) -> Result<bool, StoreError> {
        let insured = self
            .store
            .insured_by_id(insured_id)
            .await?
            .ok_or_else(|| StoreError::not_found("Insured", insured_id))?;

        let contributions = self
            .store
            .contributions_for_contract(insured.contract_id)
            .await?;
        Ok(contributions.iter().any(Contribution::is_paid))
    }

    /// Records a contribution payment
    #[instrument(skip(self))]
    pub async fn record_payment(
        &self,
        contribution_id: ContributionId,
    ) -> Result<Contribution, MembershipError> {
        let contributions = self.store.list_contributions().await?;
        let mut contribution = contributions
            .into_iter()
            .find(|c| c.id == contribution_id)
            .ok_or_else(|| {
                MembershipError::Store(StoreError::not_found("Contribution", contribution_id))
            })?;

        contribution.mark_paid();
        self.store.update_contribution(contribution.clone()).await?;
        info!(
            contribution_id = %contribution_id,
            contract_id = %contribution.contract_id,
            "contribution marked paid"
        );
        Ok(contribution)
    }
}
