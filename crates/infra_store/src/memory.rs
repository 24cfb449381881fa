//! In-memory store adapter

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::broadcast;
use tracing::debug;

use core_kernel::{
    BeneficiaryId, ChangeEvent, ChangeFeed, ChangeSubscription, ClaimId, ContractId,
    ContributionId, EntityKind, IdentityProvider, InsuredId, PolicyId, StoreError, UserContext,
    UserId,
};
use domain_claims::{Claim, ClaimPort};
use domain_membership::{Beneficiary, Contract, Contribution, Insured, MembershipPort};
use domain_policy::{CeilingPolicy, PolicyPort};

const FEED_CAPACITY: usize = 256;

/// In-memory implementation of every domain port plus the change feed
///
/// Writes are atomic per call (one map operation) and each publishes a change
/// event for the touched entity kind, mirroring the notification behaviour of
/// the real store.
pub struct MemoryStore {
    policies: DashMap<PolicyId, CeilingPolicy>,
    contracts: DashMap<ContractId, Contract>,
    contributions: DashMap<ContributionId, Contribution>,
    insured: DashMap<InsuredId, Insured>,
    beneficiaries: DashMap<BeneficiaryId, Beneficiary>,
    claims: DashMap<ClaimId, Claim>,
    events: broadcast::Sender<ChangeEvent>,
    user: UserContext,
}

impl MemoryStore {
    /// Creates an empty store attributed to the given user
    pub fn new(user: UserContext) -> Arc<Self> {
        let (events, _) = broadcast::channel(FEED_CAPACITY);
        Arc::new(Self {
            policies: DashMap::new(),
            contracts: DashMap::new(),
            contributions: DashMap::new(),
            insured: DashMap::new(),
            beneficiaries: DashMap::new(),
            claims: DashMap::new(),
            events,
            user,
        })
    }

    /// Creates an empty store with an anonymous system user
    pub fn new_anonymous() -> Arc<Self> {
        Self::new(UserContext::new(UserId::new(), "system"))
    }

    fn publish(&self, kind: EntityKind) {
        // Send fails only when nobody is subscribed, which is fine.
        let _ = self.events.send(ChangeEvent::now(kind));
        debug!(?kind, "change event published");
    }
}

impl ChangeFeed for MemoryStore {
    fn subscribe(&self, kinds: &[EntityKind]) -> ChangeSubscription {
        ChangeSubscription::new(kinds.to_vec(), self.events.subscribe())
    }
}

impl IdentityProvider for MemoryStore {
    fn current_user(&self) -> UserContext {
        self.user.clone()
    }
}

#[async_trait]
impl PolicyPort for MemoryStore {
    async fn insert(&self, policy: CeilingPolicy) -> Result<(), StoreError> {
        self.policies.insert(policy.id, policy);
        self.publish(EntityKind::Policy);
        Ok(())
    }

    async fn update(&self, policy: CeilingPolicy) -> Result<(), StoreError> {
        if !self.policies.contains_key(&policy.id) {
            return Err(StoreError::not_found("CeilingPolicy", policy.id));
        }
        self.policies.insert(policy.id, policy);
        self.publish(EntityKind::Policy);
        Ok(())
    }

    async fn by_id(&self, id: PolicyId) -> Result<Option<CeilingPolicy>, StoreError> {
        Ok(self.policies.get(&id).map(|entry| entry.clone()))
    }

    async fn list(&self) -> Result<Vec<CeilingPolicy>, StoreError> {
        Ok(self.policies.iter().map(|entry| entry.clone()).collect())
    }

    async fn active_by_category(
        &self,
        category: &str,
    ) -> Result<Option<CeilingPolicy>, StoreError> {
        Ok(self
            .policies
            .iter()
            .find(|entry| entry.active && entry.category == category)
            .map(|entry| entry.clone()))
    }
}

#[async_trait]
impl MembershipPort for MemoryStore {
    async fn insert_contract(&self, contract: Contract) -> Result<(), StoreError> {
        self.contracts.insert(contract.id, contract);
        self.publish(EntityKind::Contract);
        Ok(())
    }

    async fn contract_by_id(&self, id: ContractId) -> Result<Option<Contract>, StoreError> {
        Ok(self.contracts.get(&id).map(|entry| entry.clone()))
    }

    async fn list_contracts(&self) -> Result<Vec<Contract>, StoreError> {
        Ok(self.contracts.iter().map(|entry| entry.clone()).collect())
    }

    async fn insert_contribution(&self, contribution: Contribution) -> Result<(), StoreError> {
        self.contributions.insert(contribution.id, contribution);
        self.publish(EntityKind::Contribution);
        Ok(())
    }

    async fn update_contribution(&self, contribution: Contribution) -> Result<(), StoreError> {
        if !self.contributions.contains_key(&contribution.id) {
            return Err(StoreError::not_found("Contribution", contribution.id));
        }
        self.contributions.insert(contribution.id, contribution);
        self.publish(EntityKind::Contribution);
        Ok(())
    }

    async fn list_contributions(&self) -> Result<Vec<Contribution>, StoreError> {
        Ok(self
            .contributions
            .iter()
            .map(|entry| entry.clone())
            .collect())
    }

    async fn contributions_for_contract(
        &self,
        contract_id: ContractId,
    ) -> Result<Vec<Contribution>, StoreError> {
        Ok(self
            .contributions
            .iter()
            .filter(|entry| entry.contract_id == contract_id)
            .map(|entry| entry.clone())
            .collect())
    }

    async fn insert_insured(&self, insured: Insured) -> Result<(), StoreError> {
        self.insured.insert(insured.id, insured);
        self.publish(EntityKind::Insured);
        Ok(())
    }

    async fn insured_by_id(&self, id: InsuredId) -> Result<Option<Insured>, StoreError> {
        Ok(self.insured.get(&id).map(|entry| entry.clone()))
    }

    async fn list_insured(&self) -> Result<Vec<Insured>, StoreError> {
        Ok(self.insured.iter().map(|entry| entry.clone()).collect())
    }

    async fn insert_beneficiary(&self, beneficiary: Beneficiary) -> Result<(), StoreError> {
        self.beneficiaries.insert(beneficiary.id, beneficiary);
        self.publish(EntityKind::Beneficiary);
        Ok(())
    }

    async fn beneficiaries_for_insured(
        &self,
        insured_id: InsuredId,
    ) -> Result<Vec<Beneficiary>, StoreError> {
        Ok(self
            .beneficiaries
            .iter()
            .filter(|entry| entry.insured_id == insured_id)
            .map(|entry| entry.clone())
            .collect())
    }
}

#[async_trait]
impl ClaimPort for MemoryStore {
    async fn insert(&self, claim: Claim) -> Result<(), StoreError> {
        self.claims.insert(claim.id, claim);
        self.publish(EntityKind::Claim);
        Ok(())
    }

    async fn update(&self, claim: Claim) -> Result<(), StoreError> {
        if !self.claims.contains_key(&claim.id) {
            return Err(StoreError::not_found("Claim", claim.id));
        }
        self.claims.insert(claim.id, claim);
        self.publish(EntityKind::Claim);
        Ok(())
    }

    async fn by_id(&self, id: ClaimId) -> Result<Option<Claim>, StoreError> {
        Ok(self.claims.get(&id).map(|entry| entry.clone()))
    }

    async fn list(&self) -> Result<Vec<Claim>, StoreError> {
        Ok(self.claims.iter().map(|entry| entry.clone()).collect())
    }
}
