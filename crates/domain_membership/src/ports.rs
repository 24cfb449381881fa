//! Membership store port

use async_trait::async_trait;

use core_kernel::{ContractId, InsuredId, StoreError};

use crate::contract::{Contract, Contribution};
use crate::insured::{Beneficiary, Insured};

/// Durable store access for contracts, contributions, insured, and beneficiaries
#[async_trait]
pub trait MembershipPort: Send + Sync {
    /// Inserts a new contract
    async fn insert_contract(&self, contract: Contract) -> Result<(), StoreError>;

    /// Fetches a contract by id
    async fn contract_by_id(&self, id: ContractId) -> Result<Option<Contract>, StoreError>;

    /// Lists all contracts
    async fn list_contracts(&self) -> Result<Vec<Contract>, StoreError>;

    /// Inserts a new contribution
    async fn insert_contribution(&self, contribution: Contribution) -> Result<(), StoreError>;

    /// Updates an existing contribution by id
    async fn update_contribution(&self, contribution: Contribution) -> Result<(), StoreError>;

    /// Lists all contributions
    async fn list_contributions(&self) -> Result<Vec<Contribution>, StoreError>;

    /// Lists the contributions of one contract
    async fn contributions_for_contract(
        &self,
        contract_id: ContractId,
    ) -> Result<Vec<Contribution>, StoreError>;

    /// Inserts a new insured member
    async fn insert_insured(&self, insured: Insured) -> Result<(), StoreError>;

    /// Fetches an insured member by id
    async fn insured_by_id(&self, id: InsuredId) -> Result<Option<Insured>, StoreError>;

    /// Lists all insured members
    async fn list_insured(&self) -> Result<Vec<Insured>, StoreError>;

    /// Inserts a new beneficiary
    async fn insert_beneficiary(&self, beneficiary: Beneficiary) -> Result<(), StoreError>;

    /// Lists the beneficiaries of one insured member
    async fn beneficiaries_for_insured(
        &self,
        insured_id: InsuredId,
    ) -> Result<Vec<Beneficiary>, StoreError>;
}
