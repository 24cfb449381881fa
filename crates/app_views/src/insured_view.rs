//! Store-synchronized insured member list

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use core_kernel::{ChangeFeed, ContractId, EntityKind, StoreError};
use domain_membership::{paid_contract_ids, Insured, MembershipPort};

use crate::view::{View, ViewQuery};

/// Filter parameters for the insured list
#[derive(Debug, Clone, Default)]
pub struct InsuredFilters {
    /// Keep only members of this contract
    pub contract_id: Option<ContractId>,
    /// Case-insensitive substring match on member number or name
    pub search: Option<String>,
    /// Keep only currently eligible members
    pub eligible_only: bool,
}

/// One row of the insured list
#[derive(Debug, Clone, Serialize)]
pub struct InsuredRow {
    pub insured: Insured,
    pub eligible: bool,
    pub contract_reference: String,
}

/// Aggregates over the filtered members
#[derive(Debug, Clone, Default, Serialize)]
pub struct InsuredStats {
    pub total: usize,
    pub eligible_count: usize,
}

/// Assembled output of one insured-list pass
#[derive(Debug, Clone, Default)]
pub struct InsuredListData {
    pub rows: Vec<InsuredRow>,
    pub stats: InsuredStats,
}

/// Query joining members with their contracts and payment state
pub struct InsuredListQuery {
    membership: Arc<dyn MembershipPort>,
    filters: InsuredFilters,
}

#[async_trait]
impl ViewQuery for InsuredListQuery {
    type Output = InsuredListData;

    async fn fetch(&self) -> Result<InsuredListData, StoreError> {
        let insured = self.membership.list_insured().await?;
        let contracts = self.membership.list_contracts().await?;
        let contributions = self.membership.list_contributions().await?;

        let paid = paid_contract_ids(&contributions);
        let references: HashMap<ContractId, String> = contracts
            .into_iter()
            .map(|c| (c.id, c.reference))
            .collect();

        let mut rows: Vec<InsuredRow> = insured
            .into_iter()
            .map(|insured| {
                let eligible = paid.contains(&insured.contract_id);
                let contract_reference = references
                    .get(&insured.contract_id)
                    .cloned()
                    .unwrap_or_default();
                InsuredRow {
                    insured,
                    eligible,
                    contract_reference,
                }
            })
            .filter(|row| self.retain(row))
            .collect();

        rows.sort_by(|a, b| {
            (&a.insured.last_name, &a.insured.first_name)
                .cmp(&(&b.insured.last_name, &b.insured.first_name))
        });

        let stats = InsuredStats {
            total: rows.len(),
            eligible_count: rows.iter().filter(|r| r.eligible).count(),
        };
        Ok(InsuredListData { rows, stats })
    }

    fn watched_kinds(&self) -> Vec<EntityKind> {
        vec![
            EntityKind::Insured,
            EntityKind::Contract,
            EntityKind::Contribution,
        ]
    }
}

impl InsuredListQuery {
    fn retain(&self, row: &InsuredRow) -> bool {
        if self.filters.eligible_only && !row.eligible {
            return false;
        }
        if let Some(contract_id) = self.filters.contract_id {
            if row.insured.contract_id != contract_id {
                return false;
            }
        }
        if let Some(search) = &self.filters.search {
            let needle = search.to_lowercase();
            let number = row.insured.member_number.to_lowercase();
            let name = row.insured.full_name().to_lowercase();
            if !number.contains(&needle) && !name.contains(&needle) {
                return false;
            }
        }
        true
    }
}

/// The insured list as the UI consumes it
pub type InsuredListView = View<InsuredListQuery>;

impl InsuredListView {
    /// Opens an insured list view with its own subscription
    pub fn open_insured(
        membership: Arc<dyn MembershipPort>,
        feed: &dyn ChangeFeed,
        filters: InsuredFilters,
    ) -> Self {
        View::open(InsuredListQuery { membership, filters }, feed)
    }
}
