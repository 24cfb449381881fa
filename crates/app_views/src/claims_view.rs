//! Store-synchronized claims list

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::{ChangeFeed, EntityKind, InsuredId, StoreError};
use domain_claims::{Claim, ClaimPort, ClaimStatus};
use domain_membership::{
    eligible_insured_ids, filter_eligible_claimants, paid_contract_ids, MembershipPort,
};

use crate::view::{View, ViewQuery};

/// Filter parameters for the claims list
#[derive(Debug, Clone, Default)]
pub struct ClaimFilters {
    /// Keep only claims in this status
    pub status: Option<ClaimStatus>,
    /// Keep only claims in this care category
    pub category: Option<String>,
    /// Keep only claims of one insured member
    pub insured_id: Option<InsuredId>,
    /// Case-insensitive substring match on claim number or member name
    pub search: Option<String>,
    /// Keep only claims whose insured is currently eligible
    pub eligible_only: bool,
}

/// One row of the claims list
#[derive(Debug, Clone, Serialize)]
pub struct ClaimRow {
    pub claim: Claim,
    pub insured_name: String,
    pub insured_eligible: bool,
}

/// Aggregates over the filtered claims
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClaimStats {
    pub total: usize,
    pub by_status: BTreeMap<String, usize>,
    pub by_category: BTreeMap<String, usize>,
    pub total_claimed: Decimal,
    pub total_approved: Decimal,
}

/// Assembled output of one claims-list pass
#[derive(Debug, Clone, Default)]
pub struct ClaimListData {
    pub rows: Vec<ClaimRow>,
    pub stats: ClaimStats,
}

/// Query joining claims with membership data for eligibility annotation
pub struct ClaimListQuery {
    claims: Arc<dyn ClaimPort>,
    membership: Arc<dyn MembershipPort>,
    filters: ClaimFilters,
}

#[async_trait]
impl ViewQuery for ClaimListQuery {
    type Output = ClaimListData;

    async fn fetch(&self) -> Result<ClaimListData, StoreError> {
        let mut claims = self.claims.list().await?;
        let insured = self.membership.list_insured().await?;
        let contributions = self.membership.list_contributions().await?;

        let paid = paid_contract_ids(&contributions);
        let eligible = eligible_insured_ids(&insured, &paid);
        if self.filters.eligible_only {
            claims = filter_eligible_claimants(claims, &eligible, |c| c.insured_id);
        }
        let by_id: HashMap<InsuredId, _> = insured.into_iter().map(|i| (i.id, i)).collect();

        let mut rows: Vec<ClaimRow> = claims
            .into_iter()
            .map(|claim| {
                let insured_name = by_id
                    .get(&claim.insured_id)
                    .map(|i| i.full_name())
                    .unwrap_or_else(|| "inconnu".to_string());
                let insured_eligible = eligible.contains(&claim.insured_id);
                ClaimRow {
                    claim,
                    insured_name,
                    insured_eligible,
                }
            })
            .filter(|row| self.retain(row))
            .collect();

        rows.sort_by(|a, b| b.claim.created_at.cmp(&a.claim.created_at));

        let stats = aggregate(&rows);
        Ok(ClaimListData { rows, stats })
    }

    fn watched_kinds(&self) -> Vec<EntityKind> {
        vec![
            EntityKind::Claim,
            EntityKind::Insured,
            EntityKind::Contribution,
        ]
    }
}

impl ClaimListQuery {
    fn retain(&self, row: &ClaimRow) -> bool {
        if let Some(status) = self.filters.status {
            if row.claim.status != status {
                return false;
            }
        }
        if let Some(category) = &self.filters.category {
            if &row.claim.care_category != category {
                return false;
            }
        }
        if let Some(insured_id) = self.filters.insured_id {
            if row.claim.insured_id != insured_id {
                return false;
            }
        }
        if let Some(search) = &self.filters.search {
            let needle = search.to_lowercase();
            let number = row.claim.claim_number.to_lowercase();
            let name = row.insured_name.to_lowercase();
            if !number.contains(&needle) && !name.contains(&needle) {
                return false;
            }
        }
        true
    }
}

fn aggregate(rows: &[ClaimRow]) -> ClaimStats {
    let mut stats = ClaimStats {
        total: rows.len(),
        ..Default::default()
    };

    for row in rows {
        *stats
            .by_status
            .entry(row.claim.status.to_string())
            .or_default() += 1;
        *stats
            .by_category
            .entry(row.claim.care_category.clone())
            .or_default() += 1;
        stats.total_claimed += row.claim.claimed_amount.amount();
        if let Some(approved) = row.claim.approved_amount {
            stats.total_approved += approved.amount();
        }
    }

    stats
}

/// The claims list as the UI consumes it
pub type ClaimListView = View<ClaimListQuery>;

impl ClaimListView {
    /// Opens a claims list view with its own subscription
    pub fn open_claims(
        claims: Arc<dyn ClaimPort>,
        membership: Arc<dyn MembershipPort>,
        feed: &dyn ChangeFeed,
        filters: ClaimFilters,
    ) -> Self {
        View::open(
            ClaimListQuery {
                claims,
                membership,
                filters,
            },
            feed,
        )
    }
}
