//! Claim eligibility filtering
//!
//! Pure set-containment filters over in-memory snapshots. The paid-contract
//! set is computed first; everything else is containment against it. An empty
//! paid set yields an empty eligible population, so "no paid contracts" can
//! never be confused with "no filter".

use std::collections::HashSet;

use core_kernel::{ContractId, InsuredId};

use crate::contract::Contribution;
use crate::insured::Insured;

/// Distinct ids of contracts having at least one paid contribution
pub fn paid_contract_ids(contributions: &[Contribution]) -> HashSet<ContractId> {
    contributions
        .iter()
        .filter(|c| c.is_paid())
        .map(|c| c.contract_id)
        .collect()
}

/// Retains insured members whose contract is in the paid set
pub fn filter_eligible_insured(insured: Vec<Insured>, paid: &HashSet<ContractId>) -> Vec<Insured> {
    insured
        .into_iter()
        .filter(|i| paid.contains(&i.contract_id))
        .collect()
}

/// Ids of the eligible members in a population
pub fn eligible_insured_ids(insured: &[Insured], paid: &HashSet<ContractId>) -> HashSet<InsuredId> {
    insured
        .iter()
        .filter(|i| paid.contains(&i.contract_id))
        .map(|i| i.id)
        .collect()
}

/// Retains items belonging to an eligible insured member
///
/// Generic over the claimant-bearing type so the claims domain can reuse the
/// same containment test without a dependency on this crate's entities.
pub fn filter_eligible_claimants<T>(
    items: Vec<T>,
    eligible: &HashSet<InsuredId>,
    insured_id: impl Fn(&T) -> InsuredId,
) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| eligible.contains(&insured_id(item)))
        .collect()
}
