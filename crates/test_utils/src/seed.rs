//! In-memory store seeding helpers
//!
//! Shorthand for the membership scaffolding most integration tests need
//! before they can submit a claim.

use core_kernel::Money;
use domain_membership::{Contract, Contribution, Insured, MembershipPort};
use infra_store::MemoryStore;

use crate::builders::{ContractBuilder, ContributionBuilder, InsuredBuilder};

/// A seeded contract with one contribution and one insured member
pub struct SeededMember {
    pub contract: Contract,
    pub contribution: Contribution,
    pub insured: Insured,
}

/// Seeds a contract with a paid contribution and one claim-eligible member
pub async fn seed_paid_member(store: &MemoryStore) -> SeededMember {
    seed_member(store, true, "CTR-PAID", "ADH-PAID").await
}

/// Seeds a contract whose contribution is still pending, so its member is
/// not claim-eligible
pub async fn seed_unpaid_member(store: &MemoryStore) -> SeededMember {
    seed_member(store, false, "CTR-UNPAID", "ADH-UNPAID").await
}

async fn seed_member(
    store: &MemoryStore,
    paid: bool,
    reference: &str,
    member_number: &str,
) -> SeededMember {
    let contract = ContractBuilder::new().with_reference(reference).build();

    let mut contribution = ContributionBuilder::for_contract(contract.id);
    if paid {
        contribution = contribution.paid();
    }
    let contribution = contribution.build();

    let insured = InsuredBuilder::for_contract(contract.id)
        .with_member_number(member_number)
        .build();

    store
        .insert_contract(contract.clone())
        .await
        .expect("in-memory insert");
    store
        .insert_contribution(contribution.clone())
        .await
        .expect("in-memory insert");
    store
        .insert_insured(insured.clone())
        .await
        .expect("in-memory insert");

    SeededMember {
        contract,
        contribution,
        insured,
    }
}

/// Seeds an additional paid contribution on an existing contract
pub async fn seed_paid_contribution(
    store: &MemoryStore,
    contract: &Contract,
    amount: Money,
) -> Contribution {
    let contribution = ContributionBuilder::for_contract(contract.id)
        .with_amount(amount)
        .paid()
        .build();
    store
        .insert_contribution(contribution.clone())
        .await
        .expect("in-memory insert");
    contribution
}
