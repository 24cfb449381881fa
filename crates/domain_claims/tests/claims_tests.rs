//! Tests for the claim lifecycle manager

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tokio::sync::Mutex;

use core_kernel::{
    ClaimId, Currency, IdentityProvider, InsuredId, Money, StoreError, UserContext, UserId,
};
use domain_claims::{
    Claim, ClaimError, ClaimPort, ClaimService, ClaimStatus, EligibilityPort, NewClaim,
    TransitionInput,
};

#[derive(Default)]
struct StubClaims {
    rows: Mutex<HashMap<ClaimId, Claim>>,
    fail_writes: AtomicBool,
}

#[async_trait]
impl ClaimPort for StubClaims {
    async fn insert(&self, claim: Claim) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::connection("store offline"));
        }
        self.rows.lock().await.insert(claim.id, claim);
        Ok(())
    }

    async fn update(&self, claim: Claim) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::connection("store offline"));
        }
        let mut rows = self.rows.lock().await;
        if !rows.contains_key(&claim.id) {
            return Err(StoreError::not_found("Claim", claim.id));
        }
        rows.insert(claim.id, claim);
        Ok(())
    }

    async fn by_id(&self, id: ClaimId) -> Result<Option<Claim>, StoreError> {
        Ok(self.rows.lock().await.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Claim>, StoreError> {
        Ok(self.rows.lock().await.values().cloned().collect())
    }
}

/// Eligibility oracle with a fixed eligible population
struct StubEligibility {
    eligible: Vec<InsuredId>,
}

#[async_trait]
impl EligibilityPort for StubEligibility {
    async fn is_eligible(&self, insured_id: InsuredId) -> Result<bool, StoreError> {
        Ok(self.eligible.contains(&insured_id))
    }
}

struct StubIdentity;

impl IdentityProvider for StubIdentity {
    fn current_user(&self) -> UserContext {
        UserContext::new(UserId::new(), "Gestionnaire Test")
    }
}

struct Fixture {
    service: ClaimService,
    store: Arc<StubClaims>,
    eligible_member: InsuredId,
    other_member: InsuredId,
}

fn fixture() -> Fixture {
    let store = Arc::new(StubClaims::default());
    let eligible_member = InsuredId::new_v7();
    let other_member = InsuredId::new_v7();
    let service = ClaimService::new(
        store.clone(),
        Arc::new(StubEligibility {
            eligible: vec![eligible_member],
        }),
        Arc::new(StubIdentity),
    );
    Fixture {
        service,
        store,
        eligible_member,
        other_member,
    }
}

fn xof(units: i64) -> Money {
    Money::from_major(units, Currency::XOF)
}

fn new_claim(insured_id: InsuredId, amount: Money) -> NewClaim {
    NewClaim {
        insured_id,
        care_category: "consultation".to_string(),
        claimed_amount: amount,
        medical_date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
        provider_id: None,
    }
}

#[tokio::test]
async fn test_create_claim_for_eligible_member() {
    let f = fixture();

    let claim = f
        .service
        .create_claim(new_claim(f.eligible_member, xof(5000)))
        .await
        .unwrap();

    assert_eq!(claim.status, ClaimStatus::Soumis);
    assert_eq!(claim.claimed_amount.amount(), dec!(5000));

    // Durable before return
    let stored = f.service.claim(claim.id).await.unwrap();
    assert_eq!(stored.claim_number, claim.claim_number);
}

#[tokio::test]
async fn test_create_claim_rejects_non_positive_amount() {
    let f = fixture();

    let zero = f
        .service
        .create_claim(new_claim(f.eligible_member, xof(0)))
        .await;
    assert!(matches!(zero, Err(ClaimError::InvalidInput(_))));

    let negative = f
        .service
        .create_claim(new_claim(f.eligible_member, xof(-100)))
        .await;
    assert!(matches!(negative, Err(ClaimError::InvalidInput(_))));
}

#[tokio::test]
async fn test_create_claim_rejects_ineligible_member() {
    let f = fixture();

    let result = f
        .service
        .create_claim(new_claim(f.other_member, xof(5000)))
        .await;
    assert!(matches!(result, Err(ClaimError::NotEligible(_))));
}

#[tokio::test]
async fn test_sequential_claim_numbers_are_distinct() {
    let f = fixture();
    let mut numbers = Vec::new();

    for _ in 0..50 {
        let claim = f
            .service
            .create_claim(new_claim(f.eligible_member, xof(1000)))
            .await
            .unwrap();
        numbers.push(claim.claim_number);
    }

    let mut deduped = numbers.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), numbers.len());
}

#[tokio::test]
async fn test_full_lifecycle_to_paye() {
    let f = fixture();
    let claim = f
        .service
        .create_claim(new_claim(f.eligible_member, xof(5000)))
        .await
        .unwrap();

    f.service
        .transition(claim.id, ClaimStatus::Verification, TransitionInput::default())
        .await
        .unwrap();

    let validated = f
        .service
        .transition(
            claim.id,
            ClaimStatus::Valide,
            TransitionInput {
                approved_amount: Some(xof(4000)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(validated.validated_at.is_some());

    // Overpayment is refused, then the exact approved amount goes through
    let over = f
        .service
        .transition(
            claim.id,
            ClaimStatus::Paye,
            TransitionInput {
                paid_amount: Some(xof(4500)),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(over, Err(ClaimError::InvalidAmount { .. })));

    let paid = f
        .service
        .transition(
            claim.id,
            ClaimStatus::Paye,
            TransitionInput {
                paid_amount: Some(xof(4000)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(paid.status, ClaimStatus::Paye);
    assert!(paid.paid_at.is_some());
    assert_eq!(paid.paid_amount.unwrap().amount(), dec!(4000));
}

#[tokio::test]
async fn test_transition_out_of_rejete_never_succeeds() {
    let f = fixture();
    let claim = f
        .service
        .create_claim(new_claim(f.eligible_member, xof(5000)))
        .await
        .unwrap();

    f.service
        .transition(claim.id, ClaimStatus::Rejete, TransitionInput::default())
        .await
        .unwrap();

    let result = f
        .service
        .transition(
            claim.id,
            ClaimStatus::Paye,
            TransitionInput {
                paid_amount: Some(xof(1000)),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(ClaimError::InvalidTransition { .. })));
}

#[tokio::test]
async fn test_expected_status_detects_concurrent_change() {
    let f = fixture();
    let claim = f
        .service
        .create_claim(new_claim(f.eligible_member, xof(5000)))
        .await
        .unwrap();

    // Another staff member rejects the claim first
    f.service
        .transition(claim.id, ClaimStatus::Rejete, TransitionInput::default())
        .await
        .unwrap();

    let stale = f
        .service
        .transition(
            claim.id,
            ClaimStatus::Verification,
            TransitionInput {
                expected_status: Some(ClaimStatus::Soumis),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        stale,
        Err(ClaimError::StatusConflict {
            expected: ClaimStatus::Soumis,
            actual: ClaimStatus::Rejete,
        })
    ));
}

#[tokio::test]
async fn test_unknown_claim_is_not_found() {
    let f = fixture();
    let result = f
        .service
        .transition(
            ClaimId::new_v7(),
            ClaimStatus::Verification,
            TransitionInput::default(),
        )
        .await;
    assert!(matches!(result, Err(ClaimError::ClaimNotFound(_))));
}

#[tokio::test]
async fn test_store_failure_surfaces_and_leaves_claim_unchanged() {
    let f = fixture();
    let claim = f
        .service
        .create_claim(new_claim(f.eligible_member, xof(5000)))
        .await
        .unwrap();

    f.store.fail_writes.store(true, Ordering::SeqCst);
    let result = f
        .service
        .transition(claim.id, ClaimStatus::Verification, TransitionInput::default())
        .await;
    assert!(matches!(result, Err(ClaimError::Store(_))));

    f.store.fail_writes.store(false, Ordering::SeqCst);
    let stored = f.service.claim(claim.id).await.unwrap();
    assert_eq!(stored.status, ClaimStatus::Soumis);
}
