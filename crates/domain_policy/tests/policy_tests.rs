//! Tests for the policy service and approval flow

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal_macros::dec;
use tokio::sync::Mutex;

use core_kernel::{Currency, Money, PolicyId, StoreError};
use domain_policy::{CeilingPolicy, PolicyError, PolicyPort, PolicyService};

/// Minimal in-memory port used to exercise the service without the store adapter
#[derive(Default)]
struct StubPolicies {
    rows: Mutex<Vec<CeilingPolicy>>,
}

#[async_trait]
impl PolicyPort for StubPolicies {
    async fn insert(&self, policy: CeilingPolicy) -> Result<(), StoreError> {
        self.rows.lock().await.push(policy);
        Ok(())
    }

    async fn update(&self, policy: CeilingPolicy) -> Result<(), StoreError> {
        let mut rows = self.rows.lock().await;
        match rows.iter_mut().find(|p| p.id == policy.id) {
            Some(row) => {
                *row = policy;
                Ok(())
            }
            None => Err(StoreError::not_found("CeilingPolicy", policy.id)),
        }
    }

    async fn by_id(&self, id: PolicyId) -> Result<Option<CeilingPolicy>, StoreError> {
        Ok(self.rows.lock().await.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<CeilingPolicy>, StoreError> {
        Ok(self.rows.lock().await.clone())
    }

    async fn active_by_category(
        &self,
        category: &str,
    ) -> Result<Option<CeilingPolicy>, StoreError> {
        Ok(self
            .rows
            .lock()
            .await
            .iter()
            .find(|p| p.category == category && p.active)
            .cloned())
    }
}

fn service() -> PolicyService {
    PolicyService::new(Arc::new(StubPolicies::default()))
}

fn xof(units: i64) -> Money {
    Money::from_major(units, Currency::XOF)
}

#[tokio::test]
async fn test_create_and_lookup_policy() {
    let service = service();

    let created = service
        .create_policy("consultation", dec!(80), xof(10000), None)
        .await
        .unwrap();

    let found = service.active_policy("consultation").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.rate.as_percentage(), dec!(80));
}

#[tokio::test]
async fn test_duplicate_active_policy_rejected_at_write_time() {
    let service = service();

    service
        .create_policy("consultation", dec!(80), xof(10000), None)
        .await
        .unwrap();

    let second = service
        .create_policy("consultation", dec!(60), xof(5000), None)
        .await;

    assert!(matches!(
        second,
        Err(PolicyError::DuplicateActivePolicy { category }) if category == "consultation"
    ));
}

#[tokio::test]
async fn test_deactivated_category_accepts_new_policy() {
    let service = service();

    let first = service
        .create_policy("dentaire", dec!(70), xof(30000), None)
        .await
        .unwrap();
    service.deactivate_policy(first.id).await.unwrap();

    // With the old policy out of force, a replacement is allowed
    let second = service
        .create_policy("dentaire", dec!(65), xof(25000), None)
        .await
        .unwrap();

    let active = service.active_policy("dentaire").await.unwrap().unwrap();
    assert_eq!(active.id, second.id);
}

#[tokio::test]
async fn test_unknown_category_has_no_policy() {
    let service = service();
    assert!(service.active_policy("inconnu").await.unwrap().is_none());
}

#[tokio::test]
async fn test_approve_amount_uses_active_policy() {
    let service = service();
    service
        .create_policy("consultation", dec!(80), xof(10000), None)
        .await
        .unwrap();

    let under = service
        .approve_amount("consultation", xof(5000))
        .await
        .unwrap();
    assert_eq!(under.approved_amount.amount(), dec!(4000));
    assert!(!under.ceiling_applied);

    let over = service
        .approve_amount("consultation", xof(20000))
        .await
        .unwrap();
    assert_eq!(over.approved_amount.amount(), dec!(10000));
    assert!(over.ceiling_applied);
}

#[tokio::test]
async fn test_approve_amount_without_policy_defaults_to_full() {
    let service = service();

    let approval = service.approve_amount("inconnu", xof(7500)).await.unwrap();
    assert_eq!(approval.approved_amount.amount(), dec!(7500));
    assert_eq!(approval.rate.as_percentage(), dec!(100));
}
