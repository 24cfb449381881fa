//! Mutuelle core demo binary
//!
//! Seeds an in-memory store, walks one claim through its full lifecycle, and
//! prints a live claims view after each step.
//!
//! ```bash
//! cargo run --bin mutuelle-demo
//! MUTUELLE_LOG_LEVEL=debug cargo run --bin mutuelle-demo
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use app_views::{AppConfig, ClaimFilters, ClaimListView, MembershipEligibility};
use core_kernel::{Currency, Money, UserContext, UserId};
use domain_claims::{ClaimService, ClaimStatus, NewClaim, TransitionInput};
use domain_membership::{Contract, Contribution, Insured, MembershipPort, MembershipService};
use domain_policy::PolicyService;
use infra_store::MemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::load();
    init_tracing(&config.log_level);

    let currency = parse_currency(&config.currency);
    let store = MemoryStore::new(UserContext::new(UserId::new(), &config.operator_name));

    let policies = PolicyService::new(store.clone());
    let membership = Arc::new(MembershipService::new(store.clone()));
    let claims = ClaimService::new(
        store.clone(),
        Arc::new(MembershipEligibility::new(membership.clone())),
        store.clone(),
    );

    // Ceiling policy: 80% of the claimed amount, capped at 10 000
    policies
        .create_policy(
            "consultation",
            dec!(80),
            Money::from_major(10_000, currency),
            Some("Consultations generalistes".to_string()),
        )
        .await
        .context("seeding ceiling policy")?;

    // One contract with a paid contribution and one insured member
    let contract = Contract::new("CTR-2026-001", "Cooperative des Enseignants", date(2026, 1, 1));
    let contribution = Contribution::new(contract.id, date(2026, 1, 1), Money::from_major(2_500, currency));
    let insured = Insured::new(contract.id, "ADH-0001", "Awa", "Diop", date(1988, 5, 14));

    store.insert_contract(contract).await?;
    store.insert_contribution(contribution.clone()).await?;
    store.insert_insured(insured.clone()).await?;
    membership.record_payment(contribution.id).await?;

    // Live claims view, refreshed by store change events
    let view = ClaimListView::open_claims(
        store.clone(),
        store.clone(),
        store.as_ref(),
        ClaimFilters::default(),
    );

    // Submit and settle one claim
    let claimed = Money::from_major(5_000, currency);
    let claim = claims
        .create_claim(NewClaim {
            insured_id: insured.id,
            care_category: "consultation".to_string(),
            claimed_amount: claimed,
            medical_date: date(2026, 3, 10),
            provider_id: None,
        })
        .await?;
    print_view("after submission", &view).await;

    claims
        .transition(claim.id, ClaimStatus::Verification, TransitionInput::default())
        .await?;

    let approval = policies.approve_amount("consultation", claimed).await?;
    let claim = claims
        .transition(
            claim.id,
            ClaimStatus::Valide,
            TransitionInput {
                approved_amount: Some(approval.approved_amount),
                expected_status: Some(ClaimStatus::Verification),
                ..Default::default()
            },
        )
        .await?;
    print_view("after validation", &view).await;

    claims
        .transition(
            claim.id,
            ClaimStatus::Paye,
            TransitionInput {
                paid_amount: Some(approval.approved_amount),
                expected_status: Some(ClaimStatus::Valide),
                ..Default::default()
            },
        )
        .await?;
    print_view("after payment", &view).await;

    view.close();
    Ok(())
}

async fn print_view(label: &str, view: &ClaimListView) {
    // Give the background refetch a moment to land
    tokio::time::sleep(Duration::from_millis(50)).await;
    let state = view.snapshot().await;
    tracing::info!(
        step = label,
        rows = state.data.rows.len(),
        total_claimed = %state.data.stats.total_claimed,
        total_approved = %state.data.stats.total_approved,
        "claims view"
    );
    for row in &state.data.rows {
        tracing::info!(
            claim_number = %row.claim.claim_number,
            insured = %row.insured_name,
            status = %row.claim.status,
            eligible = row.insured_eligible,
            "  row"
        );
    }
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

fn parse_currency(code: &str) -> Currency {
    match code.to_ascii_uppercase().as_str() {
        "XAF" => Currency::XAF,
        "GNF" => Currency::GNF,
        "MAD" => Currency::MAD,
        "EUR" => Currency::EUR,
        "USD" => Currency::USD,
        _ => Currency::XOF,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
