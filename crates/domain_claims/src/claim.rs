//! Claim aggregate

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{ClaimId, InsuredId, Money, ProviderId};

use crate::error::ClaimError;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    /// Submitted by staff, awaiting processing
    Soumis,
    /// Under verification
    Verification,
    /// Validated with an approved amount
    Valide,
    /// Paid out (terminal)
    Paye,
    /// Rejected (terminal)
    Rejete,
}

impl ClaimStatus {
    /// Terminal states are never left
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimStatus::Paye | ClaimStatus::Rejete)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ClaimStatus::Soumis => "soumis",
            ClaimStatus::Verification => "verification",
            ClaimStatus::Valide => "valide",
            ClaimStatus::Paye => "paye",
            ClaimStatus::Rejete => "rejete",
        };
        write!(f, "{label}")
    }
}

/// Data for submitting a new claim
#[derive(Debug, Clone)]
pub struct NewClaim {
    pub insured_id: InsuredId,
    pub care_category: String,
    pub claimed_amount: Money,
    pub medical_date: NaiveDate,
    pub provider_id: Option<ProviderId>,
}

/// Extra fields accompanying a status transition
#[derive(Debug, Clone, Default)]
pub struct TransitionInput {
    /// Approved amount, required when transitioning to `valide`.
    /// Supplied by the caller: the ceiling-policy computation is the usual
    /// source, but a reviewer may legitimately override it.
    pub approved_amount: Option<Money>,
    /// Paid amount, required when transitioning to `paye`
    pub paid_amount: Option<Money>,
    /// Optimistic concurrency check: the transition is applied only if the
    /// claim is still in this status when the write happens
    pub expected_status: Option<ClaimStatus>,
}

/// A reimbursement claim submitted for an insured member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Generated claim number, globally unique
    pub claim_number: String,
    /// Insured member the claim belongs to
    pub insured_id: InsuredId,
    /// Care provider, if known
    pub provider_id: Option<ProviderId>,
    /// Care category (e.g. "consultation")
    pub care_category: String,
    /// Amount claimed
    pub claimed_amount: Money,
    /// Approved amount, set when the claim is validated
    pub approved_amount: Option<Money>,
    /// Paid amount, set when the claim is paid
    pub paid_amount: Option<Money>,
    /// Status
    pub status: ClaimStatus,
    /// Date the care was received
    pub medical_date: NaiveDate,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// When the claim was validated
    pub validated_at: Option<DateTime<Utc>>,
    /// When the claim was paid
    pub paid_at: Option<DateTime<Utc>>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Claim {
    /// Creates a newly submitted claim
    pub fn submit(new: NewClaim) -> Self {
        let now = Utc::now();
        let id = ClaimId::new_v7();

        Self {
            id,
            claim_number: generate_claim_number(&id, now),
            insured_id: new.insured_id,
            provider_id: new.provider_id,
            care_category: new.care_category,
            claimed_amount: new.claimed_amount,
            approved_amount: None,
            paid_amount: None,
            status: ClaimStatus::Soumis,
            medical_date: new.medical_date,
            created_at: now,
            validated_at: None,
            paid_at: None,
            updated_at: now,
        }
    }

    /// Applies a status transition with its per-target preconditions
    ///
    /// The lifecycle is deliberately loose between non-terminal states, so a
    /// claim may move back from `valide` to `verification`. The hard rules:
    /// `soumis` is never a transition target, terminal states are never left,
    /// `valide` requires an approved amount, and `paye` requires a paid
    /// amount not exceeding the approved amount.
    pub fn apply_transition(
        &mut self,
        target: ClaimStatus,
        input: &TransitionInput,
    ) -> Result<(), ClaimError> {
        if self.status.is_terminal() || target == ClaimStatus::Soumis {
            return Err(ClaimError::InvalidTransition {
                from: self.status,
                to: target,
            });
        }

        let now = Utc::now();
        match target {
            ClaimStatus::Valide => {
                let approved = input.approved_amount.ok_or(ClaimError::MissingApproval)?;
                self.approved_amount = Some(approved);
                self.validated_at = Some(now);
            }
            ClaimStatus::Paye => {
                let approved = self.approved_amount.ok_or(ClaimError::MissingApproval)?;
                let paid = match input.paid_amount {
                    Some(paid) if paid <= approved => paid,
                    other => {
                        return Err(ClaimError::InvalidAmount {
                            paid: other,
                            approved,
                        })
                    }
                };
                self.paid_amount = Some(paid);
                self.paid_at = Some(now);
            }
            ClaimStatus::Verification | ClaimStatus::Rejete => {}
            ClaimStatus::Soumis => unreachable!("rejected above"),
        }

        self.status = target;
        self.updated_at = now;
        Ok(())
    }
}

fn generate_claim_number(id: &ClaimId, created_at: DateTime<Utc>) -> String {
    // The v7 claim id is unique and time-ordered; deriving the number from it
    // keeps claim numbers unique without a sequence in the store.
    format!(
        "REM-{}-{}",
        created_at.format("%Y"),
        id.as_uuid().simple()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn new_claim() -> Claim {
        Claim::submit(NewClaim {
            insured_id: InsuredId::new_v7(),
            care_category: "consultation".to_string(),
            claimed_amount: Money::from_major(5000, Currency::XOF),
            medical_date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            provider_id: None,
        })
    }

    fn xof(units: i64) -> Money {
        Money::from_major(units, Currency::XOF)
    }

    #[test]
    fn test_submitted_claim_defaults() {
        let claim = new_claim();

        assert_eq!(claim.status, ClaimStatus::Soumis);
        assert!(claim.claim_number.starts_with("REM-"));
        assert!(claim.approved_amount.is_none());
        assert!(claim.paid_amount.is_none());
        assert!(claim.validated_at.is_none());
        assert!(claim.paid_at.is_none());
    }

    #[test]
    fn test_validation_requires_approved_amount() {
        let mut claim = new_claim();

        let missing = claim.apply_transition(ClaimStatus::Valide, &TransitionInput::default());
        assert!(matches!(missing, Err(ClaimError::MissingApproval)));

        let input = TransitionInput {
            approved_amount: Some(xof(4000)),
            ..Default::default()
        };
        claim.apply_transition(ClaimStatus::Valide, &input).unwrap();

        assert_eq!(claim.status, ClaimStatus::Valide);
        assert_eq!(claim.approved_amount, Some(xof(4000)));
        assert!(claim.validated_at.is_some());
    }

    #[test]
    fn test_payment_cannot_exceed_approved() {
        let mut claim = new_claim();
        claim
            .apply_transition(
                ClaimStatus::Valide,
                &TransitionInput {
                    approved_amount: Some(xof(4000)),
                    ..Default::default()
                },
            )
            .unwrap();

        let over = claim.apply_transition(
            ClaimStatus::Paye,
            &TransitionInput {
                paid_amount: Some(xof(4500)),
                ..Default::default()
            },
        );
        assert!(matches!(over, Err(ClaimError::InvalidAmount { .. })));
        assert_eq!(claim.status, ClaimStatus::Valide);

        claim
            .apply_transition(
                ClaimStatus::Paye,
                &TransitionInput {
                    paid_amount: Some(xof(4000)),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(claim.status, ClaimStatus::Paye);
        assert_eq!(claim.paid_amount.unwrap().amount(), dec!(4000));
        assert!(claim.paid_at.is_some());
    }

    #[test]
    fn test_payment_requires_paid_amount() {
        let mut claim = new_claim();
        claim
            .apply_transition(
                ClaimStatus::Valide,
                &TransitionInput {
                    approved_amount: Some(xof(4000)),
                    ..Default::default()
                },
            )
            .unwrap();

        let missing = claim.apply_transition(ClaimStatus::Paye, &TransitionInput::default());
        assert!(matches!(
            missing,
            Err(ClaimError::InvalidAmount { paid: None, .. })
        ));
    }

    #[test]
    fn test_payment_without_validation_fails() {
        let mut claim = new_claim();

        let result = claim.apply_transition(
            ClaimStatus::Paye,
            &TransitionInput {
                paid_amount: Some(xof(1000)),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(ClaimError::MissingApproval)));
    }

    #[test]
    fn test_terminal_states_are_never_left() {
        let mut claim = new_claim();
        claim
            .apply_transition(ClaimStatus::Rejete, &TransitionInput::default())
            .unwrap();

        for target in [
            ClaimStatus::Verification,
            ClaimStatus::Valide,
            ClaimStatus::Paye,
            ClaimStatus::Rejete,
        ] {
            let result = claim.apply_transition(target, &TransitionInput::default());
            assert!(matches!(result, Err(ClaimError::InvalidTransition { .. })));
        }
        assert_eq!(claim.status, ClaimStatus::Rejete);
    }

    #[test]
    fn test_soumis_is_not_a_transition_target() {
        let mut claim = new_claim();
        claim
            .apply_transition(ClaimStatus::Verification, &TransitionInput::default())
            .unwrap();

        let back = claim.apply_transition(ClaimStatus::Soumis, &TransitionInput::default());
        assert!(matches!(back, Err(ClaimError::InvalidTransition { .. })));
    }

    #[test]
    fn test_backward_move_from_valide_is_accepted() {
        let mut claim = new_claim();
        claim
            .apply_transition(
                ClaimStatus::Valide,
                &TransitionInput {
                    approved_amount: Some(xof(4000)),
                    ..Default::default()
                },
            )
            .unwrap();

        claim
            .apply_transition(ClaimStatus::Verification, &TransitionInput::default())
            .unwrap();
        assert_eq!(claim.status, ClaimStatus::Verification);
    }

    #[test]
    fn test_rejete_reachable_from_any_non_terminal_state() {
        for prepare in [None, Some(ClaimStatus::Verification), Some(ClaimStatus::Valide)] {
            let mut claim = new_claim();
            if let Some(status) = prepare {
                let input = TransitionInput {
                    approved_amount: Some(xof(4000)),
                    ..Default::default()
                };
                claim.apply_transition(status, &input).unwrap();
            }

            claim
                .apply_transition(ClaimStatus::Rejete, &TransitionInput::default())
                .unwrap();
            assert_eq!(claim.status, ClaimStatus::Rejete);
        }
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&ClaimStatus::Verification).unwrap(),
            "\"verification\""
        );
        assert_eq!(serde_json::to_string(&ClaimStatus::Paye).unwrap(), "\"paye\"");
    }

    #[test]
    fn test_claim_numbers_are_pairwise_distinct() {
        let numbers: Vec<String> = (0..200).map(|_| new_claim().claim_number).collect();

        for (i, a) in numbers.iter().enumerate() {
            for b in &numbers[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
