//! Approval calculator
//!
//! Pure arithmetic over a claimed amount and an optional ceiling policy.
//! The calculator does not validate amount positivity; callers reject
//! non-positive claims before invoking it.

use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};

use crate::policy::CeilingPolicy;

/// Outcome of an approval computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Approval {
    /// Amount approved for reimbursement
    pub approved_amount: Money,
    /// Rate that was applied
    pub rate: Rate,
    /// Ceiling in force (zero when no policy applies)
    pub ceiling: Money,
    /// Whether the ceiling capped the covered amount
    pub ceiling_applied: bool,
}

/// Computes the approved amount for a claimed amount under an optional policy
///
/// Without an active policy the category is unconfigured and the claim is
/// reimbursed in full at 100%: safe-by-default for new care categories rather
/// than silent rejection.
///
/// With a policy, the covered amount is `claimed * rate`, rounded half-up to
/// the nearest whole currency unit, and capped at the policy ceiling.
///
/// Deterministic and side-effect free; safe to call concurrently.
pub fn compute_approval(policy: Option<&CeilingPolicy>, claimed: Money) -> Approval {
    let Some(policy) = policy else {
        return Approval {
            approved_amount: claimed,
            rate: Rate::full(),
            ceiling: Money::zero(claimed.currency()),
            ceiling_applied: false,
        };
    };

    let raw = policy.rate.apply(&claimed);
    let ceiling_applied = raw
        .partial_cmp(&policy.ceiling)
        .map_or(false, |ord| ord.is_gt());

    let approved_amount = if ceiling_applied {
        policy.ceiling
    } else {
        raw.round_half_up()
    };

    Approval {
        approved_amount,
        rate: policy.rate,
        ceiling: policy.ceiling,
        ceiling_applied,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use core_kernel::Currency;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    proptest! {
        #[test]
        fn approved_never_exceeds_ceiling_when_applied(
            claimed in 1i64..10_000_000i64,
            percent in 0u32..=100u32,
            ceiling in 0i64..10_000_000i64
        ) {
            let policy = CeilingPolicy::new(
                "analyse",
                Decimal::from(percent),
                Money::from_major(ceiling, Currency::XOF),
            ).unwrap();

            let approval = compute_approval(Some(&policy), Money::from_major(claimed, Currency::XOF));

            let raw = Decimal::from(claimed) * Decimal::from(percent) / Decimal::from(100);
            if raw > Decimal::from(ceiling) {
                prop_assert!(approval.ceiling_applied);
                prop_assert_eq!(approval.approved_amount.amount(), Decimal::from(ceiling));
            } else {
                prop_assert!(!approval.ceiling_applied);
                prop_assert!(approval.approved_amount.amount() <= raw + Decimal::new(5, 1));
            }
        }

        #[test]
        fn no_policy_is_identity_on_claimed(claimed in 1i64..10_000_000i64) {
            let money = Money::from_major(claimed, Currency::XOF);
            let approval = compute_approval(None, money);
            prop_assert_eq!(approval.approved_amount, money);
        }
    }
}
