//! Ceiling policy aggregate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, PolicyId, Rate};

use crate::error::PolicyError;

/// A reimbursement ceiling policy for one care category
///
/// At most one active policy per category is meaningful; the service layer
/// rejects a second active policy for the same category at write time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CeilingPolicy {
    /// Unique identifier
    pub id: PolicyId,
    /// Care category this policy applies to (e.g. "consultation")
    pub category: String,
    /// Reimbursement rate applied to the claimed amount
    pub rate: Rate,
    /// Absolute maximum reimbursable amount
    pub ceiling: Money,
    /// Whether this policy is currently in force
    pub active: bool,
    /// Free-form description
    pub description: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl CeilingPolicy {
    /// Creates a new active ceiling policy
    ///
    /// # Errors
    ///
    /// Returns `InvalidRate` if the percentage is outside 0..=100 and
    /// `NegativeCeiling` if the ceiling amount is negative.
    pub fn new(
        category: impl Into<String>,
        rate_percent: Decimal,
        ceiling: Money,
    ) -> Result<Self, PolicyError> {
        if rate_percent < dec!(0) || rate_percent > dec!(100) {
            return Err(PolicyError::InvalidRate(rate_percent));
        }
        if ceiling.is_negative() {
            return Err(PolicyError::NegativeCeiling(ceiling));
        }

        let now = Utc::now();
        Ok(Self {
            id: PolicyId::new_v7(),
            category: category.into(),
            rate: Rate::from_percentage(rate_percent),
            ceiling,
            active: true,
            description: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Takes this policy out of force
    pub fn deactivate(&mut self) {
        self.active = false;
        self.updated_at = Utc::now();
    }

    /// Puts this policy back in force
    pub fn activate(&mut self) {
        self.active = true;
        self.updated_at = Utc::now();
    }
}
