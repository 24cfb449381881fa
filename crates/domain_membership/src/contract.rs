//! Contract and contribution records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ContractId, ContributionId, Money};

/// Payment status of a single contribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Contribution has been paid
    Paye,
    /// Payment expected but not received yet
    EnAttente,
    /// Payment overdue
    Impaye,
}

/// A subscription contract identifying a payer entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    /// Unique identifier
    pub id: ContractId,
    /// Human-readable contract reference
    pub reference: String,
    /// Name of the subscribing entity
    pub holder_name: String,
    /// Date the contract takes effect
    pub start_date: NaiveDate,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Contract {
    /// Creates a new contract
    pub fn new(
        reference: impl Into<String>,
        holder_name: impl Into<String>,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: ContractId::new_v7(),
            reference: reference.into(),
            holder_name: holder_name.into(),
            start_date,
            created_at: Utc::now(),
        }
    }
}

/// A periodic contribution owed under a contract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contribution {
    /// Unique identifier
    pub id: ContributionId,
    /// Contract this contribution belongs to
    pub contract_id: ContractId,
    /// First day of the covered period
    pub period: NaiveDate,
    /// Amount owed
    pub amount: Money,
    /// Payment status
    pub payment_status: PaymentStatus,
    /// When the payment was received, if it was
    pub paid_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Contribution {
    /// Creates a pending contribution for a contract period
    pub fn new(contract_id: ContractId, period: NaiveDate, amount: Money) -> Self {
        Self {
            id: ContributionId::new_v7(),
            contract_id,
            period,
            amount,
            payment_status: PaymentStatus::EnAttente,
            paid_at: None,
            created_at: Utc::now(),
        }
    }

    /// Marks the contribution as paid
    pub fn mark_paid(&mut self) {
        self.payment_status = PaymentStatus::Paye;
        self.paid_at = Some(Utc::now());
    }

    /// Returns true if the contribution has been paid
    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paye
    }
}
