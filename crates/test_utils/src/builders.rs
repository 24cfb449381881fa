//! Test Data Builders
//!
//! Builder patterns for constructing domain entities with sensible defaults.
//! Tests specify only the relevant fields and take defaults for the rest.

use chrono::NaiveDate;
use core_kernel::{ContractId, InsuredId, Money, ProviderId};
use domain_claims::{Claim, ClaimStatus, NewClaim, TransitionInput};
use domain_membership::{Contract, Contribution, Insured};
use domain_policy::CeilingPolicy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::{MoneyFixtures, StringFixtures, TemporalFixtures};

/// Builder for ceiling policies
pub struct CeilingPolicyBuilder {
    category: String,
    rate_percent: Decimal,
    ceiling: Money,
    active: bool,
    description: Option<String>,
}

impl Default for CeilingPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CeilingPolicyBuilder {
    pub fn new() -> Self {
        Self {
            category: StringFixtures::care_category().to_string(),
            rate_percent: dec!(80),
            ceiling: MoneyFixtures::xof_ceiling(),
            active: true,
            description: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_rate_percent(mut self, rate_percent: Decimal) -> Self {
        self.rate_percent = rate_percent;
        self
    }

    pub fn with_ceiling(mut self, ceiling: Money) -> Self {
        self.ceiling = ceiling;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn build(self) -> CeilingPolicy {
        let mut policy = CeilingPolicy::new(&self.category, self.rate_percent, self.ceiling)
            .expect("builder defaults must be valid");
        policy.description = self.description;
        if !self.active {
            policy.deactivate();
        }
        policy
    }
}

/// Builder for subscription contracts
pub struct ContractBuilder {
    reference: String,
    holder_name: String,
    start_date: NaiveDate,
}

impl Default for ContractBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractBuilder {
    pub fn new() -> Self {
        Self {
            reference: StringFixtures::contract_reference().to_string(),
            holder_name: "Cooperative des Enseignants".to_string(),
            start_date: TemporalFixtures::contract_start(),
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    pub fn with_holder_name(mut self, holder_name: impl Into<String>) -> Self {
        self.holder_name = holder_name.into();
        self
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn build(self) -> Contract {
        Contract::new(self.reference, self.holder_name, self.start_date)
    }
}

/// Builder for contributions
pub struct ContributionBuilder {
    contract_id: ContractId,
    period: NaiveDate,
    amount: Money,
    paid: bool,
}

impl ContributionBuilder {
    pub fn for_contract(contract_id: ContractId) -> Self {
        Self {
            contract_id,
            period: TemporalFixtures::contribution_period(),
            amount: MoneyFixtures::xof_contribution(),
            paid: false,
        }
    }

    pub fn with_period(mut self, period: NaiveDate) -> Self {
        self.period = period;
        self
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    pub fn paid(mut self) -> Self {
        self.paid = true;
        self
    }

    pub fn build(self) -> Contribution {
        let mut contribution = Contribution::new(self.contract_id, self.period, self.amount);
        if self.paid {
            contribution.mark_paid();
        }
        contribution
    }
}

/// Builder for insured members
pub struct InsuredBuilder {
    contract_id: ContractId,
    member_number: String,
    first_name: String,
    last_name: String,
    birth_date: NaiveDate,
}

impl InsuredBuilder {
    pub fn for_contract(contract_id: ContractId) -> Self {
        Self {
            contract_id,
            member_number: StringFixtures::member_number().to_string(),
            first_name: "Awa".to_string(),
            last_name: "Diop".to_string(),
            birth_date: TemporalFixtures::birth_date(),
        }
    }

    pub fn with_member_number(mut self, member_number: impl Into<String>) -> Self {
        self.member_number = member_number.into();
        self
    }

    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    pub fn build(self) -> Insured {
        Insured::new(
            self.contract_id,
            self.member_number,
            self.first_name,
            self.last_name,
            self.birth_date,
        )
    }
}

/// Builder for claims, including walking them to a target status
pub struct ClaimBuilder {
    insured_id: InsuredId,
    care_category: String,
    claimed_amount: Money,
    medical_date: NaiveDate,
    provider_id: Option<ProviderId>,
    status: ClaimStatus,
    approved_amount: Option<Money>,
    paid_amount: Option<Money>,
}

impl ClaimBuilder {
    pub fn for_insured(insured_id: InsuredId) -> Self {
        Self {
            insured_id,
            care_category: StringFixtures::care_category().to_string(),
            claimed_amount: MoneyFixtures::xof_claimed(),
            medical_date: TemporalFixtures::medical_date(),
            provider_id: None,
            status: ClaimStatus::Soumis,
            approved_amount: None,
            paid_amount: None,
        }
    }

    pub fn with_category(mut self, care_category: impl Into<String>) -> Self {
        self.care_category = care_category.into();
        self
    }

    pub fn with_claimed_amount(mut self, claimed_amount: Money) -> Self {
        self.claimed_amount = claimed_amount;
        self
    }

    pub fn with_provider(mut self, provider_id: ProviderId) -> Self {
        self.provider_id = Some(provider_id);
        self
    }

    /// Target status; the builder walks the claim through the intermediate
    /// transitions with the given amounts.
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_approved_amount(mut self, approved_amount: Money) -> Self {
        self.approved_amount = Some(approved_amount);
        self
    }

    pub fn with_paid_amount(mut self, paid_amount: Money) -> Self {
        self.paid_amount = Some(paid_amount);
        self
    }

    pub fn build(self) -> Claim {
        let mut claim = Claim::submit(NewClaim {
            insured_id: self.insured_id,
            care_category: self.care_category,
            claimed_amount: self.claimed_amount,
            medical_date: self.medical_date,
            provider_id: self.provider_id,
        });

        let approved = self.approved_amount.unwrap_or(self.claimed_amount);
        let paid = self.paid_amount.unwrap_or(approved);

        let steps: &[ClaimStatus] = match self.status {
            ClaimStatus::Soumis => &[],
            ClaimStatus::Verification => &[ClaimStatus::Verification],
            ClaimStatus::Valide => &[ClaimStatus::Verification, ClaimStatus::Valide],
            ClaimStatus::Paye => &[
                ClaimStatus::Verification,
                ClaimStatus::Valide,
                ClaimStatus::Paye,
            ],
            ClaimStatus::Rejete => &[ClaimStatus::Rejete],
        };

        for step in steps {
            let input = TransitionInput {
                approved_amount: (*step == ClaimStatus::Valide).then_some(approved),
                paid_amount: (*step == ClaimStatus::Paye).then_some(paid),
                expected_status: None,
            };
            claim
                .apply_transition(*step, &input)
                .expect("builder transition path must be valid");
        }
        claim
    }
}
