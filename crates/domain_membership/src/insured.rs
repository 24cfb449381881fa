//! Insured members and their beneficiary dependents

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{BeneficiaryId, ContractId, InsuredId};

/// An insured member attached to exactly one contract
///
/// Eligibility is not stored here: it is derived from the contract's payment
/// state at read time (see the eligibility module).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insured {
    /// Unique identifier
    pub id: InsuredId,
    /// Owning contract
    pub contract_id: ContractId,
    /// Membership number shown on the card
    pub member_number: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Insured {
    /// Creates a new insured member under a contract
    pub fn new(
        contract_id: ContractId,
        member_number: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            id: InsuredId::new_v7(),
            contract_id,
            member_number: member_number.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
            created_at: Utc::now(),
        }
    }

    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Relationship of a beneficiary to the insured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeneficiaryRelation {
    Conjoint,
    Enfant,
    Autre,
}

/// A dependent covered through an insured member
///
/// A beneficiary's eligibility mirrors its insured's eligibility and is never
/// stored independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beneficiary {
    /// Unique identifier
    pub id: BeneficiaryId,
    /// Insured member this dependent is attached to
    pub insured_id: InsuredId,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Relationship to the insured
    pub relation: BeneficiaryRelation,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Beneficiary {
    /// Creates a new beneficiary under an insured member
    pub fn new(
        insured_id: InsuredId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        relation: BeneficiaryRelation,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            id: BeneficiaryId::new_v7(),
            insured_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            relation,
            birth_date,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insured_full_name() {
        let insured = Insured::new(
            ContractId::new_v7(),
            "ADH-0042",
            "Awa",
            "Diop",
            NaiveDate::from_ymd_opt(1988, 6, 12).unwrap(),
        );

        assert_eq!(insured.full_name(), "Awa Diop");
    }

    #[test]
    fn test_beneficiary_attached_to_insured() {
        let insured_id = InsuredId::new_v7();
        let beneficiary = Beneficiary::new(
            insured_id,
            "Moussa",
            "Diop",
            BeneficiaryRelation::Enfant,
            NaiveDate::from_ymd_opt(2015, 3, 2).unwrap(),
        );

        assert_eq!(beneficiary.insured_id, insured_id);
        assert_eq!(beneficiary.relation, BeneficiaryRelation::Enfant);
    }
}
