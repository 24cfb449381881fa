//! Membership Domain
//!
//! This crate manages subscription contracts with their contribution records,
//! the insured members attached to a contract, and their beneficiary
//! dependents.
//!
//! Eligibility is the central derived attribute: a contract is "paid" iff at
//! least one of its contributions is marked paid, an insured is claim-eligible
//! iff its contract is paid, and a beneficiary inherits the eligibility of its
//! insured. The filter is fail-closed: no paid contract means no eligible
//! member, never "everyone".

pub mod contract;
pub mod insured;
pub mod eligibility;
pub mod ports;
pub mod service;
pub mod error;

pub use contract::{Contract, Contribution, PaymentStatus};
pub use insured::{Beneficiary, BeneficiaryRelation, Insured};
pub use eligibility::{
    eligible_insured_ids, filter_eligible_claimants, filter_eligible_insured, paid_contract_ids,
};
pub use ports::MembershipPort;
pub use service::MembershipService;
pub use error::MembershipError;
