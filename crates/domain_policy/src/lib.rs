//! Reimbursement Policy Domain
//!
//! This crate holds the per-care-category ceiling policies and the approval
//! calculator that applies them to claimed amounts.
//!
//! A ceiling policy caps reimbursement as a percentage of the claimed amount
//! with an absolute maximum. Categories without an active policy default to
//! full reimbursement, so newly introduced care categories are safe-by-default
//! rather than silently rejected.

pub mod policy;
pub mod approval;
pub mod ports;
pub mod service;
pub mod error;

pub use policy::CeilingPolicy;
pub use approval::{Approval, compute_approval};
pub use ports::PolicyPort;
pub use service::PolicyService;
pub use error::PolicyError;
