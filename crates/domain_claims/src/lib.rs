//! Reimbursement Claims Domain
//!
//! This crate implements the claim lifecycle from submission through
//! verification, validation, and payment.
//!
//! # Claim Lifecycle
//!
//! ```text
//! soumis -> verification -> valide -> paye
//!                 \______________________ rejete (from any non-terminal state)
//! ```
//!
//! Ordering between the non-terminal states is deliberately loose: the only
//! hard rule is that terminal states (`paye`, `rejete`) are never left, and
//! that validation and payment carry their amount preconditions.

pub mod claim;
pub mod ports;
pub mod service;
pub mod error;

pub use claim::{Claim, ClaimStatus, NewClaim, TransitionInput};
pub use ports::{ClaimPort, EligibilityPort};
pub use service::ClaimService;
pub use error::ClaimError;
