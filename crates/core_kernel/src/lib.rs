//! Core Kernel - Foundational types and utilities for the mutual administration system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers
//! - Store port infrastructure: errors, change-notification feed, identity accessor

pub mod money;
pub mod identifiers;
pub mod ports;

pub use money::{Money, Currency, MoneyError, Rate};
pub use identifiers::{
    ContractId, ContributionId, InsuredId, BeneficiaryId,
    ClaimId, PolicyId, ProviderId, UserId,
};
pub use ports::{
    StoreError, EntityKind, ChangeEvent, ChangeFeed, ChangeSubscription,
    IdentityProvider, UserContext,
};
