//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! mutual administration test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for test data construction
//! - `seed`: In-memory store seeding helpers
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod seed;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use seed::*;
pub use assertions::*;
pub use generators::*;
