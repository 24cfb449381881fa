//! Store Infrastructure
//!
//! The production system talks to a durable relational store through the
//! domain port traits. This crate provides the in-memory adapter used by the
//! demo binary and the integration tests: concurrent maps per entity table
//! and a broadcast-based change-notification feed that re-emits a signal on
//! every write, exactly the shape the reactive views consume.

pub mod memory;

pub use memory::MemoryStore;
