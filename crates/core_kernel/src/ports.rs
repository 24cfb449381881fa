//! Store port infrastructure
//!
//! The administrative core treats its persistence substrate as an opaque
//! collaborator: a durable store reached through per-domain port traits, a
//! change-notification feed, and an identity accessor for audit attribution.
//! This module provides the shared pieces of that contract; each domain
//! defines its own port trait on top of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tokio::sync::broadcast;

use crate::identifiers::UserId;

/// Error type for store operations
///
/// Store failures are availability problems, not caller contract violations.
/// Public operations catch them at their boundary, log them, and surface a
/// failed result instead of crashing the caller's view.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// A write conflicted with existing data
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Connection to the underlying store failed
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// The store or its notification feed is unavailable
    #[error("Store unavailable: {message}")]
    Unavailable { message: String },
}

impl StoreError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        StoreError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        StoreError::Conflict {
            message: message.into(),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        StoreError::Connection {
            message: message.into(),
        }
    }

    /// Creates an Unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            StoreError::Connection { .. } | StoreError::Unavailable { .. }
        )
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Kinds of entities a subscriber can watch on the change feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Policy,
    Contract,
    Contribution,
    Insured,
    Beneficiary,
    Claim,
}

/// A "something changed" signal emitted by the store
///
/// The feed carries no usable delta payload: consumers are expected to
/// invalidate and refetch rather than patch incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Which table changed
    pub kind: EntityKind,
    /// When the store observed the change
    pub at: DateTime<Utc>,
}

impl ChangeEvent {
    pub fn now(kind: EntityKind) -> Self {
        Self {
            kind,
            at: Utc::now(),
        }
    }
}

/// A live subscription to the change feed, filtered to a set of entity kinds
///
/// Dropping the subscription releases the underlying channel. Dropping is
/// idempotent by construction, so rapid subscribe/unsubscribe cycles cannot
/// double-release anything.
pub struct ChangeSubscription {
    kinds: Vec<EntityKind>,
    receiver: broadcast::Receiver<ChangeEvent>,
}

impl ChangeSubscription {
    pub fn new(kinds: Vec<EntityKind>, receiver: broadcast::Receiver<ChangeEvent>) -> Self {
        Self { kinds, receiver }
    }

    /// Waits for the next change event matching one of the subscribed kinds
    ///
    /// Returns `None` once the feed is closed. A lagged receiver has missed
    /// an unknown number of events; since consumers refetch in full on every
    /// signal, the miss is reported as a single coalesced event.
    pub async fn changed(&mut self) -> Option<ChangeEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) if self.kinds.contains(&event.kind) => return Some(event),
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(_)) => {
                    let kind = *self.kinds.first()?;
                    return Some(ChangeEvent::now(kind));
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// The entity kinds this subscription watches
    pub fn kinds(&self) -> &[EntityKind] {
        &self.kinds
    }
}

/// Access to the store's change-notification feed
pub trait ChangeFeed: Send + Sync {
    /// Opens a subscription for the given entity kinds
    fn subscribe(&self, kinds: &[EntityKind]) -> ChangeSubscription;
}

/// The current caller's identity, used only for audit attribution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserContext {
    pub id: UserId,
    pub display_name: String,
}

impl UserContext {
    pub fn new(id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

/// Accessor for the identity of the caller performing an operation
pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> UserContext;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_not_found() {
        let error = StoreError::not_found("Claim", "REM-123");
        assert!(error.is_not_found());
        assert!(!error.is_transient());
        assert!(error.to_string().contains("Claim"));
        assert!(error.to_string().contains("REM-123"));
    }

    #[test]
    fn test_store_error_transient() {
        assert!(StoreError::connection("refused").is_transient());
        assert!(StoreError::unavailable("feed down").is_transient());
        assert!(!StoreError::conflict("duplicate").is_transient());
        assert!(!StoreError::not_found("Claim", "REM-123").is_transient());
        assert!(!StoreError::conflict("duplicate").is_not_found());
    }

    #[tokio::test]
    async fn test_subscription_filters_kinds() {
        let (tx, rx) = broadcast::channel(8);
        let mut sub = ChangeSubscription::new(vec![EntityKind::Claim], rx);

        tx.send(ChangeEvent::now(EntityKind::Contract)).unwrap();
        tx.send(ChangeEvent::now(EntityKind::Claim)).unwrap();

        let event = sub.changed().await.unwrap();
        assert_eq!(event.kind, EntityKind::Claim);
    }

    #[tokio::test]
    async fn test_subscription_ends_when_feed_closes() {
        let (tx, rx) = broadcast::channel(8);
        let mut sub = ChangeSubscription::new(vec![EntityKind::Insured], rx);
        drop(tx);

        assert!(sub.changed().await.is_none());
    }
}
