//! Reactive View Layer
//!
//! Keeps UI-facing lists and aggregates synchronized with the durable store
//! without manual polling. Each view owns its own change-feed subscription
//! tied to its own lifetime, performs one full fetch on open, and treats
//! every matching change event as "invalidate and reload": a complete
//! refetch, re-filter, and re-aggregate. No incremental patching; the
//! simplicity is the point, and it stays correct under concurrent
//! multi-client writes.
//!
//! Failure behaviour: a failed refetch logs the store error and leaves the
//! previous view state intact, so transient outages never flash an empty
//! list at the staff.

pub mod view;
pub mod claims_view;
pub mod insured_view;
pub mod compose;
pub mod config;

pub use view::{View, ViewQuery, ViewState};
pub use claims_view::{ClaimFilters, ClaimListData, ClaimListView, ClaimRow, ClaimStats};
pub use insured_view::{InsuredFilters, InsuredListData, InsuredListView, InsuredRow, InsuredStats};
pub use compose::MembershipEligibility;
pub use config::AppConfig;
