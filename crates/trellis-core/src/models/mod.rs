//! Data models for plans, milestones, and people.
//!
//! This module contains the domain models of the Trellis development-plan
//! system: the persisted records returned by the backend ([`Plan`],
//! [`Milestone`], [`Person`]), the client-only draft types mutated by the
//! authoring flow ([`PlanDraft`], [`MilestoneDraft`], [`MilestoneInput`]),
//! and the request payloads sent to the backend. Display implementations
//! for these models are located in [`crate::display::models`] to maintain
//! clean separation between data structures and presentation logic.
//!
//! # Draft versus persisted types
//!
//! Draft types never serialize and never leave the process: they exist only
//! while an authoring flow is open and are reset when it closes. Persisted
//! types mirror the backend's records and round-trip through serde.
//! [`CreatePlanPayload`] is the bridge: a validated draft is assembled into
//! one composite payload with its milestones embedded, so plan creation is
//! a single request.
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use trellis_core::models::{MilestoneDraft, MilestoneStatus, PlanDraft};
//!
//! let mut draft = PlanDraft::default();
//! draft.assignee_id = "42".to_string();
//! draft.title = "Leadership Growth".to_string();
//! draft.description = "Build leadership skills over two quarters".to_string();
//! draft.start_date = Some(date(2025, 1, 1));
//! draft.end_date = Some(date(2025, 7, 1));
//! assert!(draft.basic_info_complete());
//!
//! let milestone = MilestoneDraft::new(
//!     "Finish course",
//!     "Complete the management course",
//!     date(2025, 2, 1),
//! );
//! assert_eq!(milestone.status, MilestoneStatus::Pending);
//! draft.milestones.push(milestone);
//!
//! draft.reset();
//! assert!(draft.milestones.is_empty());
//! ```

pub mod draft;
pub mod filters;
pub mod milestone;
pub mod payloads;
pub mod person;
pub mod plan;
pub mod status;
pub mod summary;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level for backward compatibility
pub use draft::{MilestoneDraft, MilestoneInput, PlanDraft};
pub use filters::PlanFilter;
pub use milestone::Milestone;
pub use payloads::{CreatePlanPayload, MilestoneChange, MilestonePayload, MilestoneUpdate};
pub use person::Person;
pub use plan::Plan;
pub use status::{MilestoneStatus, PlanStatus, Role};
pub use summary::PlanSummary;
