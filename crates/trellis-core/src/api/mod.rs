//! Backend API client for the trellis system.
//!
//! All persistence lives server-side behind a REST API; this module is the
//! client boundary. [`ApiClient`] names the operations the rest of the
//! crate consumes, [`HttpApiClient`] is the reqwest-backed implementation,
//! and [`MockApiClient`] is a scripted in-memory implementation used by the
//! test suites.
//!
//! The trait is object-safe on purpose: the authoring flow and the editor
//! hold an `Arc<dyn ApiClient>` so hosts and tests choose the
//! implementation.

use async_trait::async_trait;

use crate::models::{
    CreatePlanPayload, Milestone, MilestoneUpdate, Person, Plan, PlanFilter,
};
use crate::Result;

pub mod http;
pub mod mock;

pub use http::HttpApiClient;
pub use mock::MockApiClient;

/// The backend operations the trellis core consumes.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Resolve the acting user from the configured bearer identity.
    ///
    /// The server derives the person from the token; the client never
    /// inspects the token itself.
    async fn resolve_current_user(&self) -> Result<Person>;

    /// List the people eligible to receive a plan from the given manager:
    /// contributor-role members of the manager's department.
    async fn list_eligible_assignees(&self, manager_id: &str) -> Result<Vec<Person>>;

    /// Create a plan together with its embedded milestones in one request.
    async fn create_plan(&self, payload: &CreatePlanPayload) -> Result<Plan>;

    /// Apply a partial update to one milestone.
    async fn update_milestone(&self, id: &str, fields: &MilestoneUpdate) -> Result<Milestone>;

    /// Fetch one plan with its milestones.
    async fn fetch_plan(&self, id: &str) -> Result<Plan>;

    /// List plans matching the filter.
    async fn list_plans(&self, filter: &PlanFilter) -> Result<Vec<Plan>>;
}
