//! Plan model definition and related functionality.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Milestone, PlanStatus};

/// A persisted development plan as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: String,

    /// Title of the plan
    pub title: String,

    /// Detailed description of the plan
    pub description: String,

    /// First day of the plan period
    pub start_date: Date,

    /// Last day of the plan period
    pub end_date: Date,

    /// Identifier of the manager who authored the plan
    pub owner_id: String,

    /// Identifier of the person the plan is for
    pub assignee_id: String,

    /// Status of the plan (active or completed)
    #[serde(default)]
    pub status: PlanStatus,

    /// Milestones of the plan, in display order (may be omitted by
    /// list endpoints)
    #[serde(default)]
    pub milestones: Vec<Milestone>,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Plan {
    /// Look up a milestone of this plan by identifier.
    pub fn milestone(&self, id: &str) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id == id)
    }
}
