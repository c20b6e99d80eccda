//! Milestone model definition and related functionality.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::MilestoneStatus;

/// A persisted milestone within a plan, as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Milestone {
    /// Unique identifier for the milestone
    pub id: String,

    /// ID of the parent plan
    pub plan_id: String,

    /// Brief title of the checkpoint
    pub title: String,

    /// Detailed description of the checkpoint
    pub description: String,

    /// Day the milestone is due; falls within the plan period
    pub due_date: Date,

    /// Current status of the milestone
    #[serde(default)]
    pub status: MilestoneStatus,

    /// Timestamp when the milestone was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the milestone was last updated (UTC)
    pub updated_at: Timestamp,
}
