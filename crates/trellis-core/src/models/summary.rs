//! Plan summary types and functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{MilestoneStatus, Plan, PlanStatus};

/// Summary information about a plan with milestone statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Plan ID
    pub id: String,
    /// Title of the plan
    pub title: String,
    /// Identifier of the person the plan is for
    pub assignee_id: String,
    /// Plan status
    pub status: PlanStatus,
    /// First day of the plan period
    pub start_date: Date,
    /// Last day of the plan period
    pub end_date: Date,
    /// Total number of milestones
    pub total_milestones: u32,
    /// Number of completed milestones
    pub completed_milestones: u32,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        let total_milestones = plan.milestones.len() as u32;
        let completed_milestones = plan
            .milestones
            .iter()
            .filter(|m| m.status == MilestoneStatus::Completed)
            .count() as u32;

        Self {
            id: plan.id.clone(),
            title: plan.title.clone(),
            assignee_id: plan.assignee_id.clone(),
            status: plan.status,
            start_date: plan.start_date,
            end_date: plan.end_date,
            total_milestones,
            completed_milestones,
        }
    }
}
