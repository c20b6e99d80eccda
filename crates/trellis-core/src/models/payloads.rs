//! Request payloads sent to the backend.

use jiff::civil::Date;
use serde::Serialize;

use super::{MilestoneStatus, PlanDraft, PlanStatus};
use crate::TrellisError;

/// The composite plan-creation request.
///
/// Carries the plan header together with its embedded milestone list so
/// that creation is a single call; the backend persists the plan and all
/// milestones together.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreatePlanPayload {
    /// Title of the plan
    pub title: String,

    /// Detailed description of the plan
    pub description: String,

    /// First day of the plan period
    pub start_date: Date,

    /// Last day of the plan period
    pub end_date: Date,

    /// Identifier of the authoring manager
    pub owner_id: String,

    /// Identifier of the person the plan is for
    pub assignee_id: String,

    /// Initial plan status
    pub status: PlanStatus,

    /// Embedded milestones, in display order
    pub milestones: Vec<MilestonePayload>,
}

/// One embedded milestone within a [`CreatePlanPayload`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MilestonePayload {
    /// Brief title of the checkpoint
    pub title: String,

    /// Detailed description of the checkpoint
    pub description: String,

    /// Day the milestone is due
    pub due_date: Date,

    /// Initial status; `Pending` for every newly created milestone
    pub status: MilestoneStatus,
}

impl CreatePlanPayload {
    /// Assemble the composite payload from a validated draft.
    ///
    /// The submission gate runs the full validator before this conversion,
    /// so missing dates indicate a caller bug; they are still reported as
    /// `InvalidInput` rather than panicking.
    ///
    /// # Errors
    ///
    /// * `TrellisError::InvalidInput` - When the draft or any milestone is
    ///   missing a date
    pub fn from_draft(draft: &PlanDraft, owner_id: &str) -> crate::Result<Self> {
        let start_date = draft.start_date.ok_or_else(|| {
            TrellisError::invalid_input("start_date").with_reason("required before submission")
        })?;
        let end_date = draft.end_date.ok_or_else(|| {
            TrellisError::invalid_input("end_date").with_reason("required before submission")
        })?;

        let milestones = draft
            .milestones
            .iter()
            .map(|m| {
                let due_date = m.due_date.ok_or_else(|| {
                    TrellisError::invalid_input("due_date")
                        .with_reason("required before submission")
                })?;
                Ok(MilestonePayload {
                    title: m.title.clone(),
                    description: m.description.clone(),
                    due_date,
                    status: m.status,
                })
            })
            .collect::<crate::Result<Vec<_>>>()?;

        Ok(Self {
            title: draft.title.clone(),
            description: draft.description.clone(),
            start_date,
            end_date,
            owner_id: owner_id.to_string(),
            assignee_id: draft.assignee_id.clone(),
            status: PlanStatus::Active,
            milestones,
        })
    }
}

/// Partial update for one milestone; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct MilestoneUpdate {
    /// New title, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New description, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New due date, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Date>,

    /// New status, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MilestoneStatus>,
}

impl MilestoneUpdate {
    /// Whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.status.is_none()
    }
}

impl TryFrom<crate::params::UpdateMilestone> for MilestoneUpdate {
    type Error = TrellisError;

    /// Convert update parameters into a validated partial update.
    ///
    /// # Errors
    ///
    /// * `TrellisError::InvalidInput` - When the due date or status string
    ///   does not parse
    fn try_from(params: crate::params::UpdateMilestone) -> Result<Self, Self::Error> {
        let (due_date, status) = params.validate()?;

        Ok(Self {
            title: params.title,
            description: params.description,
            due_date,
            status,
        })
    }
}

/// A milestone identifier paired with the fields to change; the unit of
/// the editor's batch update.
#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneChange {
    /// Identifier of the milestone to update
    pub id: String,

    /// Fields to change
    pub fields: MilestoneUpdate,
}

impl MilestoneChange {
    /// Pair a milestone id with its update.
    pub fn new(id: impl Into<String>, fields: MilestoneUpdate) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}
