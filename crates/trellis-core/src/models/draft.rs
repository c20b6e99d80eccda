//! Draft models for the plan authoring flow.
//!
//! Drafts are client-only: they exist while the authoring flow is open,
//! are mutated in place across the two steps, and are discarded on cancel
//! or after a successful submission. They are never persisted locally,
//! so none of these types serialize.

use jiff::civil::Date;

use super::MilestoneStatus;
use crate::validate::is_blank;

/// An in-progress development plan being authored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanDraft {
    /// Identifier of the person the plan is for; empty until selected
    pub assignee_id: String,

    /// Title of the plan
    pub title: String,

    /// Detailed description of the plan
    pub description: String,

    /// First day of the plan period
    pub start_date: Option<Date>,

    /// Last day of the plan period
    pub end_date: Option<Date>,

    /// Milestones added so far, in insertion order (numbered from 1
    /// for display)
    pub milestones: Vec<MilestoneDraft>,
}

impl PlanDraft {
    /// Whether every basic-information field has been filled in.
    ///
    /// This is the deliberately lightweight gate for moving from the
    /// basic-info step to the milestones step: presence only, no length
    /// or date-consistency rules.
    pub fn basic_info_complete(&self) -> bool {
        !is_blank(&self.assignee_id)
            && !is_blank(&self.title)
            && !is_blank(&self.description)
            && self.start_date.is_some()
            && self.end_date.is_some()
    }

    /// Discard all content, returning the draft to its initial empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A single checkpoint being added to a draft plan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MilestoneDraft {
    /// Brief title of the checkpoint
    pub title: String,

    /// Detailed description of the checkpoint
    pub description: String,

    /// Day the milestone is due; must fall within the plan period
    pub due_date: Option<Date>,

    /// Completion status; always `Pending` for a newly added milestone
    pub status: MilestoneStatus,
}

impl MilestoneDraft {
    /// Create a pending milestone draft with the given content.
    pub fn new(title: impl Into<String>, description: impl Into<String>, due_date: Date) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date: Some(due_date),
            status: MilestoneStatus::Pending,
        }
    }
}

/// The current-milestone input buffer of the authoring flow.
///
/// Holds what the user has typed for the next milestone. Cleared when the
/// milestone is appended to the draft; left untouched when the append is
/// refused.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MilestoneInput {
    /// Title typed so far
    pub title: String,

    /// Description typed so far
    pub description: String,

    /// Due date picked so far
    pub due_date: Option<Date>,
}

impl MilestoneInput {
    /// Whether all three fields are filled in.
    pub fn is_complete(&self) -> bool {
        !is_blank(&self.title) && !is_blank(&self.description) && self.due_date.is_some()
    }

    /// Convert the buffer into a pending milestone and clear it.
    ///
    /// Returns `None` without touching the buffer when any field is
    /// still missing.
    pub fn take_draft(&mut self) -> Option<MilestoneDraft> {
        if !self.is_complete() {
            return None;
        }
        let input = std::mem::take(self);
        let due_date = input.due_date?;
        Some(MilestoneDraft::new(input.title, input.description, due_date))
    }
}
