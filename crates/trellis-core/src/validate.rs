//! Business-rule validation for plan drafts.
//!
//! This module is the single home of the field rules: the authoring flow,
//! the editor, and the host surfaces all evaluate drafts through it, so the
//! rules cannot drift between call sites. Everything here is pure and
//! synchronous: functions never fail, never touch the network, and never
//! mutate their input. An invalid draft simply yields a non-empty list of
//! [`Violation`]s.
//!
//! The checks run independently and every violation is collected, so a user
//! sees the complete list at once rather than fixing fields one at a time.
//!
//! # Examples
//!
//! ```rust
//! use trellis_core::models::PlanDraft;
//! use trellis_core::validate::validate_required_fields;
//!
//! // An untouched draft violates each of the six required-field rules.
//! let violations = validate_required_fields(&PlanDraft::default());
//! assert_eq!(violations.len(), 6);
//! ```

use std::fmt;

use jiff::civil::Date;
use jiff::ToSpan;

use crate::models::{MilestoneChange, MilestoneDraft, MilestoneStatus, Plan, PlanDraft};

/// Minimum trimmed length of a plan title.
pub const TITLE_MIN_LEN: usize = 5;

/// Minimum trimmed length of a plan description.
pub const DESCRIPTION_MIN_LEN: usize = 10;

/// Minimum trimmed length of a milestone title.
pub const MILESTONE_TITLE_MIN_LEN: usize = 3;

/// Minimum trimmed length of a milestone description.
pub const MILESTONE_DESCRIPTION_MIN_LEN: usize = 5;

/// One human-readable reason a draft currently fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Which part of the draft the rule applies to, e.g. `title` or
    /// `milestones[2].due_date`
    pub field: String,

    /// The message shown to the user
    pub message: String,
}

impl Violation {
    /// Create a violation for a field with a message.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Whether a string is empty after trimming.
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn trimmed_len(s: &str) -> usize {
    s.trim().chars().count()
}

/// Whether a date range covers at least one calendar month.
///
/// Returns false if either date is absent. Otherwise the minimum end is the
/// start date plus one calendar month (month-rollover arithmetic; jiff
/// clamps day overflow to the end of the shorter month, so
/// Jan 31 + 1 month = Feb 28/29) and the range passes iff
/// `end >= start + 1 month`. A coarse minimum-duration rule, not a
/// thirty-day count.
pub fn validate_duration(start: Option<Date>, end: Option<Date>) -> bool {
    let (Some(start), Some(end)) = (start, end) else {
        return false;
    };

    start.checked_add(1.month()).is_ok_and(|min_end| end >= min_end)
}

/// Whether a due date falls within a plan period, inclusive on both ends.
pub fn date_within_range(start: Date, end: Date, due: Date) -> bool {
    due >= start && due <= end
}

/// Whether every milestone's due date falls within the plan period.
///
/// Returns false if `start`, `end`, or the milestone sequence itself is
/// absent. An absent sequence is not the same as an empty one: an empty
/// sequence is vacuously valid. Otherwise true iff every milestone has a
/// present due date with `start <= due <= end`; a milestone missing its
/// due date fails the whole check.
pub fn milestones_within_range(
    start: Option<Date>,
    end: Option<Date>,
    milestones: Option<&[MilestoneDraft]>,
) -> bool {
    let (Some(start), Some(end), Some(milestones)) = (start, end, milestones) else {
        return false;
    };

    milestones.iter().all(|m| {
        m.due_date
            .is_some_and(|due| date_within_range(start, end, due))
    })
}

/// The per-milestone content rules, shared between draft validation and the
/// edit flow: title ≥ 3 trimmed characters, description ≥ 5 trimmed
/// characters, due date present. `index` is 1-based for message purposes.
pub fn validate_milestone_fields(
    index: usize,
    title: &str,
    description: &str,
    due_date: Option<Date>,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    if trimmed_len(title) < MILESTONE_TITLE_MIN_LEN {
        violations.push(Violation::new(
            format!("milestones[{index}].title"),
            format!("Milestone {index}: title must be at least {MILESTONE_TITLE_MIN_LEN} characters"),
        ));
    }
    if trimmed_len(description) < MILESTONE_DESCRIPTION_MIN_LEN {
        violations.push(Violation::new(
            format!("milestones[{index}].description"),
            format!(
                "Milestone {index}: description must be at least {MILESTONE_DESCRIPTION_MIN_LEN} characters"
            ),
        ));
    }
    if due_date.is_none() {
        violations.push(Violation::new(
            format!("milestones[{index}].due_date"),
            format!("Milestone {index}: due date is required"),
        ));
    }

    violations
}

/// Check every required-field rule of a draft.
///
/// All checks run; every violation is collected, never short-circuited.
/// The order follows the check order (assignee, title, description, start
/// date, end date, milestone list), then milestones in list order. An empty
/// milestone list yields only the list-non-empty violation: there are no
/// per-milestone checks to run.
pub fn validate_required_fields(draft: &PlanDraft) -> Vec<Violation> {
    let mut violations = Vec::new();

    if is_blank(&draft.assignee_id) {
        violations.push(Violation::new(
            "assignee_id",
            "Select an assignee for the plan",
        ));
    }
    if trimmed_len(&draft.title) < TITLE_MIN_LEN {
        violations.push(Violation::new(
            "title",
            format!("Title must be at least {TITLE_MIN_LEN} characters"),
        ));
    }
    if trimmed_len(&draft.description) < DESCRIPTION_MIN_LEN {
        violations.push(Violation::new(
            "description",
            format!("Description must be at least {DESCRIPTION_MIN_LEN} characters"),
        ));
    }
    if draft.start_date.is_none() {
        violations.push(Violation::new("start_date", "Start date is required"));
    }
    if draft.end_date.is_none() {
        violations.push(Violation::new("end_date", "End date is required"));
    }
    if draft.milestones.is_empty() {
        violations.push(Violation::new("milestones", "Add at least one milestone"));
    }

    for (i, milestone) in draft.milestones.iter().enumerate() {
        violations.extend(validate_milestone_fields(
            i + 1,
            &milestone.title,
            &milestone.description,
            milestone.due_date,
        ));
    }

    violations
}

/// Run the complete submission rule set over a draft.
///
/// Runs [`validate_required_fields`]; then, only when both dates are
/// present, appends a duration violation if [`validate_duration`] fails and
/// a date-range violation if milestones exist and
/// [`milestones_within_range`] fails. An empty result means the draft is
/// submittable.
pub fn validate_complete(draft: &PlanDraft) -> Vec<Violation> {
    let mut violations = validate_required_fields(draft);

    if draft.start_date.is_some() && draft.end_date.is_some() {
        if !validate_duration(draft.start_date, draft.end_date) {
            violations.push(Violation::new(
                "duration",
                "The plan must run for at least one calendar month",
            ));
        }
        if !draft.milestones.is_empty()
            && !milestones_within_range(
                draft.start_date,
                draft.end_date,
                Some(&draft.milestones),
            )
        {
            violations.push(Violation::new(
                "milestone_dates",
                "Every milestone due date must fall within the plan period",
            ));
        }
    }

    violations
}

/// Check one staged milestone update against a persisted plan.
///
/// Stricter than the draft rules: the target must belong to the plan, the
/// update must stage at least one field, staged text fields meet the same
/// trimmed minimums as drafts, a staged due date must stay within the plan
/// period, and a completed milestone never goes back to pending. Absent
/// fields are not checked; they keep their server-side value.
pub fn validate_milestone_change(plan: &Plan, change: &MilestoneChange) -> Vec<Violation> {
    let id = &change.id;
    let mut violations = Vec::new();

    let Some(current) = plan.milestone(id) else {
        violations.push(Violation::new(
            format!("milestones[{id}]"),
            format!("Milestone {id} is not part of this plan"),
        ));
        return violations;
    };

    let fields = &change.fields;
    if fields.is_empty() {
        violations.push(Violation::new(
            format!("milestones[{id}]"),
            format!("Milestone {id}: nothing to update"),
        ));
        return violations;
    }

    if let Some(title) = &fields.title {
        if trimmed_len(title) < MILESTONE_TITLE_MIN_LEN {
            violations.push(Violation::new(
                format!("milestones[{id}].title"),
                format!(
                    "Milestone {id}: title must be at least {MILESTONE_TITLE_MIN_LEN} characters"
                ),
            ));
        }
    }
    if let Some(description) = &fields.description {
        if trimmed_len(description) < MILESTONE_DESCRIPTION_MIN_LEN {
            violations.push(Violation::new(
                format!("milestones[{id}].description"),
                format!(
                    "Milestone {id}: description must be at least {MILESTONE_DESCRIPTION_MIN_LEN} characters"
                ),
            ));
        }
    }
    if let Some(due) = fields.due_date {
        if !date_within_range(plan.start_date, plan.end_date, due) {
            violations.push(Violation::new(
                format!("milestones[{id}].due_date"),
                format!("Milestone {id}: due date must fall within the plan period"),
            ));
        }
    }
    if let Some(status) = fields.status {
        if current.status == MilestoneStatus::Completed && status == MilestoneStatus::Pending {
            violations.push(Violation::new(
                format!("milestones[{id}].status"),
                format!("Milestone {id}: a completed milestone cannot go back to pending"),
            ));
        }
    }

    violations
}
