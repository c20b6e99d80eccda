//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create and
//! update operations with consistent messaging and resource display.

use std::fmt;

use crate::flow::BatchReport;
use crate::models::{Milestone, Plan};

/// Wrapper type for displaying the result of create operations.
///
/// This provides consistent formatting for creation results,
/// including success messages and the created resource information.
///
/// The wrapper formats creation results with:
/// - Success message with resource type and ID
/// - Full details of the created resource
/// - Consistent markdown structure
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// This provides consistent formatting for update results,
/// including success messages and the updated resource information.
///
/// The wrapper can track and display specific changes made during the update,
/// providing users with clear feedback about what was modified.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Milestone> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated milestone with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the per-id results of a settled batch.
///
/// Successes and failures are listed separately so a partial failure is
/// obvious at a glance.
pub struct BatchResult<'a>(pub &'a BatchReport);

impl<'a> fmt::Display for BatchResult<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let updated = self.0.updated.len();
        let total = updated + self.0.failed.len();
        writeln!(f, "Updated {updated} of {total} milestones.")?;

        if !self.0.updated.is_empty() {
            writeln!(f)?;
            for milestone in &self.0.updated {
                writeln!(
                    f,
                    "- {} ({}) due {}",
                    milestone.title,
                    milestone.status.with_icon(),
                    milestone.due_date
                )?;
            }
        }

        if !self.0.failed.is_empty() {
            writeln!(f)?;
            writeln!(f, "Failed:")?;
            for (id, error) in &self.0.failed {
                writeln!(f, "- {id}: {error}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::Timestamp;

    use super::*;
    use crate::error::TrellisError;
    use crate::models::{MilestoneStatus, PlanStatus};

    fn create_test_milestone() -> Milestone {
        let now = Timestamp::from_second(1735689600).unwrap();
        Milestone {
            id: "m-1".to_string(),
            plan_id: "plan-1".to_string(),
            title: "Finish course".to_string(),
            description: "Complete the management course".to_string(),
            due_date: date(2025, 2, 1),
            status: MilestoneStatus::Completed,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_create_result_display() {
        let now = Timestamp::from_second(1735689600).unwrap();
        let plan = Plan {
            id: "plan-1".to_string(),
            title: "Leadership Growth".to_string(),
            description: "Build leadership skills over two quarters".to_string(),
            start_date: date(2025, 1, 1),
            end_date: date(2025, 7, 1),
            owner_id: "7".to_string(),
            assignee_id: "42".to_string(),
            status: PlanStatus::Active,
            milestones: vec![],
            created_at: now,
            updated_at: now,
        };

        let output = format!("{}", CreateResult::new(plan));
        assert!(output.contains("Created plan with ID: plan-1"));
        assert!(output.contains("# Leadership Growth"));
    }

    #[test]
    fn test_update_result_lists_changes() {
        let result = UpdateResult::with_changes(
            create_test_milestone(),
            vec!["Marked completed".to_string()],
        );

        let output = format!("{result}");
        assert!(output.contains("Updated milestone with ID: m-1"));
        assert!(output.contains("Changes made:"));
        assert!(output.contains("- Marked completed"));
    }

    #[test]
    fn test_batch_result_separates_failures() {
        let report = BatchReport {
            updated: vec![create_test_milestone()],
            failed: vec![(
                "m-2".to_string(),
                TrellisError::api_error(500, "boom"),
            )],
        };

        let output = format!("{}", BatchResult(&report));
        assert!(output.contains("Updated 1 of 2 milestones."));
        assert!(output.contains("- Finish course (✓ Completed) due 2025-02-01"));
        assert!(output.contains("Failed:"));
        assert!(output.contains("- m-2: API error (status 500): boom"));
    }
}
