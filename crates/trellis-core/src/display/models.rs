//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions to maintain clean separation of
//! concerns.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Consistent formatting with status icons and structured sections
//! - Context-aware display behavior for different use cases

use std::fmt;

use super::datetime::{DateRange, LocalDateTime};
use crate::models::{Milestone, MilestoneStatus, Person, Plan, PlanStatus, PlanSummary, Role};

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Status: {}", self.status.as_str())?;
        writeln!(f, "- Assignee: {}", self.assignee_id)?;
        writeln!(f, "- Period: {}", DateRange(self.start_date, self.end_date))?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        // Description as a paragraph
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;

        if self.milestones.is_empty() {
            writeln!(f, "\nNo milestones in this plan.")?;
        } else {
            writeln!(f, "\n## Milestones")?;
            writeln!(f)?;
            for milestone in &self.milestones {
                write!(f, "{milestone}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.title, self.status.with_icon())?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Due: {}", self.due_date)?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_milestones > 0 {
            format!(" ({}/{})", self.completed_milestones, self.total_milestones)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Status**: {}", self.status.as_str())?;
        writeln!(f, "- **Assignee**: {}", self.assignee_id)?;
        writeln!(f, "- **Period**: {}", DateRange(self.start_date, self.end_date))?;
        writeln!(f)?; // Blank line after each plan

        Ok(())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Email: {}", self.email)?;
        writeln!(f, "- Role: {}", self.role.as_str())?;
        writeln!(f, "- Department: {}", self.department)?;

        Ok(())
    }
}
