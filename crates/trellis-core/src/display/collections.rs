//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{Person, PlanSummary};
use crate::validate::Violation;

/// Newtype wrapper for displaying collections of plan summaries.
///
/// This provides clean Display formatting for plan collections without title
/// handling, allowing consumers to handle titles separately. Handles empty
/// collections gracefully.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use trellis_core::{
///     display::PlanSummaries,
///     models::{PlanStatus, PlanSummary},
/// };
///
/// let plan = PlanSummary {
///     id: "plan-1".to_string(),
///     title: "Leadership Growth".to_string(),
///     assignee_id: "42".to_string(),
///     status: PlanStatus::Active,
///     start_date: date(2025, 1, 1),
///     end_date: date(2025, 7, 1),
///     total_milestones: 3,
///     completed_milestones: 1,
/// };
///
/// // Format a collection of plans
/// let summaries = PlanSummaries(vec![plan]);
/// let output = format!("{}", summaries);
/// assert!(output.contains("Leadership Growth"));
/// ```
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plan summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the plan summary at the given index.
    pub fn get(&self, index: usize) -> Option<&PlanSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the plan summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl Index<usize> for PlanSummaries {
    type Output = PlanSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PlanSummaries {
    type Item = PlanSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlanSummaries {
    type Item = &'a PlanSummary;
    type IntoIter = std::slice::Iter<'a, PlanSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")
        } else {
            for plan in &self.0 {
                write!(f, "{plan}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the people a manager may assign plans to.
///
/// Each entry is rendered as a single markdown bullet carrying the id the
/// assignee is selected by. Handles empty collections gracefully.
pub struct AssigneeList(pub Vec<Person>);

impl AssigneeList {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of people in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the people.
    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.0.iter()
    }
}

impl Index<usize> for AssigneeList {
    type Output = Person;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for AssigneeList {
    type Item = Person;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AssigneeList {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for AssigneeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No eligible assignees found.")
        } else {
            for person in &self.0 {
                writeln!(
                    f,
                    "- **{}** (ID: {}) <{}> ({}, {})",
                    person.name, person.id, person.email, person.role, person.department
                )?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a list of validation violations.
pub struct ViolationList(pub Vec<Violation>);

impl ViolationList {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of violations in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ViolationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The plan is not ready to submit:")?;
        writeln!(f)?;
        for violation in &self.0 {
            writeln!(f, "- {violation}")?;
        }
        Ok(())
    }
}
