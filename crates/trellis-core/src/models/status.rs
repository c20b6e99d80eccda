//! Status and role enumerations for plans, milestones, and people.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of plan statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    /// Plan is underway
    #[default]
    Active,

    /// Plan has been completed
    Completed,
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(PlanStatus::Active),
            "completed" => Ok(PlanStatus::Completed),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

impl PlanStatus {
    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Active => "active",
            PlanStatus::Completed => "completed",
        }
    }
}

/// Type-safe enumeration of milestone statuses.
///
/// A milestone starts `Pending` and may move to `Completed` exactly once;
/// the transition is never reverted client-side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneStatus {
    /// Milestone has not been reached yet
    #[default]
    Pending,

    /// Milestone has been completed
    Completed,
}

impl FromStr for MilestoneStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(MilestoneStatus::Pending),
            "completed" | "complete" => Ok(MilestoneStatus::Completed),
            _ => Err(format!("Invalid milestone status: {s}")),
        }
    }
}

impl MilestoneStatus {
    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneStatus::Pending => "pending",
            MilestoneStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trellis_core::models::MilestoneStatus;
    ///
    /// assert_eq!(MilestoneStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(MilestoneStatus::Pending.with_icon(), "○ Pending");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            MilestoneStatus::Completed => "✓ Completed",
            MilestoneStatus::Pending => "○ Pending",
        }
    }
}

/// Role of a person in the directory.
///
/// Only contributors are eligible plan assignees; managers author plans
/// for people in their own department.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Individual contributor, eligible to receive a plan
    Contributor,

    /// Manager, authors plans for their department
    Manager,

    /// Administrator
    Admin,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "contributor" => Ok(Role::Contributor),
            "manager" => Ok(Role::Manager),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: {s}")),
        }
    }
}

impl Role {
    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Contributor => "contributor",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }
}
