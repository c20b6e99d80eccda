//! Parameter structures for Trellis operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI, MCP, etc.) without framework-specific derives or
//! dependencies. These structures provide a clean interface for passing data
//! between different layers of the application.
//!
//! ## Architecture: Parameter Wrapper Pattern
//!
//! This module implements a parameter wrapper pattern that enables clean
//! separation of concerns between the core domain logic and interface-specific
//! frameworks:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ### Benefits
//!
//! 1. **Separation of Concerns**: Core parameter structures remain independent
//!    of UI framework dependencies (clap, schemars).
//!
//! 2. **Interface Flexibility**: Each interface (CLI, MCP, future surfaces) can
//!    add its own framework-specific derives without polluting core logic.
//!
//! 3. **Conditional Compilation**: Features like JSON schema generation can be
//!    enabled only where needed, keeping core lightweight.
//!
//! 4. **Stringly In, Typed Out**: Parameters carry the raw strings the user
//!    typed; each `validate()` parses them once into domain types
//!    (`jiff::civil::Date`, status enums) at the boundary, so the layers below
//!    never see unparsed input.
//!
//! ### Usage Pattern
//!
//! Interface layers create wrapper structs that:
//! - Add framework-specific derives (clap::Args, schemars::JsonSchema, etc.)
//! - Use transparent serialization (`#[serde(transparent)]`)
//! - Convert to core parameters via `.into()` or accessor methods
//!
//! ```ignore
//! // In CLI module
//! #[derive(Args)]
//! pub struct CreatePlanArgs {
//!     pub title: String,
//!     // ... clap-specific attributes
//! }
//!
//! impl From<CreatePlanArgs> for CreatePlan {
//!     fn from(args: CreatePlanArgs) -> Self {
//!         CreatePlan {
//!             title: args.title,
//!             // ...
//!         }
//!     }
//! }
//!
//! // In MCP module
//! #[derive(Deserialize, JsonSchema)]
//! #[serde(transparent)]
//! struct CreatePlanRequest(trellis_core::params::CreatePlan);
//! ```

use std::str::FromStr;

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrellisError};
use crate::models::{MilestoneStatus, PlanStatus};

/// Generic parameters for operations requiring just an ID.
///
/// Used for operations like show_plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: String,
}

/// Parameters for creating a development plan.
///
/// Dates are ISO strings (`YYYY-MM-DD`); milestones are compact
/// `title|description|due-date` specs so one repeatable argument can carry a
/// whole milestone. [`validate`](Self::validate) parses both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreatePlan {
    /// ID of the person the plan is for (required)
    pub assignee_id: String,
    /// Title of the plan (required, at least 5 characters)
    pub title: String,
    /// Description of the plan (required, at least 10 characters)
    pub description: String,
    /// Start of the plan period as `YYYY-MM-DD`
    pub start_date: String,
    /// End of the plan period as `YYYY-MM-DD`; at least one calendar month
    /// after the start
    pub end_date: String,
    /// Milestones as `title|description|due-date` specs
    #[serde(default)]
    pub milestones: Vec<String>,
}

/// One parsed `title|description|due-date` milestone spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneSpec {
    pub title: String,
    pub description: String,
    pub due_date: Date,
}

impl CreatePlan {
    /// Parse the date strings and milestone specs.
    ///
    /// Only the shapes are checked here; the business rules (lengths,
    /// duration, date windows) run in the authoring flow when the draft is
    /// submitted.
    ///
    /// # Returns
    ///
    /// A Result containing the parsed start date, end date, and milestone
    /// specs, or an error if any piece fails to parse.
    ///
    /// # Errors
    ///
    /// * `TrellisError::InvalidInput` - When a date is not `YYYY-MM-DD`
    /// * `TrellisError::InvalidInput` - When a milestone spec does not have
    ///   three `|`-separated parts
    pub fn validate(&self) -> Result<(Date, Date, Vec<MilestoneSpec>)> {
        let start = parse_date("start_date", &self.start_date)?;
        let end = parse_date("end_date", &self.end_date)?;

        let mut specs = Vec::with_capacity(self.milestones.len());
        for (i, raw) in self.milestones.iter().enumerate() {
            let index = i + 1;
            let mut parts = raw.splitn(3, '|');
            let (Some(title), Some(description), Some(due)) =
                (parts.next(), parts.next(), parts.next())
            else {
                return Err(TrellisError::invalid_input("milestones").with_reason(format!(
                    "Milestone {index}: expected 'title|description|due-date', got '{raw}'"
                )));
            };
            let due_date = parse_date("milestones", due).map_err(|_| {
                TrellisError::invalid_input("milestones").with_reason(format!(
                    "Milestone {index}: invalid due date '{due}'. Use YYYY-MM-DD"
                ))
            })?;
            specs.push(MilestoneSpec {
                title: title.trim().to_string(),
                description: description.trim().to_string(),
                due_date,
            });
        }

        Ok((start, end, specs))
    }
}

/// Parameters for listing plans.
///
/// All filters are optional; an empty set lists every plan the backend
/// shows the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListPlans {
    /// Only plans assigned to this person
    pub assignee: Option<String>,
    /// Only plans with this status ('active' or 'completed')
    pub status: Option<String>,
    /// Only plans owned by the acting user
    #[serde(default)]
    pub mine: bool,
}

impl ListPlans {
    /// Parse the status filter, if present.
    ///
    /// # Errors
    ///
    /// * `TrellisError::InvalidInput` - When the status string is invalid
    pub fn validate(&self) -> Result<Option<PlanStatus>> {
        self.status
            .as_deref()
            .map(|raw| {
                PlanStatus::from_str(raw).map_err(|_| {
                    TrellisError::invalid_input("status").with_reason(format!(
                        "Invalid status: {raw}. Must be 'active' or 'completed'"
                    ))
                })
            })
            .transpose()
    }
}

/// Parameters for updating an existing milestone.
///
/// Allows partial updates to milestone properties; absent fields keep their
/// current value. The plan ID names the plan the milestone belongs to, so
/// the staged change can be validated against the plan period before
/// anything is sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateMilestone {
    /// Milestone ID to update (required)
    pub id: String,
    /// ID of the plan the milestone belongs to (required)
    pub plan_id: String,
    /// Updated title of the milestone
    pub title: Option<String>,
    /// Updated description of the milestone
    pub description: Option<String>,
    /// Updated due date as `YYYY-MM-DD`
    pub due_date: Option<String>,
    /// New status for the milestone ('pending' or 'completed'). Completed
    /// milestones never go back to pending.
    pub status: Option<String>,
}

impl UpdateMilestone {
    /// Parse the due date and status, if present.
    ///
    /// # Returns
    ///
    /// A Result containing a tuple of (optional parsed due date, optional
    /// parsed status), or an error if validation fails.
    ///
    /// # Errors
    ///
    /// * `TrellisError::InvalidInput` - When the due date is not `YYYY-MM-DD`
    /// * `TrellisError::InvalidInput` - When the status string is invalid
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trellis_core::models::MilestoneStatus;
    /// use trellis_core::params::UpdateMilestone;
    ///
    /// let mut params = UpdateMilestone::default();
    /// params.id = "m-1".to_string();
    /// params.status = Some("completed".to_string());
    /// let (due_date, status) = params.validate()?;
    /// assert_eq!(status, Some(MilestoneStatus::Completed));
    /// assert_eq!(due_date, None);
    /// # use trellis_core::Result;
    /// # Result::<()>::Ok(())
    /// ```
    pub fn validate(&self) -> Result<(Option<Date>, Option<MilestoneStatus>)> {
        let due_date = self
            .due_date
            .as_deref()
            .map(|raw| parse_date("due_date", raw))
            .transpose()?;

        let status = self
            .status
            .as_deref()
            .map(|raw| {
                MilestoneStatus::from_str(raw).map_err(|_| {
                    TrellisError::invalid_input("status").with_reason(format!(
                        "Invalid status: {raw}. Must be 'pending' or 'completed'"
                    ))
                })
            })
            .transpose()?;

        Ok((due_date, status))
    }
}

/// Parameters for marking one milestone completed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CompleteMilestone {
    /// Milestone ID to complete (required)
    pub id: String,
    /// ID of the plan the milestone belongs to (required)
    pub plan_id: String,
}

fn parse_date(field: &str, raw: &str) -> Result<Date> {
    raw.trim().parse::<Date>().map_err(|_| {
        TrellisError::invalid_input(field)
            .with_reason(format!("Invalid date: {raw}. Use YYYY-MM-DD"))
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::TrellisError;

    #[test]
    fn test_create_plan_validate_parses_dates_and_specs() {
        let mut params = CreatePlan::default();
        params.start_date = "2025-01-01".to_string();
        params.end_date = "2025-07-01".to_string();
        params.milestones = vec![
            "Finish course|Complete the management course|2025-02-01".to_string(),
        ];

        let (start, end, specs) = params.validate().expect("Valid params should parse");
        assert_eq!(start, date(2025, 1, 1));
        assert_eq!(end, date(2025, 7, 1));
        assert_eq!(
            specs,
            vec![MilestoneSpec {
                title: "Finish course".to_string(),
                description: "Complete the management course".to_string(),
                due_date: date(2025, 2, 1),
            }]
        );
    }

    #[test]
    fn test_create_plan_validate_trims_spec_parts() {
        let mut params = CreatePlan::default();
        params.start_date = "2025-01-01".to_string();
        params.end_date = "2025-07-01".to_string();
        params.milestones =
            vec![" Finish course | Complete the management course | 2025-02-01 ".to_string()];

        let (_, _, specs) = params.validate().expect("Valid params should parse");
        assert_eq!(specs[0].title, "Finish course");
        assert_eq!(specs[0].due_date, date(2025, 2, 1));
    }

    #[test]
    fn test_create_plan_validate_rejects_bad_date() {
        let mut params = CreatePlan::default();
        params.start_date = "01/15/2025".to_string();
        params.end_date = "2025-07-01".to_string();

        match params.validate().unwrap_err() {
            TrellisError::InvalidInput { field, reason } => {
                assert_eq!(field, "start_date");
                assert!(reason.contains("YYYY-MM-DD"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_create_plan_validate_rejects_malformed_spec() {
        let mut params = CreatePlan::default();
        params.start_date = "2025-01-01".to_string();
        params.end_date = "2025-07-01".to_string();
        params.milestones = vec!["Finish course|2025-02-01".to_string()];

        match params.validate().unwrap_err() {
            TrellisError::InvalidInput { field, reason } => {
                assert_eq!(field, "milestones");
                assert!(reason.contains("Milestone 1"));
                assert!(reason.contains("title|description|due-date"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_create_plan_validate_rejects_bad_spec_date() {
        let mut params = CreatePlan::default();
        params.start_date = "2025-01-01".to_string();
        params.end_date = "2025-07-01".to_string();
        params.milestones = vec!["Finish course|Complete the course|tomorrow".to_string()];

        match params.validate().unwrap_err() {
            TrellisError::InvalidInput { field, reason } => {
                assert_eq!(field, "milestones");
                assert!(reason.contains("invalid due date 'tomorrow'"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_list_plans_validate_parses_status() {
        let mut params = ListPlans::default();
        params.status = Some("completed".to_string());

        let status = params.validate().expect("Valid status should parse");
        assert_eq!(status, Some(PlanStatus::Completed));
    }

    #[test]
    fn test_list_plans_validate_no_status() {
        let params = ListPlans::default();
        assert_eq!(params.validate().expect("No status is valid"), None);
    }

    #[test]
    fn test_list_plans_validate_invalid_status() {
        let mut params = ListPlans::default();
        params.status = Some("archived".to_string());

        match params.validate().unwrap_err() {
            TrellisError::InvalidInput { field, reason } => {
                assert_eq!(field, "status");
                assert!(reason.contains("Invalid status: archived"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_update_milestone_validate_parses_both() {
        let mut params = UpdateMilestone::default();
        params.id = "m-1".to_string();
        params.due_date = Some("2025-03-01".to_string());
        params.status = Some("completed".to_string());

        let (due_date, status) = params.validate().expect("Valid params should parse");
        assert_eq!(due_date, Some(date(2025, 3, 1)));
        assert_eq!(status, Some(MilestoneStatus::Completed));
    }

    #[test]
    fn test_update_milestone_validate_accepts_complete_spelling() {
        let mut params = UpdateMilestone::default();
        params.id = "m-1".to_string();
        params.status = Some("complete".to_string());

        let (_, status) = params.validate().expect("Alternate spelling should parse");
        assert_eq!(status, Some(MilestoneStatus::Completed));
    }

    #[test]
    fn test_update_milestone_validate_rejects_bad_date() {
        let mut params = UpdateMilestone::default();
        params.id = "m-1".to_string();
        params.due_date = Some("15/03/2025".to_string());

        match params.validate().unwrap_err() {
            TrellisError::InvalidInput { field, .. } => assert_eq!(field, "due_date"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_update_milestone_validate_no_changes() {
        let params = UpdateMilestone::default();

        let (due_date, status) = params.validate().expect("Empty update parses");
        assert_eq!(due_date, None);
        assert_eq!(status, None);
    }
}
