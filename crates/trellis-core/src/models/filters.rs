//! Filter types for querying plans.

use super::PlanStatus;

/// Filter options for listing plans.
///
/// Filtering happens server-side; this type only names the query the
/// client asks for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanFilter {
    /// Filter by the authoring manager's identifier
    pub owner: Option<String>,

    /// Filter by the assignee's identifier
    pub assignee: Option<String>,

    /// Filter by plan status; `None` lists plans in any status
    pub status: Option<PlanStatus>,
}

impl PlanFilter {
    /// Create a filter for plans authored by the given manager.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trellis_core::models::PlanFilter;
    ///
    /// let filter = PlanFilter::for_owner("7");
    /// assert_eq!(filter.owner, Some("7".to_string()));
    /// assert!(filter.assignee.is_none());
    /// ```
    pub fn for_owner(owner: impl Into<String>) -> Self {
        Self {
            owner: Some(owner.into()),
            ..Default::default()
        }
    }
}

impl TryFrom<&crate::params::ListPlans> for PlanFilter {
    type Error = crate::TrellisError;

    /// Convert list parameters into a filter, parsing the status name.
    ///
    /// # Errors
    ///
    /// * `TrellisError::InvalidInput` - When the status string is not a
    ///   known plan status
    fn try_from(params: &crate::params::ListPlans) -> Result<Self, Self::Error> {
        let status = params.validate()?;

        Ok(Self {
            owner: None,
            assignee: params.assignee.clone(),
            status,
        })
    }
}
