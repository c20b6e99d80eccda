//! Edit flow over one persisted plan.

use std::sync::Arc;

use futures::future::join_all;

use crate::api::ApiClient;
use crate::error::{Result, TrellisError};
use crate::models::{Milestone, MilestoneChange, MilestoneStatus, MilestoneUpdate, Plan};
use crate::validate::{self, Violation};

/// What a call to [`PlanEditor::update_milestones`] decided.
#[derive(Debug)]
pub enum BatchOutcome {
    /// A staged change failed validation; nothing was sent
    Blocked(Vec<Violation>),
    /// Every change was sent; per-id results inside
    Settled(BatchReport),
}

/// Per-id results of a settled batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Milestones the backend accepted
    pub updated: Vec<Milestone>,
    /// Ids the backend rejected, with the error for each
    pub failed: Vec<(String, TrellisError)>,
}

/// Applies staged milestone changes to one persisted plan.
///
/// The editor validates every staged change up front, fans the accepted
/// batch out as one concurrent request per milestone, and reconciles
/// whatever comes back into its local copy of the plan. The batch is
/// best-effort: one failed update does not roll back its siblings, it is
/// reported per id instead.
pub struct PlanEditor {
    plan: Plan,
    api: Arc<dyn ApiClient>,
}

impl PlanEditor {
    /// Creates an editor over an already-fetched plan.
    pub fn new(plan: Plan, api: Arc<dyn ApiClient>) -> Self {
        Self { plan, api }
    }

    /// The plan in its reconciled local state.
    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    /// Validates and applies a batch of staged milestone changes.
    ///
    /// Every change is checked against the strict rules first: the target
    /// must belong to the plan, staged text fields meet the draft
    /// minimums, a staged due date stays within the plan period, and a
    /// completed milestone never goes back to pending. Any violation
    /// returns [`BatchOutcome::Blocked`] with the full list and zero
    /// network calls.
    ///
    /// An accepted batch fans out one update call per change concurrently
    /// and awaits them all; there is no ordering between the individual
    /// updates. Each milestone the backend returns replaces the local
    /// entry with the matching id; entries without a returned match keep
    /// their prior local value. Failures are collected per id in the
    /// report.
    pub async fn update_milestones(&mut self, changes: Vec<MilestoneChange>) -> Result<BatchOutcome> {
        let violations: Vec<Violation> = changes
            .iter()
            .flat_map(|change| validate::validate_milestone_change(&self.plan, change))
            .collect();
        if !violations.is_empty() {
            return Ok(BatchOutcome::Blocked(violations));
        }

        let calls = changes.iter().map(|change| {
            let api = Arc::clone(&self.api);
            async move {
                let result = api.update_milestone(&change.id, &change.fields).await;
                (change.id.clone(), result)
            }
        });
        let results = join_all(calls).await;

        let mut report = BatchReport::default();
        for (id, result) in results {
            match result {
                Ok(updated) => {
                    if let Some(local) = self
                        .plan
                        .milestones
                        .iter_mut()
                        .find(|m| m.id == updated.id)
                    {
                        *local = updated.clone();
                    }
                    report.updated.push(updated);
                }
                Err(error) => report.failed.push((id, error)),
            }
        }

        Ok(BatchOutcome::Settled(report))
    }

    /// Marks one pending milestone completed.
    ///
    /// A convenience wrapper over a single-entry batch. The transition is
    /// one-way; completing an already completed milestone is a harmless
    /// no-op on the backend.
    ///
    /// # Errors
    ///
    /// Returns `TrellisError::MilestoneNotFound` for ids not present in
    /// the plan, `TrellisError::Validation` when the staged change is
    /// refused, or the underlying API error when the update call fails.
    pub async fn complete_milestone(&mut self, id: &str) -> Result<Milestone> {
        if self.plan.milestone(id).is_none() {
            return Err(TrellisError::MilestoneNotFound { id: id.to_string() });
        }

        let change = MilestoneChange::new(
            id,
            MilestoneUpdate {
                status: Some(MilestoneStatus::Completed),
                ..Default::default()
            },
        );

        match self.update_milestones(vec![change]).await? {
            BatchOutcome::Blocked(violations) => Err(TrellisError::Validation { violations }),
            BatchOutcome::Settled(report) => {
                let BatchReport { updated, failed } = report;
                if let Some((_, error)) = failed.into_iter().next() {
                    return Err(error);
                }
                updated
                    .into_iter()
                    .next()
                    .ok_or_else(|| TrellisError::MilestoneNotFound { id: id.to_string() })
            }
        }
    }
}
