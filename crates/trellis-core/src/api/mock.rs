//! Scripted in-memory client used by the test suites.
//!
//! The mock records every write it receives, so tests can assert exactly
//! which calls were issued, including that none were. Failures are
//! scripted per operation (and per milestone id for updates) to drive the
//! error paths.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use jiff::Timestamp;

use super::ApiClient;
use crate::models::{
    CreatePlanPayload, Milestone, MilestoneUpdate, Person, Plan, PlanFilter,
};
use crate::{Result, TrellisError};

#[derive(Debug, Default)]
struct MockState {
    current_user: Option<Person>,
    assignees: Vec<Person>,
    assignee_failure: Option<String>,
    create_failure: Option<String>,
    failing_updates: HashSet<String>,
    plans: Vec<Plan>,
    recorded_creates: Vec<CreatePlanPayload>,
    recorded_updates: Vec<(String, MilestoneUpdate)>,
    next_plan: u64,
}

/// In-memory [`ApiClient`] with scripted responses.
#[derive(Debug, Default)]
pub struct MockApiClient {
    state: Mutex<MockState>,
}

impl MockApiClient {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set the person `resolve_current_user` returns.
    pub fn with_current_user(self, person: Person) -> Self {
        self.state().current_user = Some(person);
        self
    }

    /// Set the people `list_eligible_assignees` returns.
    pub fn with_assignees(self, people: Vec<Person>) -> Self {
        self.state().assignees = people;
        self
    }

    /// Script a failure for the assignee fetch.
    pub fn with_assignee_failure(self, message: impl Into<String>) -> Self {
        self.state().assignee_failure = Some(message.into());
        self
    }

    /// Seed a persisted plan, available to `fetch_plan`, `list_plans`,
    /// and `update_milestone`.
    pub fn with_plan(self, plan: Plan) -> Self {
        self.state().plans.push(plan);
        self
    }

    /// Script a failure for every plan-creation attempt.
    pub fn with_create_failure(self, message: impl Into<String>) -> Self {
        self.state().create_failure = Some(message.into());
        self
    }

    /// Script a failure for updates of the given milestone id.
    pub fn with_failing_update(self, id: impl Into<String>) -> Self {
        self.state().failing_updates.insert(id.into());
        self
    }

    /// How many plan-creation calls were issued, including failed ones.
    pub fn create_calls(&self) -> usize {
        self.state().recorded_creates.len()
    }

    /// Every payload passed to `create_plan`, in call order.
    pub fn recorded_creates(&self) -> Vec<CreatePlanPayload> {
        self.state().recorded_creates.clone()
    }

    /// Every `(id, fields)` pair passed to `update_milestone`, in call
    /// order.
    pub fn recorded_updates(&self) -> Vec<(String, MilestoneUpdate)> {
        self.state().recorded_updates.clone()
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    async fn resolve_current_user(&self) -> Result<Person> {
        self.state()
            .current_user
            .clone()
            .ok_or_else(|| TrellisError::api_error(401, "No identity configured in this mock"))
    }

    async fn list_eligible_assignees(&self, _manager_id: &str) -> Result<Vec<Person>> {
        let state = self.state();
        if let Some(message) = &state.assignee_failure {
            return Err(TrellisError::api_error(503, message.clone()));
        }
        Ok(state.assignees.clone())
    }

    async fn create_plan(&self, payload: &CreatePlanPayload) -> Result<Plan> {
        let mut state = self.state();
        state.recorded_creates.push(payload.clone());

        if let Some(message) = &state.create_failure {
            return Err(TrellisError::api_error(500, message.clone()));
        }

        state.next_plan += 1;
        let plan_id = format!("plan-{}", state.next_plan);
        let now = Timestamp::now();

        let milestones = payload
            .milestones
            .iter()
            .enumerate()
            .map(|(i, m)| Milestone {
                id: format!("{}-m{}", plan_id, i + 1),
                plan_id: plan_id.clone(),
                title: m.title.clone(),
                description: m.description.clone(),
                due_date: m.due_date,
                status: m.status,
                created_at: now,
                updated_at: now,
            })
            .collect();

        let plan = Plan {
            id: plan_id,
            title: payload.title.clone(),
            description: payload.description.clone(),
            start_date: payload.start_date,
            end_date: payload.end_date,
            owner_id: payload.owner_id.clone(),
            assignee_id: payload.assignee_id.clone(),
            status: payload.status,
            milestones,
            created_at: now,
            updated_at: now,
        };

        state.plans.push(plan.clone());
        Ok(plan)
    }

    async fn update_milestone(&self, id: &str, fields: &MilestoneUpdate) -> Result<Milestone> {
        let mut state = self.state();
        state
            .recorded_updates
            .push((id.to_string(), fields.clone()));

        if state.failing_updates.contains(id) {
            return Err(TrellisError::api_error(500, "Scripted update failure"));
        }

        let milestone = state
            .plans
            .iter_mut()
            .flat_map(|p| p.milestones.iter_mut())
            .find(|m| m.id == id)
            .ok_or_else(|| TrellisError::MilestoneNotFound { id: id.to_string() })?;

        if let Some(title) = &fields.title {
            milestone.title = title.clone();
        }
        if let Some(description) = &fields.description {
            milestone.description = description.clone();
        }
        if let Some(due_date) = fields.due_date {
            milestone.due_date = due_date;
        }
        if let Some(status) = fields.status {
            milestone.status = status;
        }
        milestone.updated_at = Timestamp::now();

        Ok(milestone.clone())
    }

    async fn fetch_plan(&self, id: &str) -> Result<Plan> {
        self.state()
            .plans
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| TrellisError::PlanNotFound { id: id.to_string() })
    }

    async fn list_plans(&self, filter: &PlanFilter) -> Result<Vec<Plan>> {
        let state = self.state();
        Ok(state
            .plans
            .iter()
            .filter(|p| filter.owner.as_ref().map_or(true, |o| &p.owner_id == o))
            .filter(|p| filter.assignee.as_ref().map_or(true, |a| &p.assignee_id == a))
            .filter(|p| filter.status.map_or(true, |s| p.status == s))
            .cloned()
            .collect())
    }
}
