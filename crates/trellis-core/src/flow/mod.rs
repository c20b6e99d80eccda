//! Authoring and editing flows for development plans.
//!
//! This module hosts the two stateful coordinators of the library. The
//! [`AuthoringFlow`] owns a mutable [`PlanDraft`] and walks it through a
//! two-step wizard to a single composite create call; the [`PlanEditor`]
//! wraps one persisted [`Plan`](crate::models::Plan) and applies staged
//! milestone changes as a concurrent batch.
//!
//! # State Machine
//!
//! ```text
//!                 advance()                     submit()
//! ┌───────────┐ ────────────▶ ┌────────────┐ ────────────▶ create_plan
//! │ BasicInfo │               │ Milestones │
//! └───────────┘ ◀──────────── └────────────┘
//!                   back()
//! ```
//!
//! Both a successful submission and an explicit cancel reset the machine to
//! its initial empty state; there is no terminal step. Forward navigation
//! is gated on a presence-only check of the basic fields, while submission
//! runs the full rule set in [`crate::validate`].
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`AuthoringFlow`] instances
//! - [`ops`]: Synchronous field mutation and navigation
//! - [`submit`]: The assignee fetch and the composite submission
//! - [`editor`]: [`PlanEditor`] batch updates over a persisted plan
//!
//! # Usage Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use jiff::civil::date;
//! use trellis_core::api::MockApiClient;
//! use trellis_core::flow::{FlowBuilder, SubmitOutcome};
//! use trellis_core::models::{Person, Role};
//!
//! # async fn example() -> Result<(), trellis_core::TrellisError> {
//! let owner = Person {
//!     id: "7".to_string(),
//!     name: "Dana Mercer".to_string(),
//!     email: "dana@example.com".to_string(),
//!     role: Role::Manager,
//!     department: "Engineering".to_string(),
//! };
//! let (mut flow, _events) = FlowBuilder::new()
//!     .with_owner(owner)
//!     .with_api(Arc::new(MockApiClient::new()))
//!     .build()?;
//!
//! flow.open().await;
//! flow.set_assignee("42");
//! flow.set_title("Leadership Growth");
//! flow.set_description("Build leadership skills over two quarters");
//! flow.set_start_date(date(2025, 1, 1));
//! flow.set_end_date(date(2025, 7, 1));
//! assert!(flow.advance());
//!
//! flow.set_milestone_title("Finish course");
//! flow.set_milestone_description("Complete the management course");
//! flow.set_milestone_due_date(date(2025, 2, 1));
//! assert!(flow.add_milestone());
//!
//! match flow.submit().await? {
//!     SubmitOutcome::Created(plan) => println!("created {}", plan.id),
//!     SubmitOutcome::Blocked(violations) => eprintln!("{} problems", violations.len()),
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::models::{MilestoneInput, Person, Plan, PlanDraft};
use crate::validate::Violation;

pub mod builder;
pub mod editor;
pub mod ops;
pub mod submit;


pub use builder::FlowBuilder;
pub use editor::{BatchOutcome, BatchReport, PlanEditor};

/// Wizard position of an [`AuthoringFlow`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthoringStep {
    /// Assignee, title, description, and the plan period
    #[default]
    BasicInfo,
    /// The milestone list and its input buffer
    Milestones,
}

/// A toast-style message for the hosting surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
    Success(String),
}

impl Notice {
    /// The human-readable text of the notice.
    pub fn message(&self) -> &str {
        match self {
            Self::Info(message) | Self::Error(message) | Self::Success(message) => message,
        }
    }
}

/// Events emitted by an [`AuthoringFlow`] on its channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// A message for the user
    Notice(Notice),
    /// The flow closed itself, after cancel or a finished submission
    Closed,
}

/// What a call to [`AuthoringFlow::submit`] decided.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Blocked(Vec<Violation>),
    /// The backend accepted the composite payload
    Created(Plan),
}

/// Interactive builder for one new development plan.
pub struct AuthoringFlow {
    pub(crate) draft: PlanDraft,
    pub(crate) input: MilestoneInput,
    pub(crate) step: AuthoringStep,
    pub(crate) busy: bool,
    pub(crate) assignees: Vec<Person>,
    pub(crate) assignee_error: Option<String>,
    pub(crate) owner: Person,
    pub(crate) api: Arc<dyn ApiClient>,
    pub(crate) events: mpsc::UnboundedSender<FlowEvent>,
    pub(crate) success_linger: Duration,
}

impl std::fmt::Debug for AuthoringFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthoringFlow")
            .field("draft", &self.draft)
            .field("input", &self.input)
            .field("step", &self.step)
            .field("busy", &self.busy)
            .field("assignees", &self.assignees)
            .field("assignee_error", &self.assignee_error)
            .field("owner", &self.owner)
            .field("success_linger", &self.success_linger)
            .finish_non_exhaustive()
    }
}

impl AuthoringFlow {
    /// Creates a new flow in its initial empty state.
    pub(crate) fn new(
        owner: Person,
        api: Arc<dyn ApiClient>,
        events: mpsc::UnboundedSender<FlowEvent>,
        success_linger: Duration,
    ) -> Self {
        Self {
            draft: PlanDraft::default(),
            input: MilestoneInput::default(),
            step: AuthoringStep::default(),
            busy: false,
            assignees: Vec::new(),
            assignee_error: None,
            owner,
            api,
            events,
            success_linger,
        }
    }

    /// Current wizard position.
    pub fn step(&self) -> AuthoringStep {
        self.step
    }

    /// The draft under construction.
    pub fn draft(&self) -> &PlanDraft {
        &self.draft
    }

    /// The milestone input buffer.
    pub fn milestone_input(&self) -> &MilestoneInput {
        &self.input
    }

    /// Whether a submission is in flight. Mutation and navigation are
    /// refused while this is true.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The manager this flow authors plans for.
    pub fn owner(&self) -> &Person {
        &self.owner
    }

    /// People the owner may assign a plan to, as of the last [`open`]
    /// fetch.
    ///
    /// [`open`]: Self::open
    pub fn assignees(&self) -> &[Person] {
        &self.assignees
    }

    /// The inline error of a failed assignee fetch, if any.
    pub fn assignee_error(&self) -> Option<&str> {
        self.assignee_error.as_deref()
    }

    /// Send a notice; a dropped receiver just means no host is listening.
    pub(crate) fn notify(&self, notice: Notice) {
        let _ = self.events.send(FlowEvent::Notice(notice));
    }

    /// Return to the initial empty state. The assignee list is kept; it is
    /// still valid for the next plan.
    pub(crate) fn reset(&mut self) {
        self.draft.reset();
        self.input = MilestoneInput::default();
        self.step = AuthoringStep::BasicInfo;
        self.busy = false;
        self.assignee_error = None;
    }
}
