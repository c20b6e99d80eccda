//! Command-line interface definitions and command handlers
//!
//! This module defines the subcommand surface using clap's derive API and
//! the [`Cli`] handler that drives the core flows for each command. It
//! implements the CLI side of the parameter wrapper pattern:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Authoring Flow / Editor
//! ```
//!
//! Each argument struct carries the clap-specific attributes (short flags,
//! help text, value names) and converts into the framework-free parameter
//! type from `trellis_core::params` via `From`. Business validation stays
//! in the core: the handlers parse parameters, check the draft rules
//! before any network traffic, and render the outcome through the display
//! wrappers.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use tokio::sync::mpsc::UnboundedReceiver;
use trellis_core::api::ApiClient;
use trellis_core::display::{
    AssigneeList, BatchResult, CreateResult, OperationStatus, PlanSummaries, UpdateResult,
    ViolationList,
};
use trellis_core::flow::{
    BatchOutcome, BatchReport, FlowBuilder, FlowEvent, PlanEditor, SubmitOutcome,
};
use trellis_core::models::{
    MilestoneChange, MilestoneDraft, MilestoneUpdate, PlanDraft, PlanFilter, PlanStatus,
    PlanSummary,
};
use trellis_core::params::*;
use trellis_core::validate;

use crate::renderer::TerminalRenderer;

/// Command handler that drives the core flows for each CLI command.
///
/// Holds the API client and the renderer; every handler method consumes
/// parsed parameters, talks to the backend, and renders markdown through
/// the renderer. Errors bubble up as `anyhow` errors so `main` exits
/// non-zero with a readable message.
pub struct Cli {
    api: Arc<dyn ApiClient>,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new command handler.
    pub fn new(api: Arc<dyn ApiClient>, renderer: TerminalRenderer) -> Self {
        Self { api, renderer }
    }

    /// Dispatch a `plan` subcommand.
    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => self.create_plan(args.into()).await,
            PlanCommands::List(args) => self.list_plans(&args.into()).await,
            PlanCommands::Show(args) => self.show_plan(&args.into()).await,
        }
    }

    /// Dispatch a `milestone` subcommand.
    pub async fn handle_milestone_command(&self, command: MilestoneCommands) -> Result<()> {
        match command {
            MilestoneCommands::Update(args) => self.update_milestone(args.into()).await,
            MilestoneCommands::Complete(args) => self.complete_milestone(&args.into()).await,
        }
    }

    /// Author a development plan in one shot.
    ///
    /// The authoring flow is driven non-interactively: basic information,
    /// then every milestone spec, then submission. The draft rules run
    /// locally before the acting user is even resolved, so invalid input
    /// never costs a network round trip.
    async fn create_plan(&self, params: CreatePlan) -> Result<()> {
        let (start_date, end_date, specs) = params.validate()?;

        let draft = PlanDraft {
            assignee_id: params.assignee_id.clone(),
            title: params.title.clone(),
            description: params.description.clone(),
            start_date: Some(start_date),
            end_date: Some(end_date),
            milestones: specs
                .iter()
                .map(|spec| {
                    MilestoneDraft::new(spec.title.clone(), spec.description.clone(), spec.due_date)
                })
                .collect(),
        };
        let violations = validate::validate_complete(&draft);
        if !violations.is_empty() {
            self.renderer.render(&ViolationList(violations).to_string())?;
            anyhow::bail!("Plan validation failed");
        }

        let owner = self
            .api
            .resolve_current_user()
            .await
            .context("Failed to resolve the acting user")?;
        let (mut flow, mut events) = FlowBuilder::new()
            .with_owner(owner)
            .with_api(Arc::clone(&self.api))
            .with_success_linger(Duration::ZERO)
            .build()?;

        flow.set_assignee(params.assignee_id);
        flow.set_title(params.title);
        flow.set_description(params.description);
        flow.set_start_date(start_date);
        flow.set_end_date(end_date);
        if !flow.advance() {
            self.render_notices(&mut events)?;
            anyhow::bail!("The plan draft is incomplete");
        }
        for spec in specs {
            flow.set_milestone_title(spec.title);
            flow.set_milestone_description(spec.description);
            flow.set_milestone_due_date(spec.due_date);
            if !flow.add_milestone() {
                self.render_notices(&mut events)?;
                anyhow::bail!("A milestone entry is incomplete");
            }
        }

        match flow.submit().await {
            Ok(SubmitOutcome::Created(plan)) => {
                self.render_notices(&mut events)?;
                self.renderer.render(&CreateResult::new(plan).to_string())
            }
            Ok(SubmitOutcome::Blocked(violations)) => {
                self.renderer.render(&ViolationList(violations).to_string())?;
                anyhow::bail!("Plan validation failed")
            }
            Err(error) => {
                self.render_notices(&mut events)?;
                Err(error.into())
            }
        }
    }

    /// List plans, optionally narrowed by assignee, status, or ownership.
    pub async fn list_plans(&self, params: &ListPlans) -> Result<()> {
        let status = params.validate()?;
        let mut filter = PlanFilter::try_from(params)?;
        if params.mine {
            let owner = self
                .api
                .resolve_current_user()
                .await
                .context("Failed to resolve the acting user")?;
            filter.owner = Some(owner.id);
        }

        let plans = self
            .api
            .list_plans(&filter)
            .await
            .context("Failed to list plans")?;
        let summaries = PlanSummaries(plans.iter().map(PlanSummary::from).collect());

        let title = match status {
            Some(PlanStatus::Active) => "Active Plans",
            Some(PlanStatus::Completed) => "Completed Plans",
            None => "Development Plans",
        };
        self.renderer.render(&format!("# {title}\n\n{summaries}"))
    }

    /// Show one plan with all of its milestones.
    async fn show_plan(&self, params: &Id) -> Result<()> {
        let plan = self
            .api
            .fetch_plan(&params.id)
            .await
            .context("Failed to fetch plan")?;
        self.renderer.render(&plan.to_string())
    }

    /// Apply a partial update to one milestone through the plan editor.
    async fn update_milestone(&self, params: UpdateMilestone) -> Result<()> {
        let id = params.id.clone();
        let plan_id = params.plan_id.clone();
        let fields = MilestoneUpdate::try_from(params)?;
        let changes = describe_changes(&fields);

        let plan = self
            .api
            .fetch_plan(&plan_id)
            .await
            .context("Failed to fetch plan")?;
        let mut editor = PlanEditor::new(plan, Arc::clone(&self.api));

        match editor
            .update_milestones(vec![MilestoneChange::new(id.clone(), fields)])
            .await?
        {
            BatchOutcome::Blocked(violations) => {
                self.renderer.render(&ViolationList(violations).to_string())?;
                anyhow::bail!("Milestone validation failed")
            }
            BatchOutcome::Settled(report) => {
                if !report.failed.is_empty() {
                    self.renderer.render(&BatchResult(&report).to_string())?;
                    anyhow::bail!("Milestone update failed")
                }
                let BatchReport { updated, .. } = report;
                let milestone = updated
                    .into_iter()
                    .next()
                    .with_context(|| format!("No updated milestone returned for {id}"))?;
                self.renderer
                    .render(&UpdateResult::with_changes(milestone, changes).to_string())
            }
        }
    }

    /// Mark one milestone completed through the plan editor.
    async fn complete_milestone(&self, params: &CompleteMilestone) -> Result<()> {
        let plan = self
            .api
            .fetch_plan(&params.plan_id)
            .await
            .context("Failed to fetch plan")?;
        let mut editor = PlanEditor::new(plan, Arc::clone(&self.api));

        let milestone = editor.complete_milestone(&params.id).await?;
        let changes = vec!["Updated status to 'completed'".to_string()];
        self.renderer
            .render(&UpdateResult::with_changes(milestone, changes).to_string())
    }

    /// List the people the acting user may author plans for.
    pub async fn list_assignees(&self) -> Result<()> {
        let owner = self
            .api
            .resolve_current_user()
            .await
            .context("Failed to resolve the acting user")?;
        let people = self
            .api
            .list_eligible_assignees(&owner.id)
            .await
            .context("Failed to list eligible assignees")?;
        self.renderer
            .render(&format!("# Eligible Assignees\n\n{}", AssigneeList(people)))
    }

    /// Show who the backend resolves the configured credentials to.
    pub async fn whoami(&self) -> Result<()> {
        let person = self
            .api
            .resolve_current_user()
            .await
            .context("Failed to resolve the acting user")?;
        self.renderer.render(&person.to_string())
    }

    /// Drain pending flow events and print each notice as a status line.
    fn render_notices(&self, events: &mut UnboundedReceiver<FlowEvent>) -> Result<()> {
        while let Ok(event) = events.try_recv() {
            if let FlowEvent::Notice(notice) = event {
                self.renderer
                    .render(&OperationStatus::from(&notice).to_string())?;
            }
        }
        Ok(())
    }
}

/// Human-readable change list for the update confirmation output.
fn describe_changes(fields: &MilestoneUpdate) -> Vec<String> {
    let mut changes = Vec::new();
    if let Some(status) = &fields.status {
        changes.push(format!("Updated status to '{status}'"));
    }
    if fields.title.is_some() {
        changes.push("Updated title".to_string());
    }
    if fields.description.is_some() {
        changes.push("Updated description".to_string());
    }
    if fields.due_date.is_some() {
        changes.push("Updated due date".to_string());
    }
    changes
}

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================
//
// These structures implement the CLI side of the parameter wrapper pattern.
// Each wrapper:
// 1. Defines CLI-specific argument parsing with clap derives
// 2. Converts into the matching core parameter type via `From`
// 3. Isolates clap framework concerns from core domain logic

/// Create a new development plan
///
/// The whole plan is described on the command line: basic information as
/// flags and each milestone as one repeatable `--milestone` spec. The
/// draft rules (field lengths, one-month minimum period, due dates inside
/// the period) are checked before anything is sent to the backend.
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Title of the plan
    pub title: String,
    /// ID of the person the plan is for
    #[arg(short, long, help = "ID of the person the plan is for")]
    pub assignee: String,
    /// Description of what the plan should achieve
    #[arg(short, long, help = "Description of what the plan should achieve")]
    pub description: String,
    /// First day of the plan period
    #[arg(long, value_name = "YYYY-MM-DD", help = "First day of the plan period")]
    pub start_date: String,
    /// Last day of the plan period
    #[arg(
        long,
        value_name = "YYYY-MM-DD",
        help = "Last day of the plan period, at least one month after the start"
    )]
    pub end_date: String,
    /// Milestones as compact specs; repeat the flag for each milestone
    #[arg(
        short,
        long = "milestone",
        value_name = "TITLE|DESCRIPTION|DUE-DATE",
        help = "Milestone as 'title|description|due-date'; repeat for several"
    )]
    pub milestones: Vec<String>,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan {
            assignee_id: val.assignee,
            title: val.title,
            description: val.description,
            start_date: val.start_date,
            end_date: val.end_date,
            milestones: val.milestones,
        }
    }
}

/// List development plans
///
/// With no flags this lists every plan the backend shows you. Narrow the
/// listing by assignee, by status, or to the plans you authored yourself
/// with --mine.
#[derive(Args)]
pub struct ListPlansArgs {
    /// Only plans assigned to this person
    #[arg(long, help = "Only plans assigned to the person with this ID")]
    pub assignee: Option<String>,
    /// Only plans with this status
    #[arg(short, long, help = "Only plans with this status (active, completed)")]
    pub status: Option<PlanStatusArg>,
    /// Only plans you authored
    #[arg(long, help = "Only plans authored by you")]
    pub mine: bool,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(val: ListPlansArgs) -> Self {
        ListPlans {
            assignee: val.assignee,
            status: val.status.map(|s| s.to_string()),
            mine: val.mine,
        }
    }
}

/// Show details of a specific plan
///
/// Displays the full plan: its period, status, description, and every
/// milestone with its due date and completion state.
#[derive(Args)]
pub struct ShowPlanArgs {
    /// ID of the plan to display
    #[arg(help = "Unique identifier of the plan to show details for")]
    pub id: String,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new development plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List development plans
    #[command(aliases = ["l", "ls"])]
    List(ListPlansArgs),
    /// Show details of a specific plan
    #[command(alias = "s")]
    Show(ShowPlanArgs),
}

/// Update a milestone's content or status
///
/// Applies a partial update: absent flags keep their current value. The
/// staged change is validated against the plan period before anything is
/// sent, and a completed milestone can never be moved back to pending.
#[derive(Args)]
pub struct UpdateMilestoneArgs {
    /// ID of the milestone to update
    #[arg(help = "Unique identifier of the milestone to update")]
    pub id: String,
    /// ID of the plan the milestone belongs to
    #[arg(short, long, help = "ID of the plan the milestone belongs to")]
    pub plan: String,
    #[arg(short, long, help = "New status for the milestone (pending, completed)")]
    pub status: Option<MilestoneStatusArg>,
    #[arg(short, long, help = "Updated title for the milestone")]
    pub title: Option<String>,
    #[arg(short, long, help = "Updated description of the milestone")]
    pub description: Option<String>,
    #[arg(
        long,
        value_name = "YYYY-MM-DD",
        help = "Updated due date; must fall within the plan period"
    )]
    pub due_date: Option<String>,
}

impl From<UpdateMilestoneArgs> for UpdateMilestone {
    fn from(val: UpdateMilestoneArgs) -> Self {
        UpdateMilestone {
            id: val.id,
            plan_id: val.plan,
            title: val.title,
            description: val.description,
            due_date: val.due_date,
            status: val.status.map(|s| s.to_string()),
        }
    }
}

/// Mark a milestone as completed
///
/// Completion is one-way; a completed milestone stays completed. Running
/// this on an already completed milestone is harmless.
#[derive(Args)]
pub struct CompleteMilestoneArgs {
    /// ID of the milestone to complete
    #[arg(help = "Unique identifier of the milestone to mark completed")]
    pub id: String,
    /// ID of the plan the milestone belongs to
    #[arg(short, long, help = "ID of the plan the milestone belongs to")]
    pub plan: String,
}

impl From<CompleteMilestoneArgs> for CompleteMilestone {
    fn from(val: CompleteMilestoneArgs) -> Self {
        CompleteMilestone {
            id: val.id,
            plan_id: val.plan,
        }
    }
}

#[derive(Subcommand)]
pub enum MilestoneCommands {
    /// Update a milestone's content or status
    #[command(alias = "u")]
    Update(UpdateMilestoneArgs),
    /// Mark a milestone as completed
    #[command(alias = "c")]
    Complete(CompleteMilestoneArgs),
}

/// Command-line argument representation of plan status values
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum PlanStatusArg {
    /// Plans currently in progress
    Active,
    /// Plans that have been wrapped up
    Completed,
}

impl std::fmt::Display for PlanStatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanStatusArg::Active => write!(f, "active"),
            PlanStatusArg::Completed => write!(f, "completed"),
        }
    }
}

/// Command-line argument representation of milestone status values
///
/// Used with the `--status` flag in milestone update commands. The core
/// layer re-parses the string, so the CLI and MCP surfaces share one
/// source of truth for what the names mean.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum MilestoneStatusArg {
    /// Mark milestone as pending
    Pending,
    /// Mark milestone as completed
    Completed,
}

impl std::fmt::Display for MilestoneStatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MilestoneStatusArg::Pending => write!(f, "pending"),
            MilestoneStatusArg::Completed => write!(f, "completed"),
        }
    }
}
