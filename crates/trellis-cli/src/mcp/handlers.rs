//! MCP tool handlers implementation

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        PaginatedRequestParam, Prompt, PromptArgument, PromptMessage, PromptMessageContent,
        PromptMessageRole,
    },
    service::RequestContext,
    ErrorData, RoleServer,
};
use schemars::JsonSchema;
use serde::Deserialize;
use trellis_core::api::ApiClient;
use trellis_core::display::{
    AssigneeList, BatchResult, CreateResult, PlanSummaries, UpdateResult, ViolationList,
};
use trellis_core::flow::{BatchOutcome, FlowBuilder, PlanEditor, SubmitOutcome};
use trellis_core::models::{
    MilestoneChange, MilestoneDraft, MilestoneUpdate, PlanDraft, PlanFilter, PlanStatus,
    PlanSummary,
};
use trellis_core::{params as core, validate};

use super::errors::to_mcp_error;
use super::prompts::get_prompt_templates;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// This generic wrapper struct implements the parameter wrapper pattern by:
// 1. Wrapping any core parameter type in a transparent serde container
// 2. Adding MCP-specific derives (Deserialize, JsonSchema) for JSON handling
// 3. Keeping the core types clean of framework dependencies
//
// The #[serde(transparent)] attribute ensures that
// serialization/deserialization passes through directly to the wrapped core
// type, maintaining API compatibility while adding the necessary trait
// implementations for MCP protocol handling.

/// Generic MCP wrapper for core parameter types with serde integration
///
/// Provides JSON deserialization and schema generation for any parameter type,
/// eliminating the need for individual wrapper structs while maintaining
/// the same functionality and type safety.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type Id = McpParams<core::Id>;
pub type CreatePlan = McpParams<core::CreatePlan>;
pub type ListPlans = McpParams<core::ListPlans>;
pub type UpdateMilestone = McpParams<core::UpdateMilestone>;
pub type CompleteMilestone = McpParams<core::CompleteMilestone>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    api: Arc<dyn ApiClient>,
}

impl McpHandlers {
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self { api }
    }

    pub async fn create_plan(&self, Parameters(params): Parameters<CreatePlan>) -> McpResult {
        debug!("create_plan: {:?}", params);
        let inner = params.as_ref();

        let (start_date, end_date, specs) = inner
            .validate()
            .map_err(|e| ErrorData::invalid_params(e.to_string(), None))?;

        // Draft rules run locally before the backend is touched
        let draft = PlanDraft {
            assignee_id: inner.assignee_id.clone(),
            title: inner.title.clone(),
            description: inner.description.clone(),
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
            return Err(ErrorData::invalid_params(
                ViolationList(violations).to_string(),
                None,
            ));
        }

        let owner = self
            .api
            .resolve_current_user()
            .await
            .map_err(|e| to_mcp_error("Failed to resolve the acting user", &e))?;
        let (mut flow, _events) = FlowBuilder::new()
            .with_owner(owner)
            .with_api(Arc::clone(&self.api))
            .with_success_linger(Duration::ZERO)
            .build()
            .map_err(|e| to_mcp_error("Failed to start the authoring flow", &e))?;

        flow.set_assignee(inner.assignee_id.clone());
        flow.set_title(inner.title.clone());
        flow.set_description(inner.description.clone());
        flow.set_start_date(start_date);
        flow.set_end_date(end_date);
        if !flow.advance() {
            return Err(ErrorData::invalid_params(
                "The plan draft is incomplete".to_string(),
                None,
            ));
        }
        for spec in specs {
            flow.set_milestone_title(spec.title);
            flow.set_milestone_description(spec.description);
            flow.set_milestone_due_date(spec.due_date);
            if !flow.add_milestone() {
                return Err(ErrorData::invalid_params(
                    "A milestone entry is incomplete".to_string(),
                    None,
                ));
            }
        }

        match flow.submit().await {
            Ok(SubmitOutcome::Created(plan)) => Ok(CallToolResult::success(vec![Content::text(
                CreateResult::new(plan).to_string(),
            )])),
            Ok(SubmitOutcome::Blocked(violations)) => Err(ErrorData::invalid_params(
                ViolationList(violations).to_string(),
                None,
            )),
            Err(e) => Err(to_mcp_error("Failed to create plan", &e)),
        }
    }

    pub async fn list_plans(&self, Parameters(params): Parameters<ListPlans>) -> McpResult {
        debug!("list_plans: {:?}", params);
        let inner = params.as_ref();

        let status = inner
            .validate()
            .map_err(|e| ErrorData::invalid_params(e.to_string(), None))?;
        let mut filter = PlanFilter::try_from(inner)
            .map_err(|e| ErrorData::invalid_params(e.to_string(), None))?;
        if inner.mine {
            let owner = self
                .api
                .resolve_current_user()
                .await
                .map_err(|e| to_mcp_error("Failed to resolve the acting user", &e))?;
            filter.owner = Some(owner.id);
        }

        let plans = self
            .api
            .list_plans(&filter)
            .await
            .map_err(|e| to_mcp_error("Failed to list plans", &e))?;
        let summaries = PlanSummaries(plans.iter().map(PlanSummary::from).collect());

        let title = match status {
            Some(PlanStatus::Active) => "Active Plans",
            Some(PlanStatus::Completed) => "Completed Plans",
            None => "Development Plans",
        };
        let result = format!("# {title}\n\n{summaries}");
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    pub async fn show_plan(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_plan: {:?}", params);

        let plan = self
            .api
            .fetch_plan(&params.as_ref().id)
            .await
            .map_err(|e| to_mcp_error("Failed to fetch plan", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            plan.to_string(),
        )]))
    }

    pub async fn update_milestone(
        &self,
        Parameters(params): Parameters<UpdateMilestone>,
    ) -> McpResult {
        debug!("update_milestone: {:?}", params);
        let inner = params.as_ref();

        let fields = MilestoneUpdate::try_from(inner.clone())
            .map_err(|e| ErrorData::invalid_params(e.to_string(), None))?;

        let plan = self
            .api
            .fetch_plan(&inner.plan_id)
            .await
            .map_err(|e| to_mcp_error("Failed to fetch plan", &e))?;
        let mut editor = PlanEditor::new(plan, Arc::clone(&self.api));

        match editor
            .update_milestones(vec![MilestoneChange::new(inner.id.clone(), fields)])
            .await
        {
            Ok(BatchOutcome::Blocked(violations)) => Err(ErrorData::invalid_params(
                ViolationList(violations).to_string(),
                None,
            )),
            Ok(BatchOutcome::Settled(report)) => {
                if !report.failed.is_empty() {
                    return Err(ErrorData::internal_error(
                        BatchResult(&report).to_string(),
                        None,
                    ));
                }
                let milestone = report.updated.into_iter().next().ok_or_else(|| {
                    ErrorData::internal_error(
                        format!("No updated milestone returned for {}", inner.id),
                        None,
                    )
                })?;

                // Build update messages based on what was provided
                let mut messages = Vec::new();
                if let Some(status) = &inner.status {
                    messages.push(format!("Updated status to '{status}'"));
                }
                if inner.title.is_some() {
                    messages.push("Updated title".to_string());
                }
                if inner.description.is_some() {
                    messages.push("Updated description".to_string());
                }
                if inner.due_date.is_some() {
                    messages.push("Updated due date".to_string());
                }

                Ok(CallToolResult::success(vec![Content::text(
                    UpdateResult::with_changes(milestone, messages).to_string(),
                )]))
            }
            Err(e) => Err(to_mcp_error("Failed to update milestone", &e)),
        }
    }

    pub async fn complete_milestone(
        &self,
        Parameters(params): Parameters<CompleteMilestone>,
    ) -> McpResult {
        debug!("complete_milestone: {:?}", params);
        let inner = params.as_ref();

        let plan = self
            .api
            .fetch_plan(&inner.plan_id)
            .await
            .map_err(|e| to_mcp_error("Failed to fetch plan", &e))?;
        let mut editor = PlanEditor::new(plan, Arc::clone(&self.api));

        let milestone = editor
            .complete_milestone(&inner.id)
            .await
            .map_err(|e| to_mcp_error("Failed to complete milestone", &e))?;

        let changes = vec!["Updated status to 'completed'".to_string()];
        Ok(CallToolResult::success(vec![Content::text(
            UpdateResult::with_changes(milestone, changes).to_string(),
        )]))
    }

    pub async fn list_assignees(&self) -> McpResult {
        debug!("list_assignees");

        let owner = self
            .api
            .resolve_current_user()
            .await
            .map_err(|e| to_mcp_error("Failed to resolve the acting user", &e))?;
        let people = self
            .api
            .list_eligible_assignees(&owner.id)
            .await
            .map_err(|e| to_mcp_error("Failed to list eligible assignees", &e))?;

        let result = format!("# Eligible Assignees\n\n{}", AssigneeList(people));
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    pub async fn whoami(&self) -> McpResult {
        debug!("whoami");

        let person = self
            .api
            .resolve_current_user()
            .await
            .map_err(|e| to_mcp_error("Failed to resolve the acting user", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            person.to_string(),
        )]))
    }

    /// List all available prompts
    pub async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, ErrorData> {
        debug!("list_prompts");

        let templates = get_prompt_templates();
        let prompts = templates
            .iter()
            .map(|template| {
                Prompt::new(
                    &template.name,
                    Some(&template.description),
                    Some(
                        template
                            .arguments
                            .iter()
                            .map(|arg| PromptArgument {
                                name: arg.name.clone(),
                                title: None,
                                description: Some(arg.description.clone()),
                                required: Some(arg.required),
                            })
                            .collect(),
                    ),
                )
            })
            .collect();

        Ok(ListPromptsResult {
            next_cursor: None,
            prompts,
        })
    }

    /// Get a specific prompt by name and apply arguments
    pub async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, ErrorData> {
        debug!("get_prompt: {}", request.name);

        let templates = get_prompt_templates();
        let template = templates
            .iter()
            .find(|t| t.name == request.name)
            .ok_or_else(|| ErrorData::invalid_params("Prompt not found", None))?;

        let mut prompt_text = template.template.clone();

        // Apply argument substitution if arguments are provided
        if let Some(args) = &request.arguments {
            for arg_def in &template.arguments {
                if let Some(arg_value) = args.get(&arg_def.name) {
                    if let Some(arg_str) = arg_value.as_str() {
                        let placeholder = format!("{{{}}}", arg_def.name);
                        prompt_text = prompt_text.replace(&placeholder, arg_str);
                    } else if arg_def.required {
                        return Err(ErrorData::invalid_params(
                            format!("Argument '{}' must be a string", arg_def.name),
                            None,
                        ));
                    }
                } else if arg_def.required {
                    return Err(ErrorData::invalid_params(
                        format!("Required argument '{}' is missing", arg_def.name),
                        None,
                    ));
                }
            }
        } else {
            // Check if any required arguments are missing
            let required_args: Vec<_> = template
                .arguments
                .iter()
                .filter(|arg| arg.required)
                .map(|arg| arg.name.as_str())
                .collect();
            if !required_args.is_empty() {
                return Err(ErrorData::invalid_params(
                    format!("Required arguments missing: {}", required_args.join(", ")),
                    None,
                ));
            }
        }

        Ok(GetPromptResult {
            description: Some(template.description.clone()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(prompt_text),
            }],
        })
    }
}
