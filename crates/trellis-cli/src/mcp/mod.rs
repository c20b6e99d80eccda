//! MCP server implementation for Trellis
//!
//! This module implements the Model Context Protocol server for Trellis,
//! providing a standardized interface for AI models to author and track
//! development plans on behalf of a manager.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};
use trellis_core::api::ApiClient;

pub mod errors;
pub mod handlers;
pub mod prompts;

// Re-export parameter types and result type from handlers for external use
pub use handlers::{CompleteMilestone, CreatePlan, Id, ListPlans, McpResult, UpdateMilestone};

/// MCP server for Trellis
#[derive(Clone)]
pub struct TrellisMcpServer {
    api: Arc<dyn ApiClient>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TrellisMcpServer {
    /// Create a new Trellis MCP server
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self {
            api,
            tool_router: Self::tool_router(),
        }
    }

    // Tool methods that delegate to handlers::McpHandlers methods
    #[tool(
        name = "create_plan",
        description = "Create a development plan for a team member. Requires assignee_id, title (at least 5 characters), description (at least 10 characters), start_date and end_date as YYYY-MM-DD at least one calendar month apart, and at least one milestone as a 'title|description|due-date' spec with the due date inside the plan period. The draft is validated before anything is sent; validation problems name every field to fix."
    )]
    async fn create_plan(&self, params: Parameters<CreatePlan>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.api.clone());
        handlers.create_plan(params).await
    }

    #[tool(
        name = "list_plans",
        description = "List development plans. Optionally narrow by assignee ID, by status ('active' or 'completed'), or set mine=true for only the plans you authored. Returns a formatted list with IDs, assignees, periods, and milestone progress."
    )]
    async fn list_plans(&self, params: Parameters<ListPlans>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.api.clone());
        handlers.list_plans(params).await
    }

    #[tool(
        name = "show_plan",
        description = "Display complete details of a specific plan including its period, status, description, and every milestone with its due date and completion state. Use the plan ID to retrieve."
    )]
    async fn show_plan(&self, params: Parameters<Id>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.api.clone());
        handlers.show_plan(params).await
    }

    #[tool(
        name = "update_milestone",
        description = "Modify an existing milestone. Requires id and plan_id. Can update: title, description, due_date (YYYY-MM-DD, must fall within the plan period), and status ('pending' or 'completed'). Absent fields keep their current value. A completed milestone can never be moved back to pending."
    )]
    async fn update_milestone(&self, params: Parameters<UpdateMilestone>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.api.clone());
        handlers.update_milestone(params).await
    }

    #[tool(
        name = "complete_milestone",
        description = "Mark a milestone as completed. Requires id and plan_id. Completion is one-way; completing an already completed milestone is harmless."
    )]
    async fn complete_milestone(&self, params: Parameters<CompleteMilestone>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.api.clone());
        handlers.complete_milestone(params).await
    }

    #[tool(
        name = "list_assignees",
        description = "List the people the acting user may author development plans for. Use the returned IDs as assignee_id in create_plan."
    )]
    async fn list_assignees(&self) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.api.clone());
        handlers.list_assignees().await
    }

    #[tool(
        name = "whoami",
        description = "Show the acting user the backend resolves from the configured credentials. Plans you create are owned by this identity."
    )]
    async fn whoami(&self) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.api.clone());
        handlers.whoami().await
    }

    /// List all available prompts
    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        let handlers = handlers::McpHandlers::new(self.api.clone());
        handlers.list_prompts(request, context).await
    }

    /// Get a specific prompt by name and apply arguments
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        let handlers = handlers::McpHandlers::new(self.api.clone());
        handlers.get_prompt(request, context).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for TrellisMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "trellis".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"Trellis authors and tracks Individual Development Plans: growth plans a manager writes for a team member, made of dated milestones.

## Core Concepts
- **Plans**: A development goal for one person with a title, description, and a period (start and end date at least one calendar month apart)
- **Milestones**: Dated checkpoints inside the plan period, each pending or completed. Completion is one-way: a completed milestone never goes back to pending
- **Identity**: You act as the manager the backend resolves from the configured credentials; you can only author plans for people in your reporting line

## Workflow Examples

### Authoring a Plan
1. Call `whoami` to confirm who you are acting as
2. Call `list_assignees` to find the team member's ID
3. Call `create_plan` with the assignee, title, description, period, and milestones as 'title|description|due-date' specs
4. The draft is validated first; fix every reported field and retry

### Tracking Progress
1. Use `list_plans` to see plans, narrowed by assignee, status, or mine=true
2. Use `show_plan` to see a plan's milestones and their states
3. Record finished work with `complete_milestone`
4. Reschedule or reword pending milestones with `update_milestone`

## Validation Rules
- Title at least 5 characters; description at least 10
- Plan period at least one calendar month
- At least one milestone; each title at least 3 characters, each description at least 5
- Every milestone due date inside the plan period
- Completed milestones never return to pending

## Tool Categories
- **Plan Management**: create_plan, list_plans, show_plan
- **Milestone Management**: update_milestone, complete_milestone
- **Identity**: list_assignees, whoami"#.to_string()),
        }
    }

    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        self.list_prompts(request, context).await
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.get_prompt(request, context).await
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: TrellisMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Trellis MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
