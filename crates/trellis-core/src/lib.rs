//! Core library for the Trellis development-plan application.
//!
//! This crate provides the client-side logic for authoring and maintaining
//! individual development plans: field validation, the two-step authoring
//! flow, milestone editing, and the backend API client. All persistence
//! lives server-side; this crate talks to it through the [`api::ApiClient`]
//! trait so hosts and tests choose the transport.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and specialized
//!   formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! This separation allows the same data to be formatted differently depending
//! on context (lists vs. individual items, creation results vs. updates, etc.)
//! while maintaining consistency across all output.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use jiff::civil::date;
//! use trellis_core::api::MockApiClient;
//! use trellis_core::flow::{FlowBuilder, SubmitOutcome};
//! use trellis_core::models::{Person, Role};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let owner = Person {
//!     id: "7".to_string(),
//!     name: "Dana Mercer".to_string(),
//!     email: "dana@example.com".to_string(),
//!     role: Role::Manager,
//!     department: "Engineering".to_string(),
//! };
//!
//! // Build an authoring flow backed by the in-memory client
//! let (mut flow, _events) = FlowBuilder::new()
//!     .with_owner(owner)
//!     .with_api(Arc::new(MockApiClient::new()))
//!     .build()?;
//!
//! // Fill in the plan header, then move on to milestones
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
//! // Submit: one composite request creates the plan and its milestones
//! match flow.submit().await? {
//!     SubmitOutcome::Created(plan) => println!("Created plan: {plan}"),
//!     SubmitOutcome::Blocked(violations) => eprintln!("{} problems", violations.len()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod flow;
pub mod models;
pub mod params;
pub mod validate;

// Re-export commonly used types
pub use api::{ApiClient, HttpApiClient, MockApiClient};
pub use config::Config;
pub use display::{
    AssigneeList, BatchResult, CreateResult, OperationStatus, PlanSummaries, UpdateResult,
    ViolationList,
};
pub use error::{Result, TrellisError};
pub use flow::{
    AuthoringFlow, AuthoringStep, BatchOutcome, BatchReport, FlowBuilder, FlowEvent, Notice,
    PlanEditor, SubmitOutcome,
};
pub use models::{
    Milestone, MilestoneChange, MilestoneStatus, MilestoneUpdate, Person, Plan, PlanFilter,
    PlanStatus, PlanSummary, Role,
};
pub use params::{CompleteMilestone, CreatePlan, Id, ListPlans, UpdateMilestone};
pub use validate::Violation;
