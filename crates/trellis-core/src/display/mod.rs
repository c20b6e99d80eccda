//! Display formatting functions and result types.
//!
//! This module provides wrapper types for formatting domain objects,
//! collections, and operation results, enabling consistent formatting across
//! different output contexts (terminal, MCP).
//!
//! # Architecture: Display Functions and Wrappers
//!
//! The Display architecture combines direct Display implementations on domain
//! models with newtype wrappers for collections and operation results. This
//! approach provides both idiomatic Rust patterns and context-specific
//! formatting.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │ (Plan, Person)  │───▶│ & Result Types  │───▶│    Output       │
//! │                 │    │                 │    │ (Terminal/MCP)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (PlanSummaries, AssigneeList,
//!   ViolationList)
//! - [`results`]: Operation result types (CreateResult, UpdateResult,
//!   BatchResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date and time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! All formatters produce markdown for rich terminal display.
//!
//! ## Usage Examples
//!
//! ```rust
//! use trellis_core::display::OperationStatus;
//!
//! // Success messages
//! let success = OperationStatus::success("Development plan created".to_string());
//! println!("{}", success);
//!
//! // Error messages
//! let error = OperationStatus::failure("Could not create the plan".to_string());
//! println!("{}", error);
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{AssigneeList, PlanSummaries, ViolationList};
pub use datetime::{DateRange, LocalDateTime};
pub use results::{BatchResult, CreateResult, UpdateResult};
pub use status::OperationStatus;
