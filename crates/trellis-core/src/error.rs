//! Error types for the trellis library.

use std::path::PathBuf;

use thiserror::Error;

use crate::validate::Violation;

/// Comprehensive error type for all trellis operations.
#[derive(Error, Debug)]
pub enum TrellisError {
    /// Transport-level failures talking to the backend
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// Non-success responses from the backend
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
    /// Plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: String },
    /// Milestone not found for the given ID
    #[error("Milestone with ID {id} not found")]
    MilestoneNotFound { id: String },
    /// A draft or staged change failed business-rule validation
    #[error("Validation failed: {}", format_violations(.violations))]
    Validation { violations: Vec<Violation> },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Builder for creating network errors with optional context.
pub struct NetworkErrorBuilder {
    message: String,
}

impl NetworkErrorBuilder {
    /// Create a new network error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: reqwest::Error) -> TrellisError {
        TrellisError::Network {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TrellisError {
        TrellisError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TrellisError {
    /// Creates a builder for network errors.
    pub fn network(message: impl Into<String>) -> NetworkErrorBuilder {
        NetworkErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an API error from a response status and server message.
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

/// Specialized extension trait for network-related Results.
pub trait NetworkResultExt<T> {
    /// Map transport errors with a message.
    fn network_context(self, message: &str) -> Result<T>;
}

impl<T> NetworkResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn network_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TrellisError::network(message).with_source(e))
    }
}

/// Result type alias for trellis operations
pub type Result<T> = std::result::Result<T, TrellisError>;
