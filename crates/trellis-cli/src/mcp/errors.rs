//! Error handling utilities for MCP server

use rmcp::ErrorData;
use trellis_core::TrellisError;

/// Helper to convert core errors to MCP errors
pub fn to_mcp_error(message: &str, error: &TrellisError) -> ErrorData {
    ErrorData::internal_error(format!("{message}: {error}"), None)
}
