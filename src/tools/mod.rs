//! Ultrahuman MCP tools module
//!
//! Tool implementations behind the MCP server.

pub mod api_info;
pub mod metrics;
pub mod status;
pub mod validation;

use thiserror::Error;

pub use metrics::MetricsTools;

/// Faults raised by a tool instead of being reported in its envelope
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{0}")]
    Validation(String),
}

/// Result type for tool operations
pub type ToolResult<T> = Result<T, ToolError>;
