//! Ultrahuman MCP Server Implementation
//!
//! Exposes the metrics tools, the status tool and the API info resource over MCP.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    AnnotateAble, CallToolResult, Content, Implementation, ListResourcesResult,
    PaginatedRequestParam, ProtocolVersion, RawResource, ReadResourceRequestParam,
    ReadResourceResult, Resource, ResourceContents, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler};
use serde::Deserialize;

use crate::api::{ApiResult, UltrahumanClient};
use crate::config::Config;
use crate::models::{Envelope, Payload};
use crate::tools::api_info::{API_INFO, API_INFO_NAME, API_INFO_URI};
use crate::tools::status::StatusTracker;
use crate::tools::{MetricsTools, ToolError, ToolResult};

/// Ultrahuman MCP Service
#[derive(Clone)]
pub struct UltrahumanService {
    status_tracker: Arc<StatusTracker>,
    metrics: Arc<MetricsTools<UltrahumanClient>>,
    tool_router: ToolRouter<UltrahumanService>,
}

impl UltrahumanService {
    pub fn new(config: &Config) -> ApiResult<Self> {
        Ok(Self {
            status_tracker: Arc::new(StatusTracker::new(config)),
            metrics: Arc::new(MetricsTools::from_config(config)?),
            tool_router: Self::tool_router(),
        })
    }

    /// Descriptor for the static API info resource
    fn api_info_resource() -> Resource {
        let mut raw = RawResource::new(API_INFO_URI, API_INFO_NAME);
        raw.description = Some("Information about the Ultrahuman Partnership API".to_string());
        raw.mime_type = Some("text/plain".to_string());
        raw.no_annotation()
    }

    fn read_api_info(uri: &str) -> Result<ReadResourceResult, McpError> {
        if uri != API_INFO_URI {
            return Err(McpError::resource_not_found(
                format!("Unknown resource: {}", uri),
                Some(serde_json::json!({ "uri": uri })),
            ));
        }
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(API_INFO, uri)],
        })
    }
}

/// Render a tool outcome: envelopes become JSON text, raised faults become MCP errors
fn envelope_result<T: Payload>(result: ToolResult<Envelope<T>>) -> Result<CallToolResult, McpError> {
    let envelope = result.map_err(|e| match &e {
        ToolError::Validation(_) => McpError::invalid_params(e.to_string(), None),
        ToolError::Configuration(_) => McpError::internal_error(e.to_string(), None),
    })?;
    if let Some(failure) = envelope.failure_ref() {
        tracing::info!(kind = ?failure.kind, date = %failure.date, "Tool call recovered a failure");
    }
    let json = serde_json::to_string_pretty(&envelope)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DateParams {
    /// Date in YYYY-MM-DD format (e.g., "2024-01-15")
    pub date: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UserDateParams {
    /// User's email address (e.g., user@example.com)
    pub email: String,
    /// Date in YYYY-MM-DD format (e.g., "2024-01-15")
    pub date: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl UltrahumanService {
    // --- Status ---

    #[tool(description = "Get the current status of the Ultrahuman MCP server including build info, upstream configuration, and process information")]
    async fn ultrahuman_status(&self) -> Result<CallToolResult, McpError> {
        let status = self.status_tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Metrics ---

    #[tool(description = "Get comprehensive health metrics for the default user (from ULTRAHUMAN_DEFAULT_EMAIL) on a specific date")]
    async fn get_default_user_metrics(&self, Parameters(p): Parameters<DateParams>) -> Result<CallToolResult, McpError> {
        envelope_result(self.metrics.get_default_user_metrics(&p.date).await)
    }

    #[tool(description = "Get comprehensive health metrics for a user and date: sleep, movement, heart rate, HRV, temperature, steps, glucose, metabolic score, glucose variability, average glucose, HbA1c, time in target, recovery index, movement index, VO2 max")]
    async fn get_user_metrics(&self, Parameters(p): Parameters<UserDateParams>) -> Result<CallToolResult, McpError> {
        envelope_result(self.metrics.get_user_metrics(&p.email, &p.date).await)
    }

    #[tool(description = "Get sleep data for a user on a specific date")]
    async fn get_sleep_data(&self, Parameters(p): Parameters<UserDateParams>) -> Result<CallToolResult, McpError> {
        envelope_result(self.metrics.get_sleep_data(&p.email, &p.date).await)
    }

    #[tool(description = "Get movement and activity data for a user on a specific date: steps, movement index, movement data")]
    async fn get_movement_data(&self, Parameters(p): Parameters<UserDateParams>) -> Result<CallToolResult, McpError> {
        envelope_result(self.metrics.get_movement_data(&p.email, &p.date).await)
    }

    #[tool(description = "Get glucose metrics for a user on a specific date: glucose, glucose variability, average glucose, HbA1c, time in target, metabolic score")]
    async fn get_glucose_metrics(&self, Parameters(p): Parameters<UserDateParams>) -> Result<CallToolResult, McpError> {
        envelope_result(self.metrics.get_glucose_metrics(&p.email, &p.date).await)
    }

    #[tool(description = "Get heart metrics for a user on a specific date: heart rate, HRV, recovery index, VO2 max")]
    async fn get_heart_metrics(&self, Parameters(p): Parameters<UserDateParams>) -> Result<CallToolResult, McpError> {
        envelope_result(self.metrics.get_heart_metrics(&p.email, &p.date).await)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for UltrahumanService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: crate::build_info::NAME.into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Ultrahuman".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Ultrahuman health metrics from the Partnership API. \
                 Read ultrahuman://api-info for the list of metrics. \
                 All metrics: get_user_metrics(email, date), or get_default_user_metrics(date) for the configured user. \
                 Views: get_sleep_data, get_movement_data, get_glucose_metrics, get_heart_metrics. \
                 Dates are YYYY-MM-DD. Check the success field of every result before using the data. \
                 Server health: ultrahuman_status."
                    .into(),
            ),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(vec![Self::api_info_resource()]))
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        Self::read_api_info(&uri)
    }
}
