//! Ultrahuman Metrics Tools
//!
//! The six metrics operations exposed over MCP. `get_user_metrics` is the only
//! one that talks to the upstream; the four view tools narrow its result.

use crate::api::{ApiError, ApiResult, MetricsSource, UltrahumanClient};
use crate::config::Config;
use crate::models::{project, Envelope, FailureKind, MetricsView, RawMetrics, ViewKind};

use super::validation::validate_date;
use super::{ToolError, ToolResult};

/// Metrics tool façade over an upstream metrics source
pub struct MetricsTools<S> {
    /// `None` when no auth key is configured
    source: Option<S>,
    default_email: Option<String>,
}

impl MetricsTools<UltrahumanClient> {
    /// Build the façade backed by the real Partnership API client
    pub fn from_config(config: &Config) -> ApiResult<Self> {
        Ok(Self::new(
            UltrahumanClient::from_config(config)?,
            config.default_email.clone(),
        ))
    }
}

impl<S: MetricsSource> MetricsTools<S> {
    pub fn new(source: Option<S>, default_email: Option<String>) -> Self {
        Self {
            source,
            default_email,
        }
    }

    /// Full metrics for the configured default user
    pub async fn get_default_user_metrics(&self, date: &str) -> ToolResult<Envelope<RawMetrics>> {
        match &self.default_email {
            Some(email) => self.get_user_metrics(email, date).await,
            None => {
                tracing::warn!(date, "Default user metrics requested without a default email");
                Ok(Envelope::failure(
                    FailureKind::Configuration,
                    "ULTRAHUMAN_DEFAULT_EMAIL environment variable not set",
                    None,
                    date,
                ))
            }
        }
    }

    /// Full metrics for one user and date.
    ///
    /// Missing credentials and malformed dates are raised; anything that goes
    /// wrong talking to the upstream comes back as a failure envelope.
    pub async fn get_user_metrics(&self, email: &str, date: &str) -> ToolResult<Envelope<RawMetrics>> {
        let source = self.source.as_ref().ok_or_else(|| {
            ToolError::Configuration("ULTRAHUMAN_AUTH_KEY environment variable is required".to_string())
        })?;
        validate_date(date)?;

        tracing::info!(date, "Fetching user metrics");
        let envelope = match source.fetch(email, date).await {
            Ok(metrics) => Envelope::success(email, date, metrics),
            Err(e) => {
                let kind = match e {
                    ApiError::Upstream { .. } => FailureKind::Upstream,
                    ApiError::Transport(_) | ApiError::Client(_) => FailureKind::Transport,
                };
                tracing::warn!(date, error = %e, "Metrics fetch failed");
                Envelope::failure(kind, e.to_string(), Some(email.to_string()), date)
            }
        };
        Ok(envelope)
    }

    pub async fn get_sleep_data(&self, email: &str, date: &str) -> ToolResult<Envelope<MetricsView>> {
        self.get_view(ViewKind::Sleep, email, date).await
    }

    pub async fn get_movement_data(&self, email: &str, date: &str) -> ToolResult<Envelope<MetricsView>> {
        self.get_view(ViewKind::Movement, email, date).await
    }

    pub async fn get_glucose_metrics(&self, email: &str, date: &str) -> ToolResult<Envelope<MetricsView>> {
        self.get_view(ViewKind::Glucose, email, date).await
    }

    pub async fn get_heart_metrics(&self, email: &str, date: &str) -> ToolResult<Envelope<MetricsView>> {
        self.get_view(ViewKind::Heart, email, date).await
    }

    async fn get_view(&self, view: ViewKind, email: &str, date: &str) -> ToolResult<Envelope<MetricsView>> {
        Ok(self
            .get_user_metrics(email, date)
            .await?
            .map(|metrics| project(view, &metrics)))
    }
}
