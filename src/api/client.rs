//! Ultrahuman Partnership API client
//!
//! One authenticated GET per call, no retries and no caching.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use thiserror::Error;

use crate::build_info::BuildInfo;
use crate::config::Config;
use crate::models::RawMetrics;

/// Upstream API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("{0}")]
    Transport(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Transport(format!("Request timed out: {}", e))
        } else if e.is_decode() {
            ApiError::Transport(format!("Invalid response body: {}", e))
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

/// Result type for upstream API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Anything that can produce the raw metrics payload for an (email, date) pair
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn fetch(&self, email: &str, date: &str) -> ApiResult<RawMetrics>;
}

/// HTTP client for the partner metrics endpoint
#[derive(Clone)]
pub struct UltrahumanClient {
    http: reqwest::Client,
    base_url: String,
    auth_key: String,
}

impl UltrahumanClient {
    pub fn new(auth_key: impl Into<String>, base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(BuildInfo::current().user_agent())
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_key: auth_key.into(),
        })
    }

    /// Build a client from configuration, or `None` if no auth key is configured
    pub fn from_config(config: &Config) -> ApiResult<Option<Self>> {
        config
            .auth_key
            .as_ref()
            .map(|key| Self::new(key.clone(), config.base_url.clone(), config.request_timeout))
            .transpose()
    }

    fn metrics_url(&self) -> String {
        format!("{}/metrics", self.base_url)
    }
}

#[async_trait]
impl MetricsSource for UltrahumanClient {
    async fn fetch(&self, email: &str, date: &str) -> ApiResult<RawMetrics> {
        let url = self.metrics_url();
        tracing::debug!(%url, date, "Requesting Ultrahuman metrics");

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, self.auth_key.as_str())
            .header(CONTENT_TYPE, "application/json")
            .query(&[("email", email), ("date", date)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), date, "Ultrahuman API returned an error status");
            let body = response.text().await.map_err(|e| {
                ApiError::Transport(format!(
                    "Failed to read HTTP {} response body: {}",
                    status.as_u16(),
                    e
                ))
            })?;
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<RawMetrics>().await?)
    }
}
