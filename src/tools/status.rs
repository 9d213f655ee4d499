//! Ultrahuman MCP Status Tool
//!
//! Provides runtime status information about the server process.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::Config;

/// Runtime status of the server
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Upstream configuration (presence only, never the secrets)
    pub base_url: String,
    pub request_timeout_seconds: u64,
    pub auth_key_configured: bool,
    pub default_email_configured: bool,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    base_url: String,
    request_timeout_seconds: u64,
    auth_key_configured: bool,
    default_email_configured: bool,
}

impl StatusTracker {
    pub fn new(config: &Config) -> Self {
        Self {
            start_time: Instant::now(),
            base_url: config.base_url.clone(),
            request_timeout_seconds: config.request_timeout.as_secs(),
            auth_key_configured: config.auth_key.is_some(),
            default_email_configured: config.default_email.is_some(),
        }
    }

    pub fn get_status(&self) -> ServiceStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        ServiceStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            base_url: self.base_url.clone(),
            request_timeout_seconds: self.request_timeout_seconds,
            auth_key_configured: self.auth_key_configured,
            default_email_configured: self.default_email_configured,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_configuration_presence_only() {
        let config = Config {
            auth_key: Some("top-secret".to_string()),
            ..Config::default()
        };
        let status = StatusTracker::new(&config).get_status();

        assert!(status.auth_key_configured);
        assert!(!status.default_email_configured);
        assert_eq!(status.base_url, config.base_url);
        assert_eq!(status.request_timeout_seconds, 30);
        assert_eq!(status.process_id, std::process::id());

        let json = serde_json::to_string(&status).unwrap();
        assert!(!json.contains("top-secret"));
    }
}
