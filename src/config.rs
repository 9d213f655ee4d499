//! Process configuration
//!
//! Read once at startup from the environment and passed by reference from then on.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://partner.ultrahuman.com/api/v1";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 1 and 65535, got '{0}'")]
    InvalidPort(String),

    #[error("ULTRAHUMAN_TIMEOUT_SECS must be a positive number of seconds, got '{0}'")]
    InvalidTimeout(String),

    #[error("Unknown transport '{0}', expected \"http\" or \"stdio\"")]
    UnknownTransport(String),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// How the MCP endpoint is exposed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Http,
    Stdio,
}

impl Transport {
    fn parse(s: &str) -> ConfigResult<Self> {
        match s.to_lowercase().as_str() {
            "http" => Ok(Transport::Http),
            "stdio" => Ok(Transport::Stdio),
            _ => Err(ConfigError::UnknownTransport(s.to_string())),
        }
    }
}

/// Immutable process-wide configuration
#[derive(Clone)]
pub struct Config {
    /// Partnership API authorization key, sent verbatim in the Authorization header
    pub auth_key: Option<String>,
    pub base_url: String,
    /// Email used by get_default_user_metrics
    pub default_email: Option<String>,
    pub host: String,
    pub port: u16,
    pub transport: Transport,
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = get("ULTRAHUMAN_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let port = match get("PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(p) if p > 0 => p,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
            None => DEFAULT_PORT,
        };

        let timeout_secs = match get("ULTRAHUMAN_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let transport = match get("ULTRAHUMAN_MCP_TRANSPORT") {
            Some(raw) => Transport::parse(raw.trim())?,
            None => Transport::Http,
        };

        Ok(Self {
            auth_key: get("ULTRAHUMAN_AUTH_KEY"),
            base_url,
            default_email: get("ULTRAHUMAN_DEFAULT_EMAIL"),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            transport,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Socket address string for the HTTP transport
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            default_email: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            transport: Transport::Http,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("auth_key", &self.auth_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("default_email", &self.default_email)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("transport", &self.transport)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> ConfigResult<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.auth_key, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.default_email, None);
        assert_eq!(config.port, 8000);
        assert_eq!(config.transport, Transport::Http);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_reads_all_variables() {
        let config = load(&[
            ("ULTRAHUMAN_AUTH_KEY", "secret"),
            ("ULTRAHUMAN_BASE_URL", "https://www.staging.ultrahuman.com/api/v1/"),
            ("ULTRAHUMAN_DEFAULT_EMAIL", "me@example.com"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9100"),
            ("ULTRAHUMAN_MCP_TRANSPORT", "STDIO"),
            ("ULTRAHUMAN_TIMEOUT_SECS", "5"),
        ])
        .unwrap();
        assert_eq!(config.auth_key.as_deref(), Some("secret"));
        assert_eq!(config.base_url, "https://www.staging.ultrahuman.com/api/v1");
        assert_eq!(config.default_email.as_deref(), Some("me@example.com"));
        assert_eq!(config.bind_addr(), "127.0.0.1:9100");
        assert_eq!(config.transport, Transport::Stdio);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = load(&[("ULTRAHUMAN_AUTH_KEY", ""), ("ULTRAHUMAN_DEFAULT_EMAIL", "  ")]).unwrap();
        assert_eq!(config.auth_key, None);
        assert_eq!(config.default_email, None);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            load(&[("PORT", "eighty")]).unwrap_err(),
            ConfigError::InvalidPort("eighty".to_string())
        );
        assert_eq!(
            load(&[("PORT", "0")]).unwrap_err(),
            ConfigError::InvalidPort("0".to_string())
        );
        assert_eq!(
            load(&[("ULTRAHUMAN_TIMEOUT_SECS", "0")]).unwrap_err(),
            ConfigError::InvalidTimeout("0".to_string())
        );
        assert_eq!(
            load(&[("ULTRAHUMAN_MCP_TRANSPORT", "sse")]).unwrap_err(),
            ConfigError::UnknownTransport("sse".to_string())
        );
    }

    #[test]
    fn test_debug_redacts_auth_key() {
        let config = load(&[("ULTRAHUMAN_AUTH_KEY", "super-secret-key")]).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-key"));
        assert!(debug.contains("<redacted>"));
    }
}
