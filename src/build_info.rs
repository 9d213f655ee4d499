//! Build metadata embedded by build.rs
//!
//! Used by the startup banner, the status tool and the upstream User-Agent.

use serde::Serialize;

use crate::config::{Config, Transport};

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const BUILD_NUMBER: u64 = build_number(option_env!("ULTRAHUMAN_MCP_BUILD_NUMBER"));

/// ISO 8601, or "unknown" when built without build.rs
pub const BUILD_TIMESTAMP: &str = match option_env!("ULTRAHUMAN_MCP_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Decimal build counter; anything unparsable counts as build 0
const fn build_number(raw: Option<&str>) -> u64 {
    let bytes = match raw {
        Some(s) => s.as_bytes(),
        None => return 0,
    };
    let mut n: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            return 0;
        }
        n = n * 10 + (bytes[i] - b'0') as u64;
        i += 1;
    }
    n
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
        }
    }

    /// User-Agent sent to the Partnership API
    pub fn user_agent(&self) -> String {
        format!("{}/{} (build {})", self.name, self.version, self.build_number)
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner(config: &Config) {
    let info = BuildInfo::current();
    let endpoint = match config.transport {
        Transport::Http => format!("http://{}/mcp", config.bind_addr()),
        Transport::Stdio => "stdio".to_string(),
    };
    eprintln!("===============================================");
    eprintln!("  Ultrahuman MCP Server");
    eprintln!("  Version: {} | Build: {}", info.version, info.build_number);
    eprintln!("  Compiled: {}", info.build_timestamp);
    eprintln!("  Upstream: {}", config.base_url);
    eprintln!("  Endpoint: {}", endpoint);
    eprintln!("===============================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_number_parsing() {
        assert_eq!(build_number(None), 0);
        assert_eq!(build_number(Some("")), 0);
        assert_eq!(build_number(Some("1234")), 1234);
        assert_eq!(build_number(Some("12a")), 0);
    }

    #[test]
    fn test_user_agent() {
        let info = BuildInfo::current();
        assert_eq!(info.name, "ultrahuman-mcp");
        assert!(info
            .user_agent()
            .starts_with(&format!("ultrahuman-mcp/{} (build ", env!("CARGO_PKG_VERSION"))));
    }
}
