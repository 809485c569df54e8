//! Connection settings
//!
//! Host and port of the LifeUp service. Both are kept as the strings the
//! user typed; they are only checked when a request URL is built.

use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, Result};

pub const DEFAULT_HOST: &str = "192.168.1.x";
pub const DEFAULT_PORT: &str = "13276";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Local IP of the phone running LifeUp
    #[serde(alias = "setting1")]
    pub host: String,
    #[serde(alias = "setting2")]
    pub port: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT.to_string(),
        }
    }
}

impl Settings {
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
        }
    }

    /// Check that host and port can be used to build a URL
    pub fn validate(&self) -> Result<()> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(BridgeError::InvalidSettings("IP must not be empty".to_string()));
        }
        if host.chars().any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '@')) {
            return Err(BridgeError::InvalidSettings(format!("invalid IP: {}", host)));
        }
        if host.contains(':') && !is_bracketed_ipv6(host) {
            return Err(BridgeError::InvalidSettings(format!("invalid IP: {}", host)));
        }

        let port = self.port.trim();
        if port.is_empty() {
            return Err(BridgeError::InvalidSettings("port must not be empty".to_string()));
        }
        match port.parse::<u16>() {
            Ok(p) if p > 0 => Ok(()),
            _ => Err(BridgeError::InvalidSettings(format!("invalid port: {}", port))),
        }
    }

    /// `http://{host}:{port}`
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host.trim(), self.port.trim())
    }

    pub fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url())
    }

    pub fn api_url(&self) -> String {
        format!("{}/api", self.base_url())
    }
}

/// `[fe80::1]` style literal, the only host form allowed to hold `:`
fn is_bracketed_ipv6(host: &str) -> bool {
    host.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(|inner| {
            inner.contains(':')
                && inner.chars().all(|c| c.is_ascii_hexdigit() || c == ':' || c == '.')
        })
        .unwrap_or(false)
}
