use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_ENDPOINTS: [&str; 3] = [
    "https://libretranslate.com",
    "https://translate.argosopentech.com",
    "https://libretranslate.de",
];

fn default_endpoints() -> Vec<String> {
    DEFAULT_ENDPOINTS.iter().map(|s| s.to_string()).collect()
}

fn default_timeout_seconds() -> u64 {
    0
}

fn default_user_agent() -> String {
    concat!("tolk/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Endpoint pool and HTTP client settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    /// Interchangeable base urls, tried in this order
    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<String>,
    /// Per-request timeout, 0 leaves the transport default in place
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            endpoints: default_endpoints(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl NetworkConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let endpoints = lookup("TOLK_ENDPOINTS")
            .map(|v| parse_endpoint_list(&v))
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_endpoints);

        let timeout_seconds = lookup("TOLK_TIMEOUT_SECONDS")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self {
            endpoints,
            timeout_seconds,
            user_agent: default_user_agent(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoints.is_empty() {
            return Err(ConfigError::NoEndpoints);
        }

        for endpoint in &self.endpoints {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(ConfigError::InvalidEndpoint(endpoint.clone()));
            }
        }

        Ok(())
    }
}

/// Split a comma separated list, dropping blanks
pub fn parse_endpoint_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
