//! GM adapter configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Connection settings for the GM vehicle API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GmConfig {
    /// Base URL of the GM API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://gmapi.azurewebsites.net".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for GmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl GmConfig {
    /// Config pointing at a different base URL, default timeouts
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let config: GmConfig = serde_json::from_str(r#"{"timeout_secs": 5}"#).unwrap();
        assert_eq!(config.base_url, "http://gmapi.azurewebsites.net");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
    }
}
