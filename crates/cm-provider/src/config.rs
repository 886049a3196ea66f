//! Connection settings for the management provider

use crate::error::{ProviderError, ProviderResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Connection settings for an SMS provider endpoint.
///
/// Carries everything a transport needs to establish a session; the
/// library itself never opens one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionConfig {
    /// SMS provider server, e.g. `cm01.contoso.com`
    pub server: String,

    /// Three-letter site code; discovered from the connection when omitted
    #[serde(default)]
    pub site_code: Option<String>,

    /// WMI namespace on the provider server
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Account for the connection; integrated authentication when omitted
    #[serde(default)]
    pub user_name: Option<String>,

    /// Password for `user_name`
    #[serde(default)]
    pub password: Option<String>,
}

fn default_namespace() -> String {
    "root\\sms".to_string()
}

impl ConnectionConfig {
    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> ProviderResult<Self> {
        serde_yaml::from_str(yaml).map_err(|e| ProviderError::ConfigError(e.to_string()))
    }

    /// Load from a YAML file
    pub fn from_path(path: &Path) -> ProviderResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ProviderError::ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_yaml_str(&raw)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
