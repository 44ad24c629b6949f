use serde::Deserialize;

/// Health endpoint configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct HealthConfig {
    /// Whether the health endpoint is exposed
    pub enabled: bool,
    /// Path the health endpoint is served at
    pub path: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/health".to_owned(),
        }
    }
}
