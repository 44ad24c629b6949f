use serde::Deserialize;

/// Upstream text-to-speech API configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SynthesisConfig {
    /// Base URL of the OpenAI-compatible API
    pub base_url: String,
    /// Timeout for one synthesis round trip, in seconds
    pub timeout_seconds: u64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_owned(),
            timeout_seconds: 120,
        }
    }
}
