use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::synthesizer::{SynthesisError, Synthesizer};
use crate::types::SpeechAudio;

/// Client for an OpenAI-compatible `/audio/speech` endpoint
pub(crate) struct OpenAiSynthesizer {
    client: Client,
    base_url: String,
}

impl OpenAiSynthesizer {
    /// Build a client against the given API base URL
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let mut headers = http::HeaderMap::new();
        headers.insert(http::header::CONNECTION, http::HeaderValue::from_static("keep-alive"));

        let client = Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Some(Duration::from_secs(5)))
            .tcp_nodelay(true)
            .default_headers(headers)
            .build()
            .expect("Failed to build default HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

#[derive(serde::Serialize)]
struct SpeechPayload<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
    format: &'a str,
}

#[async_trait]
impl Synthesizer for OpenAiSynthesizer {
    async fn synthesize(
        &self,
        api_key: &str,
        model: &str,
        voice: &str,
        text: &str,
    ) -> Result<SpeechAudio, SynthesisError> {
        let url = format!("{}/audio/speech", self.base_url);

        tracing::debug!("speech request: model={model}, voice={voice}, input_len={}", text.len());

        let body = SpeechPayload {
            model,
            voice,
            input: text,
            format: "mp3",
        };

        let response = self
            .client
            .post(&url)
            .header(http::header::AUTHORIZATION, format!("Bearer {api_key}"))
            .header(http::header::ACCEPT, "audio/mpeg")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("speech request failed: {e}");
                SynthesisError::Connection { detail: e.to_string() }
            })?;

        let status = response.status();

        if status.as_u16() >= 400 {
            let error_text = response.text().await.unwrap_or_default();

            tracing::error!("synthesis API error ({status}): {error_text}");

            return Err(SynthesisError::Rejected {
                status: status.as_u16(),
                message: extract_service_message(&error_text),
            });
        }

        let audio = response.bytes().await.map_err(|e| {
            tracing::error!("failed to read synthesis response body: {e}");
            SynthesisError::Connection { detail: e.to_string() }
        })?;

        tracing::debug!("synthesis complete, {} bytes", audio.len());

        Ok(SpeechAudio {
            audio: audio.to_vec(),
            content_type: "audio/mpeg".to_owned(),
        })
    }
}

/// Pull `error.message` out of a JSON error body, when the body has one
fn extract_service_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("error")?.get("message")?.as_str().map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_message_extracted_from_error_body() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(
            extract_service_message(body).as_deref(),
            Some("Incorrect API key provided")
        );
    }

    #[test]
    fn missing_message_yields_none() {
        assert_eq!(extract_service_message(r#"{"error": {}}"#), None);
        assert_eq!(extract_service_message(r#"{"detail": "nope"}"#), None);
    }

    #[test]
    fn non_json_body_yields_none() {
        assert_eq!(extract_service_message("<html>502 Bad Gateway</html>"), None);
        assert_eq!(extract_service_message(""), None);
    }
}
