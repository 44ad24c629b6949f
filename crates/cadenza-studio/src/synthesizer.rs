use async_trait::async_trait;

use crate::types::SpeechAudio;

/// Failure modes of one synthesis round trip
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    /// No response could be obtained from the service
    #[error("failed to reach the synthesis service: {detail}")]
    Connection {
        /// Low-level transport diagnostic
        detail: String,
    },
    /// The service answered and explicitly rejected the request
    #[error("synthesis service rejected the request (status {status})")]
    Rejected {
        /// HTTP status of the rejection
        status: u16,
        /// `error.message` from the response body, when present
        message: Option<String>,
    },
}

/// Outbound synthesis seam
///
/// The orchestrator only sees this trait; production wires in the
/// OpenAI-compatible client, tests substitute a stub backend.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Synthesize text to speech in a single blocking round trip
    async fn synthesize(
        &self,
        api_key: &str,
        model: &str,
        voice: &str,
        text: &str,
    ) -> Result<SpeechAudio, SynthesisError>;
}
