use std::sync::Arc;

use cadenza_core::SessionId;

use crate::artifact::ArtifactStore;
use crate::credential::CredentialStore;
use crate::sanitize::sanitize;
use crate::synthesizer::{SynthesisError, Synthesizer};
use crate::types::{GenerationRequest, HandlingReport};
use crate::validate::validate;

/// Sequences one submission end to end
///
/// Wires the validator, credential policy, sanitizer, synthesis seam,
/// and artifact store into a single call/return chain, accumulating the
/// user-facing messages and errors.
pub struct Orchestrator {
    credentials: Arc<CredentialStore>,
    synthesizer: Box<dyn Synthesizer>,
    artifacts: Arc<ArtifactStore>,
}

impl Orchestrator {
    pub fn new(
        credentials: Arc<CredentialStore>,
        synthesizer: Box<dyn Synthesizer>,
        artifacts: Arc<ArtifactStore>,
    ) -> Self {
        Self {
            credentials,
            synthesizer,
            artifacts,
        }
    }

    /// Handle one submission
    ///
    /// The credential policy is applied even when validation fails; the
    /// synthesis call and the artifact write happen only on a clean
    /// verdict, in that order, and any failure leaves storage untouched.
    pub async fn handle(&self, session: SessionId, request: &GenerationRequest) -> HandlingReport {
        let mut report = HandlingReport::default();

        let verdict = validate(request);

        self.credentials.apply(session, &request.api_key, request.remember_key);

        if !verdict.is_clean() {
            report.errors = verdict.errors;
            return report;
        }

        let stem = sanitize(request.file_name_hint.as_deref().unwrap_or(""), &jiff::Zoned::now());

        let audio = match self
            .synthesizer
            .synthesize(&request.api_key, &request.model, &request.voice, &request.text)
            .await
        {
            Ok(audio) => audio,
            Err(error) => {
                report.errors.push(synthesis_failure_message(&error));
                return report;
            }
        };

        match self.artifacts.save(&stem, &audio.audio).await {
            Ok(path) => {
                let file_name = path
                    .file_name()
                    .map_or_else(|| format!("{stem}.mp3"), |name| name.to_string_lossy().into_owned());

                report.messages.push(format!("Audio saved as {file_name}."));

                if verdict.custom_voice_used {
                    report.messages.push(format!(
                        "Custom voice \"{}\" is not on the curated list; \
                         make sure the selected model supports it.",
                        request.voice
                    ));
                }
            }
            Err(error) => {
                tracing::error!("failed to persist artifact {stem}: {error}");
                report.errors.push("Could not save the MP3 file.".to_owned());
            }
        }

        report
    }
}

/// One composite message for a failed synthesis call
fn synthesis_failure_message(error: &SynthesisError) -> String {
    let mut message = "Could not retrieve audio from the synthesis service.".to_owned();

    match error {
        SynthesisError::Connection { detail } => {
            message.push_str(&format!(" Transport error: {detail}"));
        }
        SynthesisError::Rejected {
            status,
            message: service_message,
        } => match service_message {
            Some(text) => message.push_str(&format!(" Service message: {text}")),
            None => message.push_str(&format!(" Service returned status {status}.")),
        },
    }

    message
}
