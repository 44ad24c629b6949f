#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod artifact;
mod client;
mod credential;
mod error;
mod orchestrator;
mod request;
mod sanitize;
mod synthesizer;
mod types;
mod validate;

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use cadenza_core::SessionId;
use serde::Serialize;

pub use artifact::ArtifactStore;
pub use credential::CredentialStore;
pub use error::{Result, StudioError};
pub use orchestrator::Orchestrator;
pub use sanitize::{DEFAULT_FILENAME_PREFIX, sanitize};
pub use synthesizer::{SynthesisError, Synthesizer};
pub use types::{
    GenerationRequest, HandlingReport, KNOWN_VOICES, SpeechAudio, SpeechModel, StoredArtifact,
    ValidationVerdict,
};
pub use validate::validate;

use client::OpenAiSynthesizer;
use request::ExtractSubmission;

/// Route the artifact endpoints live under
const FILES_ROUTE: &str = "/v1/speech/files";

/// Shared studio state behind the endpoint router
pub struct Studio {
    orchestrator: Orchestrator,
    credentials: Arc<CredentialStore>,
    artifacts: Arc<ArtifactStore>,
}

impl Studio {
    /// Assemble studio state from its parts
    ///
    /// The synthesizer comes in as a boxed trait so callers can
    /// substitute a stub backend.
    pub fn new(
        credentials: Arc<CredentialStore>,
        synthesizer: Box<dyn Synthesizer>,
        artifacts: Arc<ArtifactStore>,
    ) -> Self {
        Self {
            orchestrator: Orchestrator::new(Arc::clone(&credentials), synthesizer, Arc::clone(&artifacts)),
            credentials,
            artifacts,
        }
    }
}

/// Build the studio from configuration
pub fn build_studio(config: &cadenza_config::Config) -> anyhow::Result<Arc<Studio>> {
    let artifacts = Arc::new(
        ArtifactStore::open(&config.storage.output_dir)
            .map_err(|e| anyhow::anyhow!("failed to initialize artifact store: {e}"))?,
    );

    let synthesizer = Box::new(OpenAiSynthesizer::new(
        &config.synthesis.base_url,
        Duration::from_secs(config.synthesis.timeout_seconds),
    ));

    Ok(Arc::new(Studio::new(
        Arc::new(CredentialStore::new()),
        synthesizer,
        artifacts,
    )))
}

/// Create the endpoint router for the studio
pub fn endpoint_router() -> Router<Arc<Studio>> {
    Router::new()
        .route("/v1/speech/generate", post(generate))
        .route(FILES_ROUTE, get(list_files))
        .route("/v1/speech/files/{name}", get(download_file))
        .route("/v1/session", get(session_credential))
}

/// Handle one speech generation submission
async fn generate(
    State(studio): State<Arc<Studio>>,
    ExtractSubmission(session, request): ExtractSubmission,
) -> Json<HandlingReport> {
    tracing::debug!(%session, model = %request.model, "generation submitted");

    let report = studio.orchestrator.handle(session, &request).await;

    tracing::debug!(
        messages = report.messages.len(),
        errors = report.errors.len(),
        "generation handled"
    );

    Json(report)
}

/// Listing entry: the stored artifact plus its download location
#[derive(Serialize)]
struct ArtifactEntry {
    #[serde(flatten)]
    artifact: StoredArtifact,
    download_path: String,
}

/// List stored artifacts
async fn list_files(State(studio): State<Arc<Studio>>) -> Result<Json<Vec<ArtifactEntry>>> {
    let entries = studio
        .artifacts
        .list()
        .await?
        .into_iter()
        .map(|artifact| ArtifactEntry {
            download_path: download_path(&artifact.file_name),
            artifact,
        })
        .collect();

    Ok(Json(entries))
}

/// Percent-encode a stored file name into its download path
fn download_path(file_name: &str) -> String {
    let mut url = url::Url::parse("http://localhost").expect("static base URL");
    url.set_path(FILES_ROUTE);
    url.path_segments_mut().expect("base URL has segments").push(file_name);
    url.path().to_owned()
}

/// Serve one artifact as an attachment
async fn download_file(
    State(studio): State<Arc<Studio>>,
    Path(name): Path<String>,
) -> Result<axum::response::Response> {
    let path = studio
        .artifacts
        .resolve(&name)
        .ok_or_else(|| StudioError::InvalidArtifactName(name.clone()))?;

    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(StudioError::ArtifactNotFound(name));
        }
        Err(e) => return Err(StudioError::Storage(e)),
    };

    let response = axum::response::Response::builder()
        .header(http::header::CONTENT_TYPE, "audio/mpeg")
        .header(http::header::CONTENT_DISPOSITION, format!("attachment; filename=\"{name}\""))
        .body(axum::body::Body::from(bytes))
        .unwrap_or_else(|_| {
            axum::response::Response::builder()
                .status(http::StatusCode::INTERNAL_SERVER_ERROR)
                .body(axum::body::Body::empty())
                .expect("empty response is always valid")
        });

    Ok(response)
}

/// Stored session credential, mirrored back for form prefill
#[derive(Serialize)]
struct SessionCredential {
    api_key: String,
}

/// Report the key remembered for the requesting session
async fn session_credential(
    State(studio): State<Arc<Studio>>,
    Extension(session): Extension<SessionId>,
) -> Json<SessionCredential> {
    Json(SessionCredential {
        api_key: studio.credentials.current(session),
    })
}
