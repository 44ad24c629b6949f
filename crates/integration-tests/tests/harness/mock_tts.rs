//! Mock TTS backend server for integration tests
//!
//! Implements a minimal OpenAI-compatible `/audio/speech` endpoint that
//! returns canned audio bytes or a canned rejection

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// Bytes the mock hands out as synthesized audio
pub const MOCK_AUDIO: &[u8] = b"ID3mock-mp3-bytes";

/// Mock TTS backend that returns predictable responses
pub struct MockTts {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockTtsState>,
}

struct MockTtsState {
    speech_count: AtomicU32,
    /// Canned rejection returned instead of audio (status, message)
    rejection: Option<(u16, String)>,
    /// Body of the most recent speech request
    last_request: Mutex<Option<serde_json::Value>>,
}

impl MockTts {
    /// Start a mock that returns audio bytes for every request
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(None).await
    }

    /// Start a mock that rejects every request with the given error
    pub async fn start_rejecting(status: u16, message: &str) -> anyhow::Result<Self> {
        Self::start_inner(Some((status, message.to_owned()))).await
    }

    async fn start_inner(rejection: Option<(u16, String)>) -> anyhow::Result<Self> {
        let state = Arc::new(MockTtsState {
            speech_count: AtomicU32::new(0),
            rejection,
            last_request: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/audio/speech", routing::post(handle_speech))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the synthesis upstream
    ///
    /// Includes `/v1` since the client appends `/audio/speech`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of speech requests received
    pub fn speech_count(&self) -> u32 {
        self.state.speech_count.load(Ordering::Relaxed)
    }

    /// Body of the most recent speech request
    pub fn last_request(&self) -> Option<serde_json::Value> {
        self.state.last_request.lock().unwrap().clone()
    }
}

impl Drop for MockTts {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_speech(
    State(state): State<Arc<MockTtsState>>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.speech_count.fetch_add(1, Ordering::Relaxed);
    *state.last_request.lock().unwrap() = Some(body);

    if let Some((status, message)) = &state.rejection {
        let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = serde_json::json!({ "error": { "message": message } });
        return (status, Json(body)).into_response();
    }

    ([(http::header::CONTENT_TYPE, "audio/mpeg")], MOCK_AUDIO.to_vec()).into_response()
}
