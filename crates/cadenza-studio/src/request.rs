use axum::body::Body;
use cadenza_core::SessionId;
use serde::Deserialize;

use crate::types::GenerationRequest;

/// Raw submission fields as they arrive from the form
#[derive(Debug, Deserialize)]
pub struct SubmissionForm {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub voice: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub file_name: String,
    /// Checkbox field; any submitted value counts as set
    #[serde(default)]
    pub remember_key: Option<String>,
}

impl SubmissionForm {
    /// Convert loose form fields into a typed request
    pub fn into_request(self) -> GenerationRequest {
        let hint = self.file_name.trim();

        GenerationRequest {
            api_key: self.api_key.trim().to_owned(),
            model: self.model,
            voice: self.voice.trim().to_owned(),
            text: self.text.trim().to_owned(),
            file_name_hint: (!hint.is_empty()).then(|| hint.to_owned()),
            remember_key: self.remember_key.is_some(),
        }
    }
}

/// Extractor for urlencoded form submissions
///
/// Yields the request's session identity alongside the typed request.
pub struct ExtractSubmission(pub SessionId, pub GenerationRequest);

/// Body limit for submissions (1 MiB)
const BODY_LIMIT_BYTES: usize = 1 << 20;

static FORM_URLENCODED: http::HeaderValue =
    http::HeaderValue::from_static("application/x-www-form-urlencoded");

impl<S> axum::extract::FromRequest<S> for ExtractSubmission
where
    S: Send + Sync,
{
    type Rejection = axum::response::Response;

    async fn from_request(request: http::Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
        use axum::response::IntoResponse;

        let (mut parts, body) = request.into_parts();

        if parts
            .headers
            .get(http::header::CONTENT_TYPE)
            .is_none_or(|value| value != FORM_URLENCODED)
        {
            return Err((
                axum::http::StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Unsupported Content-Type, expected: 'Content-Type: application/x-www-form-urlencoded'",
            )
                .into_response());
        }

        let bytes = axum::body::to_bytes(body, BODY_LIMIT_BYTES).await.map_err(|err| {
            if std::error::Error::source(&err)
                .is_some_and(|source| source.is::<http_body_util::LengthLimitError>())
            {
                (
                    axum::http::StatusCode::PAYLOAD_TOO_LARGE,
                    format!("Request body is too large, limit is {BODY_LIMIT_BYTES} bytes"),
                )
            } else {
                (
                    axum::http::StatusCode::BAD_REQUEST,
                    format!("Failed to read request body: {err}"),
                )
            }
            .into_response()
        })?;

        // Reassemble the request so axum's Form extractor does the decoding
        let mut rebuilt = http::Request::builder().method(parts.method.clone()).uri(parts.uri.clone());

        for (key, value) in &parts.headers {
            rebuilt = rebuilt.header(key, value);
        }

        let rebuilt = rebuilt.body(Body::from(bytes)).map_err(|e| {
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to rebuild request: {e}"),
            )
                .into_response()
        })?;

        let axum::Form(form) = axum::Form::<SubmissionForm>::from_request(rebuilt, &()).await.map_err(|e| {
            (
                axum::http::StatusCode::BAD_REQUEST,
                format!("Failed to parse form submission: {e}"),
            )
                .into_response()
        })?;

        let session = parts.extensions.remove::<SessionId>().unwrap_or_else(SessionId::generate);

        Ok(Self(session, form.into_request()))
    }
}
