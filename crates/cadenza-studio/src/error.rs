use cadenza_core::HttpError;
use http::StatusCode;

pub type Result<T, E = StudioError> = std::result::Result<T, E>;

/// Errors surfaced by the studio's listing and download endpoints
///
/// Submission-handling problems are not errors at this level; they are
/// accumulated into the handling report instead.
#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    /// Download name failed resolution against the store
    #[error("invalid artifact name: {0}")]
    InvalidArtifactName(String),
    /// Requested artifact does not exist
    #[error("artifact not found: {0}")]
    ArtifactNotFound(String),
    /// Underlying filesystem failure
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl HttpError for StudioError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidArtifactName(_) => StatusCode::BAD_REQUEST,
            Self::ArtifactNotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::InvalidArtifactName(_) => "invalid_artifact_name",
            Self::ArtifactNotFound(_) => "artifact_not_found",
            Self::Storage(_) => "storage_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Storage(_) => "artifact storage is unavailable".to_owned(),
            other => other.to_string(),
        }
    }
}

impl axum::response::IntoResponse for StudioError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.client_message(),
            }
        });

        (self.status_code(), axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_variants() {
        assert_eq!(
            StudioError::InvalidArtifactName("x".to_owned()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            StudioError::ArtifactNotFound("x".to_owned()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            StudioError::Storage(std::io::Error::other("disk full")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn storage_details_are_not_exposed() {
        let error = StudioError::Storage(std::io::Error::other("permission denied: /srv/secret"));
        assert!(!error.client_message().contains("/srv/secret"));
    }
}
