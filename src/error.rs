use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

/// Failures of a single turn. The message is the upstream error text.
#[derive(Debug, Error)]
pub enum TurnError {
    #[error("{0:#}")]
    Transcription(anyhow::Error),

    #[error("{0:#}")]
    ChatResponse(anyhow::Error),

    #[error("{0:#}")]
    Synthesis(anyhow::Error),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("{0:#}")]
    Internal(anyhow::Error),
}

impl TurnError {
    pub fn kind(&self) -> &'static str {
        match self {
            TurnError::Transcription(_) => "TranscriptionError",
            TurnError::ChatResponse(_) => "ChatResponseError",
            TurnError::Synthesis(_) => "SynthesisError",
            TurnError::Timeout(_) => "TimeoutError",
            TurnError::Internal(_) => "InternalError",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            TurnError::Transcription(_)
            | TurnError::ChatResponse(_)
            | TurnError::Synthesis(_)
            | TurnError::Timeout(_)
            | TurnError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Errors surfaced by the HTTP layer as `{"detail": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{detail}")]
    Upload { status: StatusCode, detail: String },

    #[error(transparent)]
    Turn(#[from] TurnError),
}

impl ApiError {
    pub fn missing_field(name: &str) -> Self {
        ApiError::Upload {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: format!("{} field is required", name),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Upload { status, .. } => *status,
            ApiError::Turn(err) => err.status(),
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError::Upload {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: rejection.body_text(),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        // Oversized bodies keep their 413; other parse failures are validation errors.
        let status = match err.status() {
            StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        };
        ApiError::Upload {
            status,
            detail: err.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_is_raw_upstream_message() {
        let err = TurnError::ChatResponse(anyhow::anyhow!("Upstream exploded"));
        assert_eq!(err.to_string(), "Upstream exploded");
        assert_eq!(err.kind(), "ChatResponseError");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_context_chain_is_flattened() {
        let err = TurnError::Transcription(
            anyhow::anyhow!("connection refused").context("Failed to send audio for transcription"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to send audio for transcription: connection refused"
        );
    }

    #[test]
    fn test_every_turn_error_maps_to_500() {
        let errors = [
            TurnError::Transcription(anyhow::anyhow!("a")),
            TurnError::ChatResponse(anyhow::anyhow!("b")),
            TurnError::Synthesis(anyhow::anyhow!("c")),
            TurnError::Timeout(Duration::from_secs(30)),
            TurnError::Internal(anyhow::anyhow!("d")),
        ];
        for err in errors {
            assert_eq!(ApiError::from(err).status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_timeout_message() {
        let err = TurnError::Timeout(Duration::from_secs(30));
        assert_eq!(err.to_string(), "request timed out after 30s");
    }

    #[test]
    fn test_missing_field_is_422() {
        let err = ApiError::missing_field("audio_file");
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "audio_file field is required");
    }
}
