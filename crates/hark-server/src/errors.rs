//! Handler errors and their JSON envelope.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Errors surfaced by HTTP handlers.
///
/// Client mistakes map to 400, everything server-side to 500. The
/// details strings carry sanitized summaries (an ffmpeg stderr tail, a
/// parse message), never internal paths or backtraces.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The multipart form had no `audio` field.
    #[error("no audio file uploaded")]
    NoAudioFile,

    /// The multipart body itself could not be read.
    #[error("malformed upload: {0}")]
    BadUpload(String),

    /// The external transcoder failed or the upload could not be staged.
    #[error("conversion failed: {0}")]
    Conversion(String),

    /// The converted waveform could not be parsed or streamed.
    #[error("reader error: {0}")]
    Reader(String),

    /// The recognition engine failed.
    #[error("recognition failed: {0}")]
    Recognition(String),
}

/// Wire shape of every error response.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            Self::NoAudioFile => (StatusCode::BAD_REQUEST, "No audio file uploaded", None),
            Self::BadUpload(d) => (StatusCode::BAD_REQUEST, "Malformed upload", Some(d)),
            Self::Conversion(d) | Self::Recognition(d) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Transcription failed", Some(d))
            }
            Self::Reader(d) => (StatusCode::INTERNAL_SERVER_ERROR, "Reader error", Some(d)),
        };
        if status.is_server_error() {
            tracing::error!(%status, error, details = details.as_deref(), "request failed");
        } else {
            tracing::warn!(%status, error, "request rejected");
        }
        (
            status,
            Json(ErrorBody {
                error: error.to_string(),
                details,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn no_audio_file_matches_the_public_contract() {
        let (status, json) = body_json(ApiError::NoAudioFile).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, serde_json::json!({"error": "No audio file uploaded"}));
    }

    #[tokio::test]
    async fn conversion_failure_is_transcription_failed() {
        let (status, json) = body_json(ApiError::Conversion("codec not found".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Transcription failed");
        assert_eq!(json["details"], "codec not found");
    }

    #[tokio::test]
    async fn recognition_failure_shares_the_conversion_envelope() {
        let (_, json) = body_json(ApiError::Recognition("engine fault".into())).await;
        assert_eq!(json["error"], "Transcription failed");
    }

    #[tokio::test]
    async fn reader_failure_is_reader_error() {
        let (status, json) = body_json(ApiError::Reader("truncated payload".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Reader error");
        assert_eq!(json["details"], "truncated payload");
    }

    #[tokio::test]
    async fn bad_upload_is_a_client_error() {
        let (status, json) = body_json(ApiError::BadUpload("boundary mismatch".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Malformed upload");
    }
}
