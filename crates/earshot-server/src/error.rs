use axum::{
    Json,
    response::{IntoResponse, Response},
};
use earshot_core::HttpError;
use http::StatusCode;
use thiserror::Error;

use crate::envelope::{ClientError, FailureEnvelope};

/// Why processing an upload did not produce an answer
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Request carried no `audio` file field
    #[error("No audio file provided")]
    MissingFile,

    /// Request body exceeded the upload limit
    #[error("Audio file too large")]
    PayloadTooLarge,

    /// The upload could not be prepared for transcription
    #[error("failed to stage audio: {0}")]
    Staging(String),

    /// Speech-to-text call failed
    #[error("transcription failed: {0}")]
    Transcription(String),

    /// Completion call failed
    #[error("completion failed: {0}")]
    Completion(String),

    /// Handler panicked
    #[error("internal error")]
    Internal,
}

impl HttpError for ProcessError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFile => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Staging(_) | Self::Transcription(_) | Self::Completion(_) | Self::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::MissingFile | Self::PayloadTooLarge => "invalid_request_error",
            Self::Staging(_) => "staging_error",
            Self::Transcription(_) => "transcription_error",
            Self::Completion(_) => "completion_error",
            Self::Internal => "internal_error",
        }
    }

    /// Upstream detail for server-side failures, the display text otherwise
    fn client_message(&self) -> String {
        match self {
            Self::Staging(detail) | Self::Transcription(detail) | Self::Completion(detail) => detail.clone(),
            Self::MissingFile | Self::PayloadTooLarge | Self::Internal => self.to_string(),
        }
    }
}

impl IntoResponse for ProcessError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_client_error() {
            return (status, Json(ClientError::new(self.to_string()))).into_response();
        }

        tracing::error!(error_type = self.error_type(), error = %self, "audio processing failed");

        (status, Json(FailureEnvelope::new(self.client_message()))).into_response()
    }
}
