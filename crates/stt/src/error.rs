use earshot_core::HttpError;
use http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SttError>;

/// Transcription errors
#[derive(Debug, Error)]
pub enum SttError {
    /// Writing or reading the staged audio failed
    #[error("failed to stage audio: {0}")]
    Staging(#[from] std::io::Error),

    /// The request could not be built from the staged audio
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Network or connection error
    #[error("connection error: {0}")]
    ConnectionError(String),

    /// Provider API returned a non-success status
    #[error("provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Provider answered with a body that is not a transcription
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

impl SttError {
    /// Whether the failure happened before any upstream call was made
    pub fn is_staging(&self) -> bool {
        matches!(self, Self::Staging(_))
    }
}

impl HttpError for SttError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Staging(_) => "staging_error",
            Self::InvalidRequest(_) => "invalid_request_error",
            Self::ConnectionError(_) | Self::ProviderApiError { .. } | Self::InvalidResponse(_) => "upstream_error",
        }
    }

    /// The raw detail without the variant prefix
    fn client_message(&self) -> String {
        match self {
            Self::Staging(e) => e.to_string(),
            Self::InvalidRequest(message)
            | Self::ConnectionError(message)
            | Self::ProviderApiError { message, .. }
            | Self::InvalidResponse(message) => message.clone(),
        }
    }
}
