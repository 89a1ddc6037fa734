use earshot_core::HttpError;
use http::StatusCode;
use thiserror::Error;

/// Errors that can occur during a completion call
#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport failure before a response arrived
    #[error("connection error: {0}")]
    Connection(String),

    /// Upstream provider returned a non-success status
    #[error("upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// Upstream body could not be decoded
    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),

    /// Upstream answered without any choice
    #[error("completion returned no choices")]
    NoChoices,
}

impl HttpError for LlmError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Connection(_) | Self::Upstream { .. } => "upstream_error",
            Self::InvalidResponse(_) | Self::NoChoices => "invalid_response_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Connection(message) | Self::Upstream { message, .. } | Self::InvalidResponse(message) => {
                message.clone()
            }
            Self::NoChoices => self.to_string(),
        }
    }
}
