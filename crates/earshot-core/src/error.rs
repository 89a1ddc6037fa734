use http::StatusCode;

/// An error that knows how it should be reported over HTTP
///
/// The transcription and completion crates implement this for their error
/// enums. Only the server crate turns it into an axum response.
pub trait HttpError: std::error::Error {
    /// Status the caller receives
    fn status_code(&self) -> StatusCode;

    /// Stable category used in logs (e.g. `upstream_error`)
    fn error_type(&self) -> &str;

    /// Detail placed in the response body
    ///
    /// Upstream failures return the provider's message as-is.
    fn client_message(&self) -> String;
}
