use http::StatusCode;
use serde::Deserialize;

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorMessage,
}

#[derive(Deserialize)]
struct ErrorMessage {
    message: String,
}

/// Extract a human-readable detail from a failed upstream response body
///
/// Prefers the `error.message` field of an OpenAI-style error object, then the
/// raw body, then a generic message naming the status.
pub fn upstream_error_detail(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body)
        && !parsed.error.message.is_empty()
    {
        return parsed.error.message;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("upstream returned {status}")
    } else {
        trimmed.to_owned()
    }
}
