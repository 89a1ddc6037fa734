//! JSON bodies returned by the upload endpoint

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

/// Characters `encodeURIComponent` escapes: everything except
/// alphanumerics and `-_.!~*'()`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Fixed `error` text of the failure envelope
pub const PROCESSING_ERROR: &str = "Error processing audio";

/// Body of a successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessEnvelope {
    pub success: bool,
    pub transcript: String,
    pub answer: String,
    pub redirect_url: String,
}

impl SuccessEnvelope {
    pub fn new(transcript: String, answer: String) -> Self {
        let redirect_url = results_url(&transcript, &answer);
        Self {
            success: true,
            transcript,
            answer,
            redirect_url,
        }
    }
}

/// Body of a run that failed upstream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureEnvelope {
    pub success: bool,
    pub error: &'static str,
    pub details: String,
}

impl FailureEnvelope {
    pub fn new(details: String) -> Self {
        Self {
            success: false,
            error: PROCESSING_ERROR,
            details,
        }
    }
}

/// Body of a rejected request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientError {
    pub error: String,
}

impl ClientError {
    pub fn new(error: String) -> Self {
        Self { error }
    }
}

/// Link to the results page carrying the question and answer
pub fn results_url(question: &str, answer: &str) -> String {
    format!(
        "/results?question={}&answer={}",
        utf8_percent_encode(question, URI_COMPONENT),
        utf8_percent_encode(answer, URI_COMPONENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_become_percent_20() {
        assert_eq!(
            results_url("hello world", "hi there"),
            "/results?question=hello%20world&answer=hi%20there"
        );
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(
            results_url("a&b=c?d/e#f+g", "100%"),
            "/results?question=a%26b%3Dc%3Fd%2Fe%23f%2Bg&answer=100%25"
        );
    }

    #[test]
    fn uri_component_marks_are_kept() {
        assert_eq!(results_url("it's (ok)! ~*-_.", ""), "/results?question=it's%20(ok)!%20~*-_.&answer=");
    }

    #[test]
    fn non_ascii_is_utf8_encoded() {
        assert_eq!(results_url("café", "日"), "/results?question=caf%C3%A9&answer=%E6%97%A5");
    }

    #[test]
    fn success_serializes_camel_case() {
        let envelope = SuccessEnvelope::new("hello world".to_owned(), "hi there".to_owned());

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            serde_json::json!({
                "success": true,
                "transcript": "hello world",
                "answer": "hi there",
                "redirectUrl": "/results?question=hello%20world&answer=hi%20there"
            })
        );
    }
}
