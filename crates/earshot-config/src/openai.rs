use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Default `OpenAI` API base URL
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Upstream AI provider configuration
///
/// One provider serves both the transcription and the completion call.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpenAiConfig {
    /// API key; falls back to `OPENAI_API_KEY` when omitted
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override for OpenAI-compatible endpoints
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model used for speech-to-text
    #[serde(default = "default_transcription_model")]
    pub transcription_model: String,
    /// Model used for the chat completion
    #[serde(default = "default_completion_model")]
    pub completion_model: String,
    /// Per-request timeout for upstream calls, in seconds
    ///
    /// Unset means no total-request timeout, matching the HTTP client default.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            transcription_model: default_transcription_model(),
            completion_model: default_completion_model(),
            timeout_seconds: None,
        }
    }
}

impl OpenAiConfig {
    /// Base URL without a trailing slash
    pub fn base_url(&self) -> String {
        self.base_url
            .as_ref()
            .map_or(DEFAULT_OPENAI_BASE_URL, Url::as_str)
            .trim_end_matches('/')
            .to_owned()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

fn default_transcription_model() -> String {
    "whisper-1".to_string()
}

fn default_completion_model() -> String {
    "gpt-4".to_string()
}
