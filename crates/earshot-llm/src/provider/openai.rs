//! OpenAI-compatible completion client

use async_trait::async_trait;
use earshot_core::upstream_error_detail;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use super::Completer;
use crate::error::LlmError;
use crate::protocol::openai::{OpenAiRequest, OpenAiResponse};
use crate::types::{CompletionRequest, CompletionResponse};

/// OpenAI-compatible completion client
pub struct OpenAiCompleter {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl OpenAiCompleter {
    pub fn new(client: Client, base_url: String, api_key: SecretString) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Completer for OpenAiCompleter {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let wire_request = OpenAiRequest::from(request);

        tracing::debug!(model = %request.model, messages = request.messages.len(), "chat completion request");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "completion request failed");
                LlmError::Connection(e.to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "completion upstream returned error");
            return Err(LlmError::Upstream {
                status: status.as_u16(),
                message: upstream_error_detail(status, &body),
            });
        }

        let wire_response: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("failed to parse response: {e}")))?;

        Ok(wire_response.into())
    }

    fn name(&self) -> &str {
        "openai"
    }
}
