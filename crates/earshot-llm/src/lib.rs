#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod protocol;
mod provider;
mod types;

use std::sync::Arc;

use secrecy::SecretString;

pub use error::LlmError;
pub use provider::{Completer, openai::OpenAiCompleter};
pub use types::{ChatMessage, CompletionRequest, CompletionResponse, Role};

/// Build the completion client from configuration
pub fn build_completer(
    config: &earshot_config::OpenAiConfig,
    api_key: SecretString,
    client: reqwest::Client,
) -> Arc<dyn Completer> {
    tracing::debug!(model = %config.completion_model, "initializing completion client");

    Arc::new(OpenAiCompleter::new(client, config.base_url(), api_key))
}
