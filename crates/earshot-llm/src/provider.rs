pub(crate) mod openai;

use async_trait::async_trait;

use crate::{
    error::LlmError,
    types::{CompletionRequest, CompletionResponse},
};

/// Chat completion collaborator
#[async_trait]
pub trait Completer: Send + Sync {
    /// Run a non-streaming completion
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError>;

    /// Provider name for logging
    fn name(&self) -> &str;
}
