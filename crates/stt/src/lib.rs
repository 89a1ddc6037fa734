#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod provider;
mod staging;
mod types;

use std::sync::Arc;

use secrecy::SecretString;

pub use error::{Result, SttError};
pub use provider::{Transcriber, whisper::WhisperTranscriber};
pub use staging::{StagedAudio, Stager};
pub use types::{TranscriptionResponse, UploadedAudio};

/// Build the transcription client from configuration
///
/// The HTTP client is shared with the completion client so both reuse one
/// connection pool.
pub fn build_transcriber(
    config: &earshot_config::OpenAiConfig,
    api_key: SecretString,
    client: reqwest::Client,
) -> Arc<dyn Transcriber> {
    tracing::debug!(model = %config.transcription_model, "initializing transcription client");

    Arc::new(WhisperTranscriber::new(
        client,
        config.base_url(),
        api_key,
        config.transcription_model.clone(),
    ))
}
