use async_trait::async_trait;
use earshot_core::upstream_error_detail;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{error::SttError, staging::StagedAudio, types::TranscriptionResponse};

use super::Transcriber;

/// `OpenAI` Whisper transcription client
pub struct WhisperTranscriber {
    client: Client,
    base_url: String,
    api_key: SecretString,
    model: String,
}

impl WhisperTranscriber {
    pub fn new(client: Client, base_url: String, api_key: SecretString, model: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
            model,
        }
    }
}

#[derive(serde::Deserialize)]
struct WhisperResponse {
    text: String,
}

#[async_trait]
impl Transcriber for WhisperTranscriber {
    async fn transcribe(&self, audio: &StagedAudio) -> crate::error::Result<TranscriptionResponse> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        tracing::debug!(
            bytes = audio.len(),
            strategy = ?audio.strategy(),
            model = %self.model,
            "whisper transcription request"
        );

        let form = reqwest::multipart::Form::new()
            .part("file", audio.to_part().await?)
            .text("model", self.model.clone());

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key.expose_secret()))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Whisper request failed: {e}");
                SttError::ConnectionError(e.to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            tracing::error!("Whisper API error ({status}): {body}");

            return Err(SttError::ProviderApiError {
                status: status.as_u16(),
                message: upstream_error_detail(status, &body),
            });
        }

        let result: WhisperResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Whisper response: {e}");
            SttError::InvalidResponse(e.to_string())
        })?;

        tracing::debug!(chars = result.text.len(), "whisper transcription complete");

        Ok(TranscriptionResponse { text: result.text })
    }

    fn name(&self) -> &str {
        "whisper"
    }
}
