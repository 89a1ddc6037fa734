pub(crate) mod whisper;

use async_trait::async_trait;

use crate::{staging::StagedAudio, types::TranscriptionResponse};

/// Speech-to-text collaborator
///
/// Borrows the staged audio so a temp-file stage outlives the upload.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe audio to text
    async fn transcribe(&self, audio: &StagedAudio) -> crate::error::Result<TranscriptionResponse>;

    /// Provider name for logging
    fn name(&self) -> &str;
}
