use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Audio file received from the caller
///
/// Lives only for the request that carried it.
#[derive(Debug, Clone)]
pub struct UploadedAudio {
    /// Raw audio data
    pub bytes: Bytes,
    /// Original filename
    pub filename: String,
    /// Declared media type
    pub content_type: String,
}

/// Transcription response following `OpenAI` Whisper API format
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    /// Transcribed text
    pub text: String,
}
