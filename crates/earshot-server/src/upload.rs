use axum::{
    body::Body,
    extract::{FromRequest, Multipart, multipart::MultipartError},
};
use http::{Request, StatusCode};
use stt::UploadedAudio;

use crate::error::ProcessError;

/// Multipart field carrying the recording
pub const AUDIO_FIELD: &str = "audio";

const DEFAULT_FILENAME: &str = "audio.webm";
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Extractor for the single `audio` file field of a multipart form
///
/// Other fields are skipped. A field named `audio` without a filename is a
/// plain text field, not a file, and is skipped too. The body limit is
/// enforced by the route's `DefaultBodyLimit`.
pub struct AudioUpload(pub UploadedAudio);

impl<S> FromRequest<S> for AudioUpload
where
    S: Send + Sync,
{
    type Rejection = ProcessError;

    async fn from_request(request: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(request, state).await.map_err(|e| {
            tracing::debug!(error = %e, "request is not a multipart form");
            ProcessError::MissingFile
        })?;

        while let Some(field) = multipart.next_field().await.map_err(reject)? {
            if field.name() != Some(AUDIO_FIELD) {
                continue;
            }

            let Some(filename) = field.file_name().map(str::to_owned) else {
                continue;
            };

            let filename = if filename.is_empty() {
                DEFAULT_FILENAME.to_owned()
            } else {
                filename
            };
            let content_type = field.content_type().unwrap_or(DEFAULT_CONTENT_TYPE).to_owned();
            let bytes = field.bytes().await.map_err(reject)?;

            tracing::debug!(%filename, %content_type, bytes = bytes.len(), "audio upload received");

            return Ok(Self(UploadedAudio {
                bytes,
                filename,
                content_type,
            }));
        }

        Err(ProcessError::MissingFile)
    }
}

fn reject(error: MultipartError) -> ProcessError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ProcessError::PayloadTooLarge
    } else {
        tracing::debug!(error = %error, "malformed multipart body");
        ProcessError::MissingFile
    }
}
