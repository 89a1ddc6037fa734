//! Preparing an uploaded buffer for the transcription call
//!
//! Three strategies are supported and produce the same upstream request:
//! the buffer is sent as-is, sent as a chunked stream, or written to a temp
//! file that is streamed from disk. A temp file is owned by the returned
//! [`StagedAudio`] and is deleted when that value is dropped, whichever way
//! the request ends.

use std::{
    io,
    path::{Path, PathBuf},
};

use bytes::Bytes;
use earshot_config::{StagingConfig, StagingStrategy};
use futures_util::stream;
use reqwest::{Body, multipart::Part};
use tempfile::NamedTempFile;
use uuid::Uuid;

use crate::{error::SttError, types::UploadedAudio};

/// Chunk size used by the stream strategy
const STREAM_CHUNK_BYTES: usize = 64 * 1024;

/// Stages uploads according to the configured strategy
#[derive(Debug, Clone)]
pub struct Stager {
    strategy: StagingStrategy,
    directory: PathBuf,
}

impl Stager {
    pub fn new(strategy: StagingStrategy, directory: PathBuf) -> Self {
        Self { strategy, directory }
    }

    pub fn from_config(config: &StagingConfig) -> Self {
        Self::new(config.strategy, config.directory.clone())
    }

    /// Stage one upload
    ///
    /// For the temp-file strategy the staging directory is created if needed
    /// and the file name starts with `request_id`, so concurrent requests
    /// never share a path.
    pub async fn stage(&self, upload: UploadedAudio, request_id: Uuid) -> crate::error::Result<StagedAudio> {
        let UploadedAudio {
            bytes,
            filename,
            content_type,
        } = upload;

        let payload = match self.strategy {
            StagingStrategy::Memory => Payload::Memory(bytes),
            StagingStrategy::Stream => Payload::Stream(bytes),
            StagingStrategy::TempFile => {
                let file = self.write_temp_file(&bytes, &filename, request_id).await?;
                tracing::debug!(path = %file.path().display(), "audio staged to disk");
                Payload::TempFile {
                    file,
                    len: bytes.len() as u64,
                }
            }
        };

        Ok(StagedAudio {
            filename,
            content_type,
            payload,
        })
    }

    async fn write_temp_file(&self, bytes: &Bytes, filename: &str, request_id: Uuid) -> io::Result<NamedTempFile> {
        let directory = self.directory.clone();
        let prefix = format!("{request_id}-");
        let suffix = extension_suffix(filename);

        // Directory and file creation are blocking calls
        let file = tokio::task::spawn_blocking(move || {
            std::fs::create_dir_all(&directory)?;
            tempfile::Builder::new()
                .prefix(&prefix)
                .suffix(&suffix)
                .tempfile_in(&directory)
        })
        .await
        .map_err(io::Error::other)??;

        // On failure `file` is dropped here and removed with it
        tokio::fs::write(file.path(), bytes).await?;

        Ok(file)
    }
}

/// `.ext` of the original filename when it is a plain alphanumeric extension
fn extension_suffix(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}

#[derive(Debug)]
enum Payload {
    Memory(Bytes),
    Stream(Bytes),
    TempFile { file: NamedTempFile, len: u64 },
}

/// Audio in the shape the transcription client sends upstream
#[derive(Debug)]
pub struct StagedAudio {
    filename: String,
    content_type: String,
    payload: Payload,
}

impl StagedAudio {
    pub fn strategy(&self) -> StagingStrategy {
        match self.payload {
            Payload::Memory(_) => StagingStrategy::Memory,
            Payload::Stream(_) => StagingStrategy::Stream,
            Payload::TempFile { .. } => StagingStrategy::TempFile,
        }
    }

    /// Path of the staged file, if the audio lives on disk
    pub fn path(&self) -> Option<&Path> {
        match &self.payload {
            Payload::TempFile { file, .. } => Some(file.path()),
            Payload::Memory(_) | Payload::Stream(_) => None,
        }
    }

    /// Size of the audio in bytes
    pub fn len(&self) -> u64 {
        match &self.payload {
            Payload::Memory(bytes) | Payload::Stream(bytes) => bytes.len() as u64,
            Payload::TempFile { len, .. } => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Build the multipart `file` part for the upstream request
    pub(crate) async fn to_part(&self) -> crate::error::Result<Part> {
        let part = match &self.payload {
            Payload::Memory(bytes) => Part::bytes(bytes.to_vec()),
            Payload::Stream(bytes) => {
                let chunks: Vec<io::Result<Bytes>> = bytes
                    .chunks(STREAM_CHUNK_BYTES)
                    .map(|chunk| Ok(bytes.slice_ref(chunk)))
                    .collect();
                Part::stream_with_length(Body::wrap_stream(stream::iter(chunks)), bytes.len() as u64)
            }
            Payload::TempFile { file, len } => {
                let reader = tokio::fs::File::open(file.path()).await?;
                Part::stream_with_length(Body::from(reader), *len)
            }
        };

        part.file_name(self.filename.clone())
            .mime_str(&self.content_type)
            .map_err(|e| SttError::InvalidRequest(format!("invalid content type '{}': {e}", self.content_type)))
    }
}
