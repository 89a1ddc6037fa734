use std::path::PathBuf;

use serde::Deserialize;

/// How an uploaded buffer is prepared for the transcription call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StagingStrategy {
    /// Keep the buffer in memory and send it as-is
    #[default]
    Memory,
    /// Wrap the buffer in a chunked body
    Stream,
    /// Write the buffer to a uniquely named file that is removed afterwards
    TempFile,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StagingConfig {
    #[serde(default)]
    pub strategy: StagingStrategy,
    /// Directory for `temp_file` staging; created on first use
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl Default for StagingConfig {
    fn default() -> Self {
        Self {
            strategy: StagingStrategy::default(),
            directory: default_directory(),
        }
    }
}

fn default_directory() -> PathBuf {
    std::env::temp_dir().join("earshot")
}
