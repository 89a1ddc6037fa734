#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod openai;
pub mod server;
pub mod staging;
pub mod telemetry;

use serde::Deserialize;

pub use cors::*;
pub use env::ExpandError;
pub use health::*;
pub use openai::*;
pub use server::*;
pub use staging::*;
pub use telemetry::*;

/// Top-level Earshot configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream transcription and completion provider
    #[serde(default)]
    pub openai: OpenAiConfig,
    /// Upload staging configuration
    #[serde(default)]
    pub staging: StagingConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
