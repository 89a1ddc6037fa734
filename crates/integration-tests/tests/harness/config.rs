//! Programmatic configuration builder for integration tests

use std::{net::SocketAddr, path::Path};

use earshot_config::{Config, HealthConfig, OpenAiConfig, ServerConfig, StagingConfig, StagingStrategy};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig {
                        enabled: true,
                        ..HealthConfig::default()
                    },
                    ..ServerConfig::default()
                },
                openai: OpenAiConfig {
                    api_key: Some(SecretString::from("test-key")),
                    ..OpenAiConfig::default()
                },
                staging: StagingConfig::default(),
                telemetry: earshot_config::TelemetryConfig::default(),
            },
        }
    }

    /// Point both upstream calls at a mock backend
    pub fn with_upstream(mut self, base_url: &str) -> Self {
        self.config.openai.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Stage uploads with the given strategy under `directory`
    pub fn with_staging(mut self, strategy: StagingStrategy, directory: &Path) -> Self {
        self.config.staging = StagingConfig {
            strategy,
            directory: directory.to_path_buf(),
        };
        self
    }

    /// Serve static assets and the results page from `dir`
    pub fn with_public_dir(mut self, dir: &Path) -> Self {
        self.config.server.public_dir = dir.to_path_buf();
        self.config.server.results_page = dir.join("results.html");
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
