use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::Path,
};

use secrecy::{ExposeSecret, SecretString};

use crate::{Config, StagingStrategy};

/// Environment variable holding the upstream API credential
const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable holding the listen port
const PORT_VAR: &str = "PORT";

impl Config {
    /// Load configuration for process start-up
    ///
    /// Reads the TOML file if it exists (a missing file yields defaults),
    /// applies the `OPENAI_API_KEY` and `PORT` overrides, then validates.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, an override is
    /// malformed, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;
            Self::parse(&raw)?
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Self::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration text, expanding `{{ env.VAR }}` placeholders first
    ///
    /// # Errors
    ///
    /// Returns an error if placeholder expansion or TOML parsing fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))
    }

    /// Fill the API key and listen port from the process environment
    ///
    /// A key in the file wins over `OPENAI_API_KEY`. `PORT` replaces the port
    /// of the configured listen address and keeps its host.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port number
    pub fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        if self.openai.api_key.is_none()
            && let Ok(key) = std::env::var(API_KEY_VAR)
            && !key.is_empty()
        {
            self.openai.api_key = Some(SecretString::from(key));
        }

        if let Ok(raw_port) = std::env::var(PORT_VAR) {
            let port: u16 = raw_port
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid {PORT_VAR} value '{raw_port}': {e}"))?;

            let ip = self
                .server
                .listen_address
                .map_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED), |addr| addr.ip());
            self.server.listen_address = Some(SocketAddr::new(ip, port));
        }

        Ok(())
    }

    /// Validate that the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing, the upload limit is zero, or
    /// temp-file staging has no directory
    pub fn validate(&self) -> anyhow::Result<()> {
        match &self.openai.api_key {
            Some(key) if !key.expose_secret().is_empty() => {}
            _ => anyhow::bail!("an API key is required: set openai.api_key or {API_KEY_VAR}"),
        }

        if self.server.max_upload_bytes == 0 {
            anyhow::bail!("server.max_upload_bytes must be greater than 0");
        }

        if self.staging.strategy == StagingStrategy::TempFile && self.staging.directory.as_os_str().is_empty() {
            anyhow::bail!("staging.directory must not be empty when the strategy is temp_file");
        }

        Ok(())
    }
}
