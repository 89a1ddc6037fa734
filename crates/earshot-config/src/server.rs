use std::{net::SocketAddr, path::PathBuf};

use serde::Deserialize;

use crate::{cors::CorsConfig, health::HealthConfig};

/// Default listen port when neither the config file nor `PORT` sets one
pub const DEFAULT_PORT: u16 = 3000;

/// Upstream Whisper rejects uploads above 25 MiB
const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 << 20;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_address: Option<SocketAddr>,
    /// Directory of static assets served as the fallback route
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
    /// Page returned by `GET /results`
    #[serde(default = "default_results_page")]
    pub results_page: PathBuf,
    /// Largest accepted request body for the upload endpoint
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    #[serde(default)]
    pub health: HealthConfig,
    /// CORS policy; permissive when absent
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: None,
            public_dir: default_public_dir(),
            results_page: default_results_page(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            health: HealthConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Address to bind, falling back to all interfaces on the default port
    pub fn listen_address(&self) -> SocketAddr {
        self.listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)))
    }
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_results_page() -> PathBuf {
    PathBuf::from("public/results.html")
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}
