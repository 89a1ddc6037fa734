use serde::Deserialize;

/// `GET /health` liveness route
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthConfig {
    /// Route is not registered when false
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default = "default_health_path")]
    pub path: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_health_path(),
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn enabled_by_default() -> bool {
    true
}

fn default_health_path() -> String {
    "/health".to_owned()
}
