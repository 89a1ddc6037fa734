mod cors;
mod envelope;
mod error;
mod handlers;
mod pipeline;
mod upload;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use earshot_config::Config;
use secrecy::SecretString;
use stt::Stager;
use tower_http::{
    catch_panic::CatchPanicLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub use error::ProcessError;
pub use pipeline::Pipeline;
pub use upload::AUDIO_FIELD;

/// Route of the upload endpoint
pub const PROCESS_AUDIO_PATH: &str = "/api/process-audio";

/// Route of the results page
pub const RESULTS_PATH: &str = "/results";

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server and its upstream clients from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP client cannot
    /// be built
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let api_key: SecretString = config
            .openai
            .api_key
            .clone()
            .ok_or_else(|| anyhow::anyhow!("an API key is required to reach the upstream provider"))?;

        let client = earshot_core::http_client(config.openai.timeout())
            .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {e}"))?;

        let transcriber = stt::build_transcriber(&config.openai, api_key.clone(), client.clone());
        let completer = earshot_llm::build_completer(&config.openai, api_key, client);

        let pipeline = Pipeline::new(
            Stager::from_config(&config.staging),
            transcriber,
            completer,
            config.openai.completion_model.clone(),
        );

        tracing::debug!(strategy = ?config.staging.strategy, "pipeline initialized");

        Ok(Self::with_pipeline(config, pipeline))
    }

    /// Build the server around an existing pipeline
    ///
    /// Lets callers substitute the transcription and completion collaborators.
    pub fn with_pipeline(config: &Config, pipeline: Pipeline) -> Self {
        let server_config = &config.server;

        let process_audio = post(handlers::process_audio).layer(DefaultBodyLimit::max(server_config.max_upload_bytes));

        let mut app = Router::new()
            .route(PROCESS_AUDIO_PATH, process_audio)
            .route_service(RESULTS_PATH, ServeFile::new(&server_config.results_page));

        if server_config.health.enabled {
            app = app.route(&server_config.health.path, get(handlers::health));
        }

        let app = app
            .with_state(Arc::new(pipeline))
            .fallback_service(ServeDir::new(&server_config.public_dir))
            .layer(CatchPanicLayer::custom(handlers::panic_response))
            .layer(TraceLayer::new_for_http())
            .layer(cors::cors_layer(&server_config.cors));

        Self {
            router: app,
            listen_address: server_config.listen_address(),
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Override the listen address
    #[must_use]
    pub fn with_listen_address(mut self, listen_address: SocketAddr) -> Self {
        self.listen_address = listen_address;
        self
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
