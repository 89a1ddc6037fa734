use std::time::Duration;

use http::{HeaderMap, HeaderValue, header};
use reqwest::Client;

/// Build the HTTP client shared by the upstream transcription and completion clients
///
/// Constructed once at start-up and cloned into each client, so both reuse the
/// same connection pool. Without a `timeout` a request may run as long as
/// the upstream keeps the connection alive.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized
pub fn http_client(timeout: Option<Duration>) -> reqwest::Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));

    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder
        .pool_idle_timeout(Some(Duration::from_secs(5)))
        .tcp_nodelay(true)
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .default_headers(headers)
        .build()
}
