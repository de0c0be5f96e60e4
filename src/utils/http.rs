//! Shared `reqwest` client construction for the upstream services.
use std::time::Duration;

use reqwest::Client;

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client with the connect timeout applied. Request timeouts are set per call.
pub fn service_client() -> Client {
    Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to build tuned HTTP client ({}), using defaults", e);
            Client::new()
        })
}
