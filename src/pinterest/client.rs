//! Thin HTTP client for the pin publishing API (`POST /pins`).
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::utils::http::service_client;

const SERVICE: &str = "pinterest";
pub const PUBLISH_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize)]
pub struct MediaSource {
    pub source_type: &'static str,
    pub content_type: &'static str,
    pub data: String,
}

impl MediaSource {
    pub fn jpeg_base64(data: String) -> Self {
        MediaSource { source_type: "image_base64", content_type: "image/jpeg", data }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatePinRequest<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub alt_text: &'a str,
    pub board_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'a str>,
    pub media_source: MediaSource,
}

#[derive(Debug, Deserialize)]
pub struct PinResponse {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Clone)]
pub struct PinterestClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl PinterestClient {
    pub fn new(config: &Config) -> Self {
        PinterestClient {
            client: service_client(),
            base_url: config.pinterest_base_url.trim_end_matches('/').to_string(),
            token: config.pinterest_token.clone(),
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.token.is_some()
    }

    /// Create a pin. Any non-success status is returned as `AppError::Upstream`.
    pub async fn create_pin(&self, request: &CreatePinRequest<'_>) -> AppResult<PinResponse> {
        let token = self
            .token
            .as_deref()
            .ok_or(AppError::MissingCredential("PINTEREST_ACCESS_TOKEN"))?;
        let url = format!("{}/pins", self.base_url);
        tracing::info!("Publishing pin to board {} at {}", request.board_id, url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .timeout(PUBLISH_TIMEOUT)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            tracing::error!("[pinterest] error: {} {}", status, body);
            Err(AppError::Upstream { service: SERVICE, status, body })
        }
    }
}
