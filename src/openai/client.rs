//! Thin HTTP client for the OpenAI endpoints the pipeline uses.
//!
//! - `chat_completion` posts to `/chat/completions` and returns the first
//!   choice's message content.
//! - `generate_image` posts to `/images/generations` and returns the decoded
//!   image bytes from `data[0].b64_json`.
use std::time::Duration;

use base64::engine::general_purpose;
use base64::Engine;
use reqwest::{Client, Response};

use super::types::{
    ChatMessage, ChatRequest, ChatResponse, ImagesGenerateRequest, ImagesGenerateResponse,
};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::utils::http::service_client;

const SERVICE: &str = "openai";
pub const TEXT_TIMEOUT: Duration = Duration::from_secs(60);
pub const IMAGE_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    text_model: String,
    image_model: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Self {
        OpenAiClient {
            client: service_client(),
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            api_key: config.openai_api_key.clone(),
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> AppResult<&str> {
        self.api_key
            .as_deref()
            .ok_or(AppError::MissingCredential("OPENAI_API_KEY"))
    }

    /// Single-turn chat completion. Returns the first choice's message content.
    pub async fn chat_completion(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> AppResult<String> {
        let api_key = self.api_key()?;
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatRequest { model: &self.text_model, messages, temperature };
        tracing::debug!("Sending chat completion to {} with model {}", url, self.text_model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .timeout(TEXT_TIMEOUT)
            .json(&body)
            .send()
            .await?;
        let parsed: ChatResponse = ensure_success(response, "copy").await?.json().await?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AppError::UnexpectedResponse {
                service: SERVICE,
                detail: "chat response has no choices".to_string(),
            })
    }

    /// Request one `size` image and return its decoded bytes.
    pub async fn generate_image(&self, prompt: &str, size: &str) -> AppResult<Vec<u8>> {
        let api_key = self.api_key()?;
        let url = format!("{}/images/generations", self.base_url);
        let body = ImagesGenerateRequest { model: &self.image_model, prompt, size, n: 1 };
        tracing::debug!("Requesting {} image from {} with model {}", size, url, self.image_model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .timeout(IMAGE_TIMEOUT)
            .json(&body)
            .send()
            .await?;
        let parsed: ImagesGenerateResponse = ensure_success(response, "image").await?.json().await?;

        let b64 = parsed
            .data
            .into_iter()
            .next()
            .and_then(|d| d.b64_json)
            .ok_or_else(|| AppError::UnexpectedResponse {
                service: SERVICE,
                detail: "image response missing data[0].b64_json".to_string(),
            })?;
        Ok(general_purpose::STANDARD.decode(b64)?)
    }
}

async fn ensure_success(response: Response, what: &str) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unable to read error body".to_string());
    tracing::error!("[openai] {} error: {} {}", what, status, body);
    Err(AppError::Upstream { service: SERVICE, status, body })
}
