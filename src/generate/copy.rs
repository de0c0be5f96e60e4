//! Pin copy (title, description, alt text) from the chat-completions endpoint.
use serde::{Deserialize, Serialize};

use super::{FallbackReason, Generated};
use crate::catalog::Product;
use crate::config::Config;
use crate::error::AppResult;
use crate::openai::client::OpenAiClient;
use crate::openai::types::ChatMessage;
use crate::prompt::constructor::{PromptConstructor, COPY_SYSTEM_PROMPT, COPY_TEMPLATE};
use crate::utils::text::{strip_code_fence, title_case, truncate_chars};

/// Low temperature: consistent copy over creative copy.
pub const COPY_TEMPERATURE: f32 = 0.6;

const DERIVED_TITLE_CHARS: usize = 90;
const DERIVED_ALT_CHARS: usize = 120;

// Pin service field limits.
pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_DESCRIPTION_CHARS: usize = 800;
pub const MAX_ALT_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinMetadata {
    pub title: String,
    pub description: String,
    pub alt: String,
}

impl PinMetadata {
    /// Parse a model reply as `{"title", "description", "alt"}`. All three keys are required.
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(strip_code_fence(content))
    }

    /// Derive all three fields from an unstructured reply.
    pub fn from_raw_text(content: &str) -> Self {
        PinMetadata {
            title: truncate_chars(content, DERIVED_TITLE_CHARS),
            description: content.to_string(),
            alt: truncate_chars(content, DERIVED_ALT_CHARS),
        }
    }

    /// Deterministic copy built only from the product and brand.
    pub fn fallback(product: &Product, brand: &str) -> Self {
        PinMetadata {
            title: format!(
                "{} • {} in {}",
                brand,
                title_case(&product.shape),
                title_case(&product.color)
            ),
            description: format!(
                "Sculptural {} candle by {} in {}.",
                product.shape, brand, product.color
            ),
            alt: format!("{} {} candle in styled scene", product.color, product.shape),
        }
    }

    /// Trim every field to what the pin service accepts.
    pub fn clamped(self) -> Self {
        PinMetadata {
            title: truncate_chars(&self.title, MAX_TITLE_CHARS),
            description: truncate_chars(&self.description, MAX_DESCRIPTION_CHARS),
            alt: truncate_chars(&self.alt, MAX_ALT_CHARS),
        }
    }
}

pub struct CopyGenerator {
    client: OpenAiClient,
    brand: String,
    prompts: PromptConstructor,
}

impl CopyGenerator {
    pub fn new(config: &Config, client: OpenAiClient) -> Self {
        CopyGenerator {
            client,
            brand: config.brand.clone(),
            prompts: PromptConstructor::new(),
        }
    }

    /// One attempt against the text service; any failure yields the templated copy.
    pub async fn generate(&self, product: &Product, scene: &str) -> Generated<PinMetadata> {
        match self.request(product, scene).await {
            Ok(metadata) => Generated::Remote(metadata),
            Err(err) => {
                tracing::warn!("[openai] copy fallback: {}", err);
                Generated::Fallback {
                    value: PinMetadata::fallback(product, &self.brand),
                    reason: FallbackReason::Failed(err),
                }
            }
        }
    }

    async fn request(&self, product: &Product, scene: &str) -> AppResult<PinMetadata> {
        let inputs = PromptConstructor::product_inputs(product, scene, &self.brand);
        let prompt = self.prompts.construct_prompt(COPY_TEMPLATE, &inputs)?;
        let messages = [ChatMessage::system(COPY_SYSTEM_PROMPT), ChatMessage::user(prompt)];

        let content = self.client.chat_completion(&messages, COPY_TEMPERATURE).await?;
        match PinMetadata::parse(&content) {
            Ok(metadata) => Ok(metadata),
            Err(err) => {
                tracing::warn!("[openai] copy reply is not structured ({}), deriving from text", err);
                Ok(PinMetadata::from_raw_text(&content))
            }
        }
    }
}
