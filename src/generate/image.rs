//! Pin images from the image-generation endpoint, with a local placeholder.
use image::{Rgb, RgbImage};

use super::{FallbackReason, Generated};
use crate::catalog::Product;
use crate::config::Config;
use crate::error::AppResult;
use crate::openai::client::OpenAiClient;
use crate::prompt::constructor::{PromptConstructor, IMAGE_TEMPLATE};
use crate::render::text::BitmapFont;

pub const IMAGE_SIZE: u32 = 1024;
const PLACEHOLDER_BACKGROUND: Rgb<u8> = Rgb([245, 242, 238]);
const PLACEHOLDER_INK: Rgb<u8> = Rgb([40, 40, 40]);
const PLACEHOLDER_MARGIN: i64 = 40;

pub struct ImageGenerator {
    client: OpenAiClient,
    brand: String,
    dry_run: bool,
    prompts: PromptConstructor,
}

impl ImageGenerator {
    pub fn new(config: &Config, client: OpenAiClient) -> Self {
        ImageGenerator {
            client,
            brand: config.brand.clone(),
            dry_run: config.dry_run,
            prompts: PromptConstructor::new(),
        }
    }

    fn size_param() -> String {
        format!("{}x{}", IMAGE_SIZE, IMAGE_SIZE)
    }

    /// Flat card naming the brand and the product.
    pub fn placeholder(&self, product: &Product) -> RgbImage {
        let mut img = RgbImage::from_pixel(IMAGE_SIZE, IMAGE_SIZE, PLACEHOLDER_BACKGROUND);
        let text = format!("{}\n{} • {}", self.brand, product.shape, product.color);
        BitmapFont::default().draw(
            &mut img,
            PLACEHOLDER_MARGIN,
            PLACEHOLDER_MARGIN,
            &text,
            PLACEHOLDER_INK,
        );
        img
    }

    pub async fn generate(&self, product: &Product, scene: &str) -> Generated<RgbImage> {
        if self.dry_run {
            return self.fallback(product, FallbackReason::Disabled("dry run"));
        }
        if !self.client.has_credentials() {
            return self.fallback(product, FallbackReason::Disabled("OPENAI_API_KEY not set"));
        }
        match self.request(product, scene).await {
            Ok(img) => Generated::Remote(img),
            Err(err) => {
                tracing::warn!("[openai] image fallback: {}", err);
                self.fallback(product, FallbackReason::Failed(err))
            }
        }
    }

    fn fallback(&self, product: &Product, reason: FallbackReason) -> Generated<RgbImage> {
        tracing::info!("Using placeholder image ({})", reason);
        Generated::Fallback { value: self.placeholder(product), reason }
    }

    async fn request(&self, product: &Product, scene: &str) -> AppResult<RgbImage> {
        let inputs = PromptConstructor::product_inputs(product, scene, &self.brand);
        let prompt = self.prompts.construct_prompt(IMAGE_TEMPLATE, &inputs)?;
        let bytes = self.client.generate_image(&prompt, &Self::size_param()).await?;
        Ok(image::load_from_memory(&bytes)?.to_rgb8())
    }
}
