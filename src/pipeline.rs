//! One pin per iteration: pick, write copy, render, watermark, link, publish.
use image::RgbImage;
use rand::Rng;

use crate::catalog::{Catalog, Product};
use crate::config::Config;
use crate::error::AppResult;
use crate::generate::{CopyGenerator, ImageGenerator, PinMetadata};
use crate::link::{build_link, Utm};
use crate::openai::client::OpenAiClient;
use crate::pinterest::{PinOutcome, PinterestClient, Publisher};
use crate::render::Watermarker;

/// Everything produced for a pin before it is published.
pub struct PreparedPin {
    pub product: Product,
    pub scene: String,
    pub metadata: PinMetadata,
    pub image: RgbImage,
    pub link: Option<String>,
}

pub struct Pipeline {
    catalog: Catalog,
    store_url: Option<String>,
    utm: Utm,
    copy: CopyGenerator,
    images: ImageGenerator,
    watermarker: Watermarker,
    publisher: Publisher,
}

impl Pipeline {
    pub fn new(config: &Config) -> Self {
        Self::with_catalog(config, Catalog::spiralwick(config.store_url.as_deref()))
    }

    pub fn with_catalog(config: &Config, catalog: Catalog) -> Self {
        let openai = OpenAiClient::new(config);
        Pipeline {
            catalog,
            store_url: config.store_url.clone(),
            utm: Utm::from_config(config),
            copy: CopyGenerator::new(config, openai.clone()),
            images: ImageGenerator::new(config, openai),
            watermarker: Watermarker::new(config),
            publisher: Publisher::new(config, PinterestClient::new(config)),
        }
    }

    /// Select a product and scene and build the watermarked pin, without publishing.
    pub async fn prepare<R: Rng + ?Sized>(&self, rng: &mut R) -> AppResult<PreparedPin> {
        let product = self.catalog.pick_product(rng)?.clone();
        let scene = self.catalog.pick_scene(rng)?.to_string();
        tracing::info!("[run] product: {}", product.name);
        tracing::info!("[run] scene: {}", scene);

        let metadata = self.copy.generate(&product, &scene).await.into_inner();
        let image = self.images.generate(&product, &scene).await.into_inner();
        let image = self.watermarker.apply(&image);

        let link = match product.url.as_deref().or(self.store_url.as_deref()) {
            Some(url) => Some(build_link(url, &self.utm)),
            None => {
                tracing::warn!("No store URL configured; pin will have no link");
                None
            }
        };

        Ok(PreparedPin { product, scene, metadata, image, link })
    }

    /// A single iteration. Publish failures are returned, not recovered.
    pub async fn run_once<R: Rng + ?Sized>(&self, rng: &mut R) -> AppResult<PinOutcome> {
        let pin = self.prepare(rng).await?;
        let outcome = self
            .publisher
            .publish(&pin.image, &pin.metadata, pin.link.as_deref())
            .await?;
        tracing::info!("[done] pin id: {}", outcome);
        Ok(outcome)
    }

    /// `count` independent iterations (at least one); stops at the first error.
    pub async fn run<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> AppResult<Vec<PinOutcome>> {
        let count = count.max(1);
        let mut outcomes = Vec::new();
        for i in 0..count {
            tracing::debug!("Starting pin {}/{}", i + 1, count);
            outcomes.push(self.run_once(rng).await?);
        }
        Ok(outcomes)
    }
}
