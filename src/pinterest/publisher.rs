//! Publishing a finished pin, or simulating it when publishing is disabled.
use std::fmt;

use base64::engine::general_purpose;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

use super::client::{CreatePinRequest, MediaSource, PinterestClient};
use crate::config::Config;
use crate::error::AppResult;
use crate::generate::PinMetadata;

pub const JPEG_QUALITY: u8 = 92;
pub const DRY_RUN_PIN_ID: &str = "dry_run";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinOutcome {
    Published { id: Option<String> },
    DryRun,
}

impl PinOutcome {
    pub fn id(&self) -> &str {
        match self {
            PinOutcome::Published { id: Some(id) } => id.as_str(),
            PinOutcome::Published { id: None } => "<none>",
            PinOutcome::DryRun => DRY_RUN_PIN_ID,
        }
    }
}

impl fmt::Display for PinOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// JPEG bytes for `image` at `JPEG_QUALITY`.
pub fn encode_jpeg(image: &RgbImage) -> AppResult<Vec<u8>> {
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY).encode_image(image)?;
    Ok(buf)
}

pub struct Publisher {
    client: PinterestClient,
    board_id: Option<String>,
    dry_run: bool,
}

impl Publisher {
    pub fn new(config: &Config, client: PinterestClient) -> Self {
        Publisher { client, board_id: config.board_id.clone(), dry_run: config.dry_run }
    }

    /// Board to publish to, or `None` when publishing is simulated.
    fn live_board(&self) -> Option<&str> {
        if self.dry_run || !self.client.has_credentials() {
            return None;
        }
        self.board_id.as_deref()
    }

    pub async fn publish(
        &self,
        image: &RgbImage,
        metadata: &PinMetadata,
        link: Option<&str>,
    ) -> AppResult<PinOutcome> {
        let metadata = metadata.clone().clamped();
        let Some(board_id) = self.live_board() else {
            tracing::info!(
                title = %metadata.title,
                link = link.unwrap_or("<none>"),
                alt = %metadata.alt,
                "[dry-run] Would post pin"
            );
            return Ok(PinOutcome::DryRun);
        };

        let data = general_purpose::STANDARD.encode(encode_jpeg(image)?);
        let request = CreatePinRequest {
            title: &metadata.title,
            description: &metadata.description,
            alt_text: &metadata.alt,
            board_id,
            link,
            media_source: MediaSource::jpeg_base64(data),
        };
        let response = self.client.create_pin(&request).await?;
        if response.id.is_none() {
            tracing::warn!("[pinterest] publish succeeded but response has no id");
        }
        Ok(PinOutcome::Published { id: response.id })
    }
}
