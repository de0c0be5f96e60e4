//! Brand label composited near the bottom-right corner of a pin image.
use image::{Rgb, RgbImage};

use super::text::{fill_rect, BitmapFont};
use crate::config::Config;

pub const WATERMARK_INSET: u32 = 16;
pub const WATERMARK_PADDING: u32 = 6;
const BACKING: Rgb<u8> = Rgb([255, 255, 255]);
const INK: Rgb<u8> = Rgb([30, 30, 30]);

pub struct Watermarker {
    label: String,
    font: BitmapFont,
}

impl Watermarker {
    pub fn new(config: &Config) -> Self {
        Watermarker { label: config.brand.clone(), font: BitmapFont::default() }
    }

    /// Copy of `image` carrying the brand label.
    pub fn apply(&self, image: &RgbImage) -> RgbImage {
        self.apply_label(image, None)
    }

    /// Copy of `image` carrying `label`, or the brand when `label` is absent or empty.
    /// The input is not modified.
    pub fn apply_label(&self, image: &RgbImage, label: Option<&str>) -> RgbImage {
        let text = label.filter(|l| !l.is_empty()).unwrap_or(&self.label);
        let mut out = image.clone();
        let (tw, th) = self.font.measure(text);
        let x = out.width() as i64 - tw as i64 - WATERMARK_INSET as i64;
        let y = out.height() as i64 - th as i64 - WATERMARK_INSET as i64;
        let pad = WATERMARK_PADDING as i64;

        fill_rect(&mut out, x - pad, y - pad, x + tw as i64 + pad, y + th as i64 + pad, BACKING);
        self.font.draw(&mut out, x, y, text, INK);
        out
    }
}
