//! Static product and scene-style catalog the pipeline samples from.
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub color: String,
    pub shape: String,
    pub scent: String,
    pub url: Option<String>,
}

impl Product {
    fn new(name: &str, color: &str, shape: &str, scent: &str, url: Option<&str>) -> Self {
        Product {
            name: name.to_string(),
            color: color.to_string(),
            shape: shape.to_string(),
            scent: scent.to_string(),
            url: url.map(str::to_string),
        }
    }
}

pub const SCENE_STYLES: [&str; 5] = [
    "minimalist flat-lay on linen with soft morning light and gentle shadows",
    "cozy living room vignette with books and a ceramic tray, golden-hour light",
    "spa setting with marble, eucalyptus sprigs, and steam softly blurred",
    "festive table with subtle fairy lights and bokeh, elegant and clean",
    "Nordic interior styling with oak, matte ceramics, and neutral palette",
];

#[derive(Debug, Clone)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub scenes: Vec<String>,
}

impl Catalog {
    /// The Spiralwick line-up, every product linking to `store_url`.
    pub fn spiralwick(store_url: Option<&str>) -> Self {
        Catalog {
            products: vec![
                Product::new("Spiralwick Twisted Taper — Ivory", "ivory", "twisted taper", "unscented", store_url),
                Product::new("Spiralwick Bubble Cube — Blush Pink", "blush pink", "bubble cube", "rose & peony", store_url),
                Product::new("Spiralwick Ribbed Pillar — Forest Green", "forest green", "ribbed pillar", "evergreen", store_url),
            ],
            scenes: SCENE_STYLES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Uniform pick, with replacement across calls.
    pub fn pick_product<R: Rng + ?Sized>(&self, rng: &mut R) -> AppResult<&Product> {
        self.products.choose(rng).ok_or(AppError::EmptyCatalog("products"))
    }

    pub fn pick_scene<R: Rng + ?Sized>(&self, rng: &mut R) -> AppResult<&str> {
        self.scenes
            .choose(rng)
            .map(String::as_str)
            .ok_or(AppError::EmptyCatalog("scene styles"))
    }
}
