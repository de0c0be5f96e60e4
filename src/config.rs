//! Env-driven configuration for the pin pipeline.
//!
//! Values are read from the process environment once at startup; `dotenv` is
//! loaded on demand by the binary. Missing credentials are not an error: the
//! generators and the publisher switch to their local/simulated behavior.
use std::env;

use crate::utils::text::mask_secret;

pub const DEFAULT_BRAND: &str = "Spiralwick Candles";
pub const DEFAULT_UTM_SOURCE: &str = "pinterest";
pub const DEFAULT_UTM_CAMPAIGN: &str = "organic_pins";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_PINTEREST_BASE_URL: &str = "https://api.pinterest.com/v5";
pub const DEFAULT_TEXT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_IMAGE_MODEL: &str = "gpt-image-1";

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub pinterest_token: Option<String>,
    pub board_id: Option<String>,
    pub store_url: Option<String>,
    pub brand: String,
    pub pins_per_run: usize,
    pub utm_source: String,
    pub utm_campaign: String,
    pub dry_run: bool,
    pub openai_base_url: String,
    pub pinterest_base_url: String,
    pub text_model: String,
    pub image_model: String,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let pins_per_run = match get("DAILY_PINS") {
            None => 1,
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(n) if n < 1 => 1,
                Ok(n) => usize::try_from(n).unwrap_or_else(|_| {
                    tracing::warn!("DAILY_PINS {} does not fit this platform, using {}", n, usize::MAX);
                    usize::MAX
                }),
                Err(_) => {
                    tracing::warn!("Invalid DAILY_PINS '{}', falling back to 1", raw);
                    1
                }
            },
        };

        Config {
            openai_api_key: get("OPENAI_API_KEY"),
            pinterest_token: get("PINTEREST_ACCESS_TOKEN"),
            board_id: get("PINTEREST_BOARD_ID"),
            store_url: get("SPIRALWICK_STORE_URL"),
            brand: or("SPIRALWICK_BRAND", DEFAULT_BRAND),
            pins_per_run,
            utm_source: or("UTM_SOURCE", DEFAULT_UTM_SOURCE),
            utm_campaign: or("UTM_CAMPAIGN", DEFAULT_UTM_CAMPAIGN),
            dry_run: get("DRY_RUN").as_deref() == Some("1"),
            openai_base_url: or("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            pinterest_base_url: or("PINTEREST_BASE_URL", DEFAULT_PINTEREST_BASE_URL),
            text_model: or("OPENAI_TEXT_MODEL", DEFAULT_TEXT_MODEL),
            image_model: or("OPENAI_IMAGE_MODEL", DEFAULT_IMAGE_MODEL),
        }
    }

    /// Override the pin count, keeping the floor of one pin per run.
    pub fn with_pins_per_run(mut self, pins: usize) -> Self {
        self.pins_per_run = pins.max(1);
        self
    }

    /// Masked `(key, value)` pairs describing what is configured.
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("PINTEREST_BOARD_ID", self.board_id.clone().unwrap_or_else(|| "<unset>".to_string())),
            ("OPENAI_API_KEY", mask_secret(self.openai_api_key.as_deref())),
            ("PINTEREST_ACCESS_TOKEN", mask_secret(self.pinterest_token.as_deref())),
            ("SPIRALWICK_STORE_URL", self.store_url.clone().unwrap_or_else(|| "<unset>".to_string())),
            ("SPIRALWICK_BRAND", self.brand.clone()),
            ("DAILY_PINS", self.pins_per_run.to_string()),
            ("DRY_RUN", self.dry_run.to_string()),
        ]
    }

    pub fn log_summary(&self) {
        for (key, value) in self.summary() {
            tracing::info!("[env] {}: {}", key, value);
        }
    }
}
