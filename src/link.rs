//! Campaign tracking for outbound pin links.
use crate::config::Config;

pub const UTM_MEDIUM: &str = "social";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utm {
    pub source: String,
    pub medium: String,
    pub campaign: String,
}

impl Utm {
    pub fn from_config(config: &Config) -> Self {
        Utm {
            source: config.utm_source.clone(),
            medium: UTM_MEDIUM.to_string(),
            campaign: config.utm_campaign.clone(),
        }
    }
}

/// Append the UTM parameters to `url`.
///
/// Uses `&` as soon as the URL contains a `?`. Existing parameters are left
/// alone, even when that repeats a `utm_*` name.
pub fn build_link(url: &str, utm: &Utm) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}utm_source={}&utm_medium={}&utm_campaign={}",
        url, sep, utm.source, utm.medium, utm.campaign
    )
}
