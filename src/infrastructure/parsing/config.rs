//! Parsing configuration for HTML extraction
//!
//! Single source of truth for the store page selectors. Alternate page
//! layouts are expressed by overriding entries here, never by a second
//! extractor.

use serde::{Deserialize, Serialize};

/// How trailer URLs are located on a product page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VideoStrategy {
    /// Scan the raw markup for a CDN-hosted trailer URL
    #[default]
    TrailerRegex,
    /// Read a data attribute nested inside the media container
    MediaContainer,
}

/// CSS selectors for the store product page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorePageSelectors {
    pub title: String,
    pub description: String,

    /// Price is read from two meta nodes that must both be present
    pub price_currency: String,
    pub price_amount: String,

    pub image: String,
    pub image_attribute: String,

    pub developer: String,
    pub reviews: String,

    pub video_strategy: VideoStrategy,
    pub trailer_pattern: String,
    pub media_container: String,
    pub media_video_attribute: String,
}

impl Default for StorePageSelectors {
    fn default() -> Self {
        Self {
            title: "#appHubAppName".to_string(),
            description: ".game_description_snippet".to_string(),
            price_currency: "meta[itemprop='priceCurrency']".to_string(),
            price_amount: "meta[itemprop='price']".to_string(),
            image: ".game_header_image_full".to_string(),
            image_attribute: "src".to_string(),
            developer: "#developers_list".to_string(),
            reviews: "#review_summary_num_reviews".to_string(),
            video_strategy: VideoStrategy::TrailerRegex,
            trailer_pattern:
                r"https://(?:cdn|video)\.akamai\.steamstatic\.com/store_trailers/.*?\.(webm|mp4)"
                    .to_string(),
            media_container: "#highlight_player_area".to_string(),
            media_video_attribute: "data-mp4-source".to_string(),
        }
    }
}
