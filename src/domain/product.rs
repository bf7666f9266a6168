use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::description::FREE_TIER_SENTINEL;

/// Currency of a scraped price. Only dollars and pesos take part in
/// conversion; any other code is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    Usd,
    Ars,
    Other(String),
}

impl Currency {
    pub fn code(&self) -> &str {
        match self {
            Self::Usd => "USD",
            Self::Ars => "ARS",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        let code = code.trim().to_ascii_uppercase();
        match code.as_str() {
            "USD" => Self::Usd,
            "ARS" => Self::Ars,
            _ => Self::Other(code),
        }
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self::from(code.as_str())
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code().to_string()
    }
}

/// Price as scraped: currency plus the decimal text from the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPrice {
    pub currency: Currency,
    pub value: String,
}

impl ProductPrice {
    pub fn new(currency: Currency, value: impl Into<String>) -> Self {
        Self {
            currency,
            value: value.into(),
        }
    }

    /// Compares the raw text against the free-tier sentinel; no float comparison.
    pub fn is_free(&self) -> bool {
        self.value == FREE_TIER_SENTINEL
    }
}

/// Raw extraction output. `None` means the page did not carry the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<ProductPrice>,
    pub image: Option<String>,
    pub video: Option<String>,
    pub developer: Option<String>,
    pub reviews: Option<String>,
}

/// Normalized product record, built once per fetch and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    id: String,
    title: String,
    description: String,
    price: Option<ProductPrice>,
    #[serde(rename = "imagesUrl")]
    image_urls: Vec<String>,
    #[serde(rename = "videosUrl")]
    video_urls: Option<Vec<String>>,
    developer: String,
    reviews: String,
}

impl ProductRecord {
    /// Absent text fields become empty strings here and nowhere earlier.
    pub fn from_fields(id: impl Into<String>, fields: ExtractedFields) -> Self {
        Self {
            id: id.into(),
            title: fields.title.unwrap_or_default(),
            description: fields.description.unwrap_or_default(),
            price: fields.price,
            image_urls: fields.image.into_iter().collect(),
            video_urls: fields.video.map(|url| vec![url]),
            developer: fields.developer.unwrap_or_default(),
            reviews: fields.reviews.unwrap_or_default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Option<&ProductPrice> {
        self.price.as_ref()
    }

    pub fn image_urls(&self) -> &[String] {
        &self.image_urls
    }

    pub fn video_urls(&self) -> Option<&[String]> {
        self.video_urls.as_deref()
    }

    pub fn developer(&self) -> &str {
        &self.developer
    }

    pub fn reviews(&self) -> &str {
        &self.reviews
    }
}
