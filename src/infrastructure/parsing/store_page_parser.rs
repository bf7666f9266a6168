//! Store product page parser
//!
//! Pulls title, description, price, header image, trailer, developer and
//! review count out of a Steam product page. Extraction is best-effort: a
//! field whose node or attribute is missing resolves to `None` and is
//! logged at debug level, the parse as a whole never fails.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use super::FieldExtractor;
use super::config::{StorePageSelectors, VideoStrategy};
use crate::domain::product::{Currency, ExtractedFields, ProductPrice};
use crate::infrastructure::errors::{ParsingError, ParsingResult};

const DEFAULT_PRICE_CURRENCY: &str = "USD";
const DEFAULT_PRICE_AMOUNT: &str = "0.00";

enum VideoExtractor {
    TrailerRegex(Regex),
    MediaContainer {
        container: Selector,
        source: Selector,
        attribute: String,
    },
}

/// Parser for the storefront product page
pub struct StorePageParser {
    title: Selector,
    description: Selector,
    price_currency: Selector,
    price_amount: Selector,
    image: Selector,
    image_attribute: String,
    developer: Selector,
    reviews: Selector,
    video: VideoExtractor,
}

impl StorePageParser {
    /// Create a parser with the default selector table
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&StorePageSelectors::default())
    }

    /// Create parser with custom selector configuration
    pub fn with_config(selectors: &StorePageSelectors) -> ParsingResult<Self> {
        let video = match selectors.video_strategy {
            VideoStrategy::TrailerRegex => {
                let pattern = Regex::new(&selectors.trailer_pattern).map_err(|e| {
                    ParsingError::InvalidPattern {
                        field: "trailer_pattern".to_string(),
                        reason: e.to_string(),
                    }
                })?;
                VideoExtractor::TrailerRegex(pattern)
            }
            VideoStrategy::MediaContainer => {
                let attribute = selectors.media_video_attribute.clone();
                VideoExtractor::MediaContainer {
                    container: compile("media_container", &selectors.media_container)?,
                    source: compile("media_video_attribute", &format!("[{attribute}]"))?,
                    attribute,
                }
            }
        };

        Ok(Self {
            title: compile("title", &selectors.title)?,
            description: compile("description", &selectors.description)?,
            price_currency: compile("price_currency", &selectors.price_currency)?,
            price_amount: compile("price_amount", &selectors.price_amount)?,
            image: compile("image", &selectors.image)?,
            image_attribute: selectors.image_attribute.clone(),
            developer: compile("developer", &selectors.developer)?,
            reviews: compile("reviews", &selectors.reviews)?,
            video,
        })
    }

    fn extract_title(&self, html: &Html) -> Option<String> {
        first_text(html, &self.title)
    }

    fn extract_description(&self, html: &Html) -> Option<String> {
        first_text(html, &self.description)
    }

    /// Both meta nodes or nothing; never a half-filled price.
    fn extract_price(&self, html: &Html) -> Option<ProductPrice> {
        let currency_node = html.select(&self.price_currency).next()?;
        let amount_node = html.select(&self.price_amount).next()?;

        let currency = Currency::from(attribute_or(currency_node, "content", DEFAULT_PRICE_CURRENCY));
        if let Currency::Other(code) = &currency {
            warn!("Price listed in {}, which is not converted", code);
        }

        Some(ProductPrice::new(
            currency,
            attribute_or(amount_node, "content", DEFAULT_PRICE_AMOUNT),
        ))
    }

    fn extract_image(&self, html: &Html) -> Option<String> {
        html.select(&self.image)
            .next()
            .and_then(|node| node.value().attr(&self.image_attribute))
            .and_then(non_blank)
    }

    fn extract_video(&self, raw_markup: &str, html: &Html) -> Option<String> {
        match &self.video {
            VideoExtractor::TrailerRegex(pattern) => {
                pattern.find(raw_markup).map(|m| m.as_str().to_string())
            }
            VideoExtractor::MediaContainer {
                container,
                source,
                attribute,
            } => html
                .select(container)
                .flat_map(|area| area.select(source))
                .filter_map(|node| node.value().attr(attribute))
                .find_map(non_blank),
        }
    }

    fn extract_developer(&self, html: &Html) -> Option<String> {
        let list = html.select(&self.developer).next()?;
        let first = list.children().find_map(ElementRef::wrap)?;
        non_blank(&first.text().collect::<String>())
    }

    /// The review input can repeat across page sections; the first usable value wins.
    fn extract_reviews(&self, html: &Html) -> Option<String> {
        html.select(&self.reviews)
            .filter_map(|node| node.value().attr("value"))
            .find_map(non_blank)
    }
}

impl FieldExtractor for StorePageParser {
    fn extract_fields(&self, raw_markup: &str) -> ExtractedFields {
        let html = Html::parse_document(raw_markup);

        let fields = ExtractedFields {
            title: self.extract_title(&html),
            description: self.extract_description(&html),
            price: self.extract_price(&html),
            image: self.extract_image(&html),
            video: self.extract_video(raw_markup, &html),
            developer: self.extract_developer(&html),
            reviews: self.extract_reviews(&html),
        };

        log_missing(&fields);
        fields
    }
}

fn compile(field: &str, selector: &str) -> ParsingResult<Selector> {
    Selector::parse(selector).map_err(|e| ParsingError::invalid_selector(field, selector, e))
}

fn first_text(html: &Html, selector: &Selector) -> Option<String> {
    let node = html.select(selector).next()?;
    non_blank(&node.text().collect::<String>())
}

fn attribute_or(node: ElementRef<'_>, name: &str, default: &str) -> String {
    node.value()
        .attr(name)
        .and_then(non_blank)
        .unwrap_or_else(|| default.to_string())
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn log_missing(fields: &ExtractedFields) {
    let checks = [
        ("title", fields.title.is_none()),
        ("description", fields.description.is_none()),
        ("price", fields.price.is_none()),
        ("image", fields.image.is_none()),
        ("video", fields.video.is_none()),
        ("developer", fields.developer.is_none()),
        ("reviews", fields.reviews.is_none()),
    ];
    for (field, missing) in checks {
        if missing {
            debug!("Field '{}' not found on store page", field);
        }
    }
}
