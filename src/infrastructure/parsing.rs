//! HTML parsing infrastructure
//!
//! Trait-based extraction over a single, configurable selector table.

pub mod config;
pub mod store_page_parser;

// Re-export public types
pub use config::{StorePageSelectors, VideoStrategy};
pub use store_page_parser::StorePageParser;

use crate::domain::product::ExtractedFields;

/// Best-effort field extraction from raw page markup.
///
/// Implementations never fail; a field the page does not carry is `None`.
pub trait FieldExtractor: Send + Sync {
    fn extract_fields(&self, raw_markup: &str) -> ExtractedFields;
}
