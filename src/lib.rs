//! Steam Price Card - storefront product cards with live peso pricing
//!
//! Fetches a Steam store product page and the current crypto-dollar quote,
//! extracts a normalized product record and renders a description carrying
//! the dollar price and its conversion to Argentine pesos.

// Module declarations
pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod utils;

// Re-export the main entry points for easier access
pub use application::ProductService;
pub use domain::{ExchangeQuote, ProductPrice, ProductRecord};
pub use infrastructure::{AppConfig, ConversionError, FetchError, FetchResult};
pub use utils::is_bot;
