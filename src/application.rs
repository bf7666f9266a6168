//! Application layer module
//!
//! Use cases that orchestrate fetching, extraction, conversion and
//! formatting.

pub mod currency_converter;
pub mod product_service;

pub use currency_converter::{CurrencyConverter, convert};
pub use product_service::ProductService;
