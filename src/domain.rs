//! Domain module - core entities and value objects
//!
//! Product records, exchange quotes, money formatting and the fixed
//! constants of the two upstream sources.

pub mod constants;
pub mod exchange;
pub mod money;
pub mod product;

// Re-export commonly used items for convenience
pub use exchange::ExchangeQuote;
pub use money::{CurrencyFormatter, ToAmount, format_ars, format_usd, parse_formatted};
pub use product::{Currency, ExtractedFields, ProductPrice, ProductRecord};
