//! Infrastructure layer: HTTP transport, upstream clients, HTML parsing,
//! configuration and logging.

pub mod config;
pub mod errors;
pub mod exchange_rate_client;
pub mod http_client;
pub mod logging;
pub mod parsing;
pub mod store_client;

// Re-export commonly used items
pub use config::{AppConfig, ConfigManager, LoggingConfig};
pub use errors::{
    ConfigError, ConversionError, ConversionResult, FetchError, FetchResult, ParsingError,
    ParsingResult,
};
pub use exchange_rate_client::{DolarCriptoClient, ExchangeConfig, QuoteProvider};
pub use http_client::{HttpClient, HttpClientConfig};
pub use logging::{get_log_directory, init_logging_with_config};
pub use parsing::{FieldExtractor, StorePageParser, StorePageSelectors, VideoStrategy};
pub use store_client::{DocumentSource, SteamStoreClient, StoreConfig};
