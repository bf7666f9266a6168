//! Product record composition
//!
//! Fetches a store page, extracts its fields into a `ProductRecord` and
//! renders the display description with the dollar price and its peso
//! conversion. Building the description never fails: a conversion problem
//! is logged and the converted segment dropped.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use super::currency_converter::CurrencyConverter;
use crate::domain::constants::description::{FREE_MARKER, PRICE_LINE_BREAK, PRICE_SEPARATOR};
use crate::domain::money::{format_ars, format_usd};
use crate::domain::product::{Currency, ProductRecord};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::errors::FetchResult;
use crate::infrastructure::exchange_rate_client::{DolarCriptoClient, QuoteProvider};
use crate::infrastructure::http_client::HttpClient;
use crate::infrastructure::parsing::{FieldExtractor, StorePageParser};
use crate::infrastructure::store_client::{DocumentSource, SteamStoreClient};

pub struct ProductService {
    documents: Arc<dyn DocumentSource>,
    extractor: Arc<dyn FieldExtractor>,
    converter: CurrencyConverter,
}

impl ProductService {
    pub fn new(
        documents: Arc<dyn DocumentSource>,
        extractor: Arc<dyn FieldExtractor>,
        quotes: Arc<dyn QuoteProvider>,
    ) -> Self {
        Self {
            documents,
            extractor,
            converter: CurrencyConverter::new(quotes),
        }
    }

    /// Wire the live store and quote clients over one shared HTTP client.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let http = Arc::new(HttpClient::new(&config.http).context("Failed to build HTTP client")?);
        let store = SteamStoreClient::new(Arc::clone(&http), &config.store)
            .context("Failed to build store client")?;
        let quotes = DolarCriptoClient::new(http, &config.exchange)
            .context("Failed to build quote client")?;
        let parser = StorePageParser::with_config(&config.selectors)
            .context("Failed to compile store page selectors")?;

        Ok(Self::new(Arc::new(store), Arc::new(parser), Arc::new(quotes)))
    }

    /// Fetch and extract one product. Only the fetch can fail.
    pub async fn build_record(&self, id: &str) -> FetchResult<ProductRecord> {
        let markup = match self.documents.fetch_document(id).await {
            Ok(markup) => markup,
            Err(e) => {
                error!("Failed to fetch store page for app {}: {}", id, e);
                return Err(e);
            }
        };

        let fields = self.extractor.extract_fields(&markup);
        let record = ProductRecord::from_fields(id, fields);

        info!("Built record for app {} ({:?})", id, record.title());
        Ok(record)
    }

    /// Description plus price line.
    ///
    /// - no price, or the free-tier sentinel: `"{description} \r\n\n Free"`
    /// - dollars: `"{description} \r\n\n USD$x - ARS$ y 🧉"`, or just the
    ///   dollar amount when conversion fails
    /// - pesos: `"{description} \r\n\n ARS$ y 🧉"`, no quote needed
    /// - any other currency: the description alone, price unknown
    pub async fn build_description(&self, record: &ProductRecord) -> String {
        let description = record.description();

        let price = match record.price() {
            Some(price) if !price.is_free() => price,
            _ => return format!("{description}{PRICE_LINE_BREAK}{FREE_MARKER}"),
        };

        match &price.currency {
            Currency::Other(code) => {
                warn!("Leaving out the {} price of app {}", code, record.id());
                description.to_string()
            }
            Currency::Ars => format!("{description}{PRICE_LINE_BREAK}{}", format_ars(&price.value)),
            Currency::Usd => {
                let usd = format_usd(&price.value);
                match self.converter.usd_to_ars(&price.value).await {
                    Ok(ars) => format!(
                        "{description}{PRICE_LINE_BREAK}{usd}{PRICE_SEPARATOR}{}",
                        format_ars(ars)
                    ),
                    Err(e) => {
                        warn!("Showing dollar price only for app {}: {}", record.id(), e);
                        format!("{description}{PRICE_LINE_BREAK}{usd}")
                    }
                }
            }
        }
    }

    /// Record and description in one call
    pub async fn describe(&self, id: &str) -> FetchResult<(ProductRecord, String)> {
        let record = self.build_record(id).await?;
        let description = self.build_description(&record).await;
        Ok((record, description))
    }
}
