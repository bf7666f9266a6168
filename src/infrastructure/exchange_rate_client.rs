//! Crypto-dollar quote client
//!
//! One fixed endpoint, fetched fresh on every call. The response status is
//! not inspected: a body that decodes into a quote is accepted whatever the
//! status line said, and anything else surfaces as a decode error.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use url::Url;

use super::errors::{FetchError, FetchResult};
use super::http_client::{HttpClient, read_body};
use crate::domain::constants::exchange::DOLAR_CRIPTO_URL;
use crate::domain::exchange::ExchangeQuote;

/// Source of the current exchange quote
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn fetch_latest_quote(&self) -> FetchResult<ExchangeQuote>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeConfig {
    pub quote_url: String,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            quote_url: DOLAR_CRIPTO_URL.to_string(),
        }
    }
}

pub struct DolarCriptoClient {
    http: Arc<HttpClient>,
    quote_url: Url,
}

impl DolarCriptoClient {
    pub fn new(http: Arc<HttpClient>, config: &ExchangeConfig) -> FetchResult<Self> {
        let quote_url = Url::parse(&config.quote_url)
            .map_err(|e| FetchError::Client(format!("Invalid quote URL '{}': {e}", config.quote_url)))?;
        Ok(Self { http, quote_url })
    }

    pub fn quote_url(&self) -> &Url {
        &self.quote_url
    }
}

#[async_trait]
impl QuoteProvider for DolarCriptoClient {
    async fn fetch_latest_quote(&self) -> FetchResult<ExchangeQuote> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let response = self.http.get_unchecked(&self.quote_url, headers).await?;
        let status = response.status();
        let body = read_body(response, &self.quote_url).await?;

        let quote: ExchangeQuote = serde_json::from_str(&body).map_err(|e| {
            FetchError::decode(self.quote_url.as_str(), format!("{e} (status {status})"))
        })?;

        tracing::debug!("Received quote: sell={} date={}", quote.sell, quote.date);
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http_client::HttpClientConfig;

    #[test]
    fn test_default_endpoint() {
        let http = Arc::new(HttpClient::new(&HttpClientConfig::default()).unwrap());
        let client = DolarCriptoClient::new(http, &ExchangeConfig::default()).unwrap();
        assert_eq!(
            client.quote_url().as_str(),
            "https://mercados.ambito.com/dolarcripto/variacion"
        );
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let http = Arc::new(HttpClient::new(&HttpClientConfig::default()).unwrap());
        let config = ExchangeConfig {
            quote_url: "::".to_string(),
        };
        assert!(DolarCriptoClient::new(http, &config).is_err());
    }
}
