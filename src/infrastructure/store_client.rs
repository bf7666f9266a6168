//! Storefront document fetcher
//!
//! Retrieves the raw markup of a product page. The store varies content by
//! detected region and locale, so requests carry a region query parameter,
//! an accept-language header, a browser user agent and a region cookie.
//! No retries happen here.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{ACCEPT_LANGUAGE, COOKIE, HeaderMap, HeaderValue, USER_AGENT};
use serde::{Deserialize, Serialize};
use url::Url;

use super::errors::{FetchError, FetchResult};
use super::http_client::HttpClient;
use crate::domain::constants::store;

/// Source of raw product page markup
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch_document(&self, id: &str) -> FetchResult<String>;
}

/// Store request settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub base_url: String,
    /// Sent as `?cc=`; `None` lets the store pick
    pub region: Option<String>,
    pub user_agent: String,
    pub accept_language: String,
    pub cookie: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: store::BASE_URL.to_string(),
            region: Some(store::DEFAULT_REGION.to_string()),
            user_agent: store::DEFAULT_USER_AGENT.to_string(),
            accept_language: store::DEFAULT_ACCEPT_LANGUAGE.to_string(),
            cookie: Some(store::DEFAULT_COOKIE.to_string()),
        }
    }
}

pub struct SteamStoreClient {
    http: Arc<HttpClient>,
    base_url: Url,
    headers: HeaderMap,
    region: Option<String>,
}

impl SteamStoreClient {
    pub fn new(http: Arc<HttpClient>, config: &StoreConfig) -> FetchResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::Client(format!("Invalid store base URL '{}': {e}", config.base_url)))?;

        Ok(Self {
            http,
            base_url,
            headers: build_headers(config)?,
            region: config.region.clone().filter(|r| !r.trim().is_empty()),
        })
    }

    /// `{base}/app/{id}`, plus `?cc={region}` when a region is configured.
    /// Also the public link to the product page.
    pub fn product_url(&self, id: &str) -> FetchResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::Client(format!("Store base URL cannot hold a path: {}", self.base_url)))?
            .pop_if_empty()
            .push("app")
            .push(id);

        if let Some(region) = &self.region {
            url.query_pairs_mut().append_pair("cc", region);
        }
        Ok(url)
    }
}

#[async_trait]
impl DocumentSource for SteamStoreClient {
    async fn fetch_document(&self, id: &str) -> FetchResult<String> {
        let url = self.product_url(id)?;
        self.http.get_text(&url, self.headers.clone()).await
    }
}

fn build_headers(config: &StoreConfig) -> FetchResult<HeaderMap> {
    let mut headers = HeaderMap::new();

    let entries = [
        (USER_AGENT, Some(config.user_agent.as_str())),
        (ACCEPT_LANGUAGE, Some(config.accept_language.as_str())),
        (COOKIE, config.cookie.as_deref()),
    ];
    for (name, value) in entries {
        let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
            continue;
        };
        let value = HeaderValue::from_str(value)
            .map_err(|e| FetchError::Client(format!("Invalid {name} header: {e}")))?;
        headers.insert(name, value);
    }

    Ok(headers)
}
