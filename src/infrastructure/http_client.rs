//! HTTP client for store and quote requests with rate limiting
//!
//! Wraps a single `reqwest::Client`. Transport failures are reported as
//! `FetchError::Transport`; whether a non-success status is an error is
//! up to the caller (`get` checks it, `get_unchecked` does not).

use std::num::NonZeroU32;
use std::time::Duration;

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, direct::NotKeyed},
};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use url::Url;

use super::errors::{FetchError, FetchResult};

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Fallback user agent; per-request headers take precedence
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_requests_per_second: u32,
    pub follow_redirects: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("steam-price-card/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_seconds: 30,
            max_requests_per_second: 5,
            follow_redirects: true,
        }
    }
}

/// Rate-limited HTTP client shared by the store and quote clients
pub struct HttpClient {
    client: Client,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(config: &HttpClientConfig) -> FetchResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| FetchError::Client(format!("Invalid user agent: {e}")))?,
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_headers(headers)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()
            .map_err(|e| FetchError::Client(format!("Failed to create HTTP client: {e}")))?;

        let quota = Quota::per_second(
            NonZeroU32::new(config.max_requests_per_second)
                .ok_or_else(|| FetchError::Client("Rate limit must be greater than 0".to_string()))?,
        );

        Ok(Self {
            client,
            rate_limiter: RateLimiter::direct(quota),
        })
    }

    /// Send a GET and return the response whatever its status.
    pub async fn get_unchecked(&self, url: &Url, headers: HeaderMap) -> FetchResult<Response> {
        self.rate_limiter.until_ready().await;

        tracing::info!("Fetching URL: {}", url);

        self.client
            .get(url.clone())
            .headers(headers)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })
    }

    /// Send a GET; a non-success status becomes `FetchError::HttpStatus`.
    pub async fn get(&self, url: &Url, headers: HeaderMap) -> FetchResult<Response> {
        let response = self.get_unchecked(url, headers).await?;

        if !response.status().is_success() {
            return Err(FetchError::http_status(response.status(), url.as_str()));
        }

        tracing::debug!("Successfully fetched: {} ({})", url, response.status());
        Ok(response)
    }

    /// Fetch URL and return text content
    pub async fn get_text(&self, url: &Url, headers: HeaderMap) -> FetchResult<String> {
        let response = self.get(url, headers).await?;
        let text = read_body(response, url).await?;

        tracing::debug!("Read {} chars from {}", text.len(), url);
        Ok(text)
    }
}

/// Read a response body; failures after the status line are `FetchError::Body`.
pub async fn read_body(response: Response, url: &Url) -> FetchResult<String> {
    response.text().await.map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })
}
