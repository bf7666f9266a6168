//! Error types for fetching, parsing, conversion and configuration
//!
//! Every fallible operation in the library returns one of these through a
//! plain `Result`. Field extraction has no error type at all: a missing
//! field is `None`, not a failure.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request failed. Status: {status} {status_text}. URL: {url}")]
    HttpStatus {
        status: u16,
        status_text: String,
        url: String,
    },

    #[error("Failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("HTTP client error: {0}")]
    Client(String),
}

impl FetchError {
    pub fn http_status(status: reqwest::StatusCode, url: &str) -> Self {
        Self::HttpStatus {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            url: url.to_string(),
        }
    }

    pub fn decode(url: &str, message: impl Into<String>) -> Self {
        Self::Decode {
            url: url.to_string(),
            message: message.into(),
        }
    }

    /// HTTP status code, when the failure came from a non-success response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// URL of the request that failed
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Transport { url, .. }
            | Self::HttpStatus { url, .. }
            | Self::Body { url, .. }
            | Self::Decode { url, .. } => Some(url),
            Self::Client(_) => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("invalid exchange rate: {0:?}")]
    InvalidExchangeRate(String),

    #[error("exchange quote unavailable: {0}")]
    Quote(#[from] FetchError),
}

#[derive(Error, Debug, Clone)]
pub enum ParsingError {
    #[error("Invalid CSS selector for {field}: {selector} - {reason}")]
    InvalidSelector {
        field: String,
        selector: String,
        reason: String,
    },

    #[error("Invalid pattern for {field}: {reason}")]
    InvalidPattern { field: String, reason: String },
}

impl ParsingError {
    pub fn invalid_selector(field: &str, selector: &str, reason: impl ToString) -> Self {
        Self::InvalidSelector {
            field: field.to_string(),
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {source}")]
    Load {
        #[from]
        source: config::ConfigError,
    },

    #[error("Configuration validation failed: {message}")]
    Validation { message: String },
}

impl ConfigError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
pub type ConversionResult<T> = Result<T, ConversionError>;
pub type ParsingResult<T> = Result<T, ParsingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_error_carries_status_and_url() {
        let err = FetchError::http_status(reqwest::StatusCode::NOT_FOUND, "https://store/app/1?cc=AR");

        assert_eq!(err.status(), Some(404));
        assert_eq!(err.url(), Some("https://store/app/1?cc=AR"));
        assert!(!err.is_transport());
        let message = err.to_string();
        assert!(message.contains("404 Not Found"));
        assert!(message.contains("https://store/app/1?cc=AR"));
    }

    #[test]
    fn test_quote_failure_converts_into_conversion_error() {
        let err: ConversionError = FetchError::decode("https://quote", "expected value").into();
        assert!(matches!(err, ConversionError::Quote(FetchError::Decode { .. })));
    }
}
