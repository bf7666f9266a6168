//! Dollar to peso conversion at the live crypto-dollar sell rate

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::exchange::ExchangeQuote;
use crate::infrastructure::errors::{ConversionError, ConversionResult};
use crate::infrastructure::exchange_rate_client::QuoteProvider;

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text.trim()).ok()
}

/// `amount` × the quote's sell rate, exact in decimal. Pure; no formatting.
pub fn convert(amount: &str, quote: &ExchangeQuote) -> ConversionResult<Decimal> {
    let amount_value =
        parse_decimal(amount).ok_or_else(|| ConversionError::InvalidAmount(amount.to_string()))?;
    let rate = parse_decimal(&quote.sell)
        .ok_or_else(|| ConversionError::InvalidExchangeRate(quote.sell.clone()))?;

    amount_value
        .checked_mul(rate)
        .ok_or_else(|| ConversionError::InvalidAmount(amount.to_string()))
}

/// Converts using a quote fetched fresh for every call
pub struct CurrencyConverter {
    quotes: Arc<dyn QuoteProvider>,
}

impl CurrencyConverter {
    pub fn new(quotes: Arc<dyn QuoteProvider>) -> Self {
        Self { quotes }
    }

    /// The amount is validated before any network traffic; a failed quote
    /// fetch comes back as `ConversionError::Quote` unchanged.
    pub async fn usd_to_ars(&self, amount: &str) -> ConversionResult<Decimal> {
        if parse_decimal(amount).is_none() {
            return Err(ConversionError::InvalidAmount(amount.to_string()));
        }

        let quote = self.quotes.fetch_latest_quote().await?;
        let converted = convert(amount, &quote)?;

        debug!("Converted USD {} to ARS {} at {}", amount, converted, quote.sell);
        Ok(converted)
    }
}
