//! Locale-aware currency rendering
//!
//! Each supported currency is described by a `CurrencyFormatter` constant.
//! Formatters hold no state, so they are plain values instead of
//! process-wide instances and can be passed around or swapped in tests.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::constants::description::ARS_GLYPH;

const NBSP: &str = "\u{a0}";

/// Numeric input accepted by the formatters: a number or numeric text.
/// `None` means the input is not a finite number and renders as `NaN`.
pub trait ToAmount {
    fn to_amount(&self) -> Option<Decimal>;
}

impl ToAmount for Decimal {
    fn to_amount(&self) -> Option<Decimal> {
        Some(*self)
    }
}

impl ToAmount for f64 {
    fn to_amount(&self) -> Option<Decimal> {
        Decimal::from_f64(*self)
    }
}

impl ToAmount for str {
    fn to_amount(&self) -> Option<Decimal> {
        Decimal::from_str(self.trim()).ok()
    }
}

impl ToAmount for String {
    fn to_amount(&self) -> Option<Decimal> {
        self.as_str().to_amount()
    }
}

impl<T: ToAmount + ?Sized> ToAmount for &T {
    fn to_amount(&self) -> Option<Decimal> {
        (**self).to_amount()
    }
}

/// Rendering rules for one currency in one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormatter {
    code: &'static str,
    symbol: &'static str,
    symbol_spacing: &'static str,
    group_separator: char,
    decimal_separator: char,
    suffix: Option<&'static str>,
}

impl CurrencyFormatter {
    /// US dollars, en-US conventions: `USD$1,234.56`
    pub const USD: Self = Self {
        code: "USD",
        symbol: "$",
        symbol_spacing: "",
        group_separator: ',',
        decimal_separator: '.',
        suffix: None,
    };

    /// Argentine pesos, es-AR conventions: `ARS$ 1.234,56 🧉`
    pub const ARS: Self = Self {
        code: "ARS",
        symbol: "$",
        symbol_spacing: NBSP,
        group_separator: '.',
        decimal_separator: ',',
        suffix: Some(ARS_GLYPH),
    };

    /// Render with two decimals, rounding half away from zero.
    pub fn format(&self, amount: impl ToAmount) -> String {
        let (negative, number) = match amount.to_amount() {
            Some(value) => {
                let mut rounded = value
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                    .abs();
                rounded.rescale(2);
                let cents = rounded.mantissa().unsigned_abs();
                (value.is_sign_negative() && cents > 0, self.render_cents(cents))
            }
            None => (false, "NaN".to_string()),
        };

        let mut out = String::with_capacity(number.len() + 16);
        out.push_str(self.code);
        if negative {
            out.push('-');
        }
        out.push_str(self.symbol);
        out.push_str(self.symbol_spacing);
        out.push_str(&number);
        if let Some(suffix) = self.suffix {
            out.push(' ');
            out.push_str(suffix);
        }
        out
    }

    /// Inverse of [`format`](Self::format).
    pub fn parse(&self, text: &str) -> Option<Decimal> {
        let mut rest = text.trim().strip_prefix(self.code)?;
        if let Some(suffix) = self.suffix {
            rest = rest.trim_end().strip_suffix(suffix)?.trim_end();
        }

        let (negative, rest) = match rest.strip_prefix('-') {
            Some(unsigned) => (true, unsigned),
            None => (false, rest),
        };
        let rest = rest.strip_prefix(self.symbol)?;
        let rest = rest.strip_prefix(self.symbol_spacing).unwrap_or(rest);
        if !rest.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }

        let normalized: String = rest
            .chars()
            .filter(|c| *c != self.group_separator)
            .map(|c| if c == self.decimal_separator { '.' } else { c })
            .collect();
        let magnitude = Decimal::from_str(&normalized).ok()?;

        Some(if negative { -magnitude } else { magnitude })
    }

    fn render_cents(&self, cents: u128) -> String {
        let whole = (cents / 100).to_string();
        let fraction = cents % 100;

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(digit);
        }

        format!("{grouped}{}{fraction:02}", self.decimal_separator)
    }
}

pub fn format_usd(amount: impl ToAmount) -> String {
    CurrencyFormatter::USD.format(amount)
}

pub fn format_ars(amount: impl ToAmount) -> String {
    CurrencyFormatter::ARS.format(amount)
}

/// Recover the amount from a string produced by `formatter`.
pub fn parse_formatted(text: &str, formatter: &CurrencyFormatter) -> Option<Decimal> {
    formatter.parse(text)
}
