use serde::{Deserialize, Serialize};

/// Crypto-dollar quote as published by Ámbito. Every field stays text;
/// only `sell` is ever parsed, by the converter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeQuote {
    #[serde(rename = "compra")]
    pub buy: String,
    #[serde(rename = "venta")]
    pub sell: String,
    #[serde(rename = "valor", default)]
    pub value: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "variacion")]
    pub change: String,
    #[serde(rename = "class-variacion")]
    pub change_class: String,
    #[serde(rename = "variacion-nombre", default)]
    pub change_label: String,
}
