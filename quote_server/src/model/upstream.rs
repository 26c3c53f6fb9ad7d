//! Payload published by the upstream quote provider.
//!
//! `GET /json/last/USD-BRL` answers with a single `USDBRL` object whose fields
//! are all text. Only `bid` is required; the rest default to empty text.
use serde::Deserialize;

/// Top-level upstream document.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamQuote {
    /// Last quote for the USD-BRL pair.
    #[serde(rename = "USDBRL")]
    pub usdbrl: ExchangeRate,
}

/// One currency pair quote as published upstream.
#[allow(missing_docs)]
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRate {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub codein: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub high: String,
    #[serde(default)]
    pub low: String,
    #[serde(default, rename = "varBid")]
    pub var_bid: String,
    #[serde(default, rename = "pctChange")]
    pub pct_change: String,
    pub bid: String,
    #[serde(default)]
    pub ask: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub create_date: String,
}
