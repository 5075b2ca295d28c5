use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::wire::{de_f64_from_any_number, de_utc_millis};

#[derive(Deserialize)]
pub(crate) struct HistoryEnvelope {
    pub(crate) data: Vec<CoinPriceDto>,
}

#[derive(Deserialize)]
pub(crate) struct CoinPriceDto {
    #[serde(rename = "priceUsd", deserialize_with = "de_f64_from_any_number")]
    pub(crate) price_usd: f64,
    /// Epoch milliseconds on the wire.
    #[serde(deserialize_with = "de_utc_millis")]
    pub(crate) time: DateTime<Utc>,
}
