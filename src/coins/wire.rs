use serde::Deserialize;

use crate::core::wire::{de_f64_from_any_number, de_u32_from_any_number};

#[derive(Deserialize)]
pub(crate) struct AssetsEnvelope {
    pub(crate) data: Vec<CoinDto>,
}

#[derive(Deserialize)]
pub(crate) struct CoinDto {
    pub(crate) id: String,
    #[serde(deserialize_with = "de_u32_from_any_number")]
    pub(crate) rank: u32,
    pub(crate) name: String,
    pub(crate) symbol: String,
    #[serde(rename = "marketCapUsd", deserialize_with = "de_f64_from_any_number")]
    pub(crate) market_cap_usd: f64,
    #[serde(rename = "priceUsd", deserialize_with = "de_f64_from_any_number")]
    pub(crate) price_usd: f64,
    #[serde(rename = "changePercent24Hr", deserialize_with = "de_f64_from_any_number")]
    pub(crate) change_percent_24hr: f64,
}
