use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::history::wire::CoinPriceDto;

/// The price of a coin at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoinPrice {
    pub price_usd: f64,
    pub date_time: DateTime<Utc>,
}

impl From<CoinPriceDto> for CoinPrice {
    fn from(dto: CoinPriceDto) -> Self {
        Self {
            price_usd: dto.price_usd,
            date_time: dto.time,
        }
    }
}
