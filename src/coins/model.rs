use serde::Serialize;

use crate::coins::wire::CoinDto;

/// A listed coin with its current market figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coin {
    /// The API identifier (e.g. `"bitcoin"`), used for history lookups.
    pub id: String,
    /// Position in the market-cap ranking, starting at 1.
    pub rank: u32,
    /// Display name (e.g. `"Bitcoin"`).
    pub name: String,
    /// Ticker symbol (e.g. `"BTC"`).
    pub symbol: String,
    /// Market capitalization in USD.
    pub market_cap_usd: f64,
    /// Latest price in USD.
    pub price_usd: f64,
    /// Price change over the last 24 hours, in percent.
    pub change_percent_24hr: f64,
}

impl Coin {
    /// The USD amount the price moved over the last 24 hours.
    #[must_use]
    pub fn absolute_change_24hr(&self) -> f64 {
        self.price_usd * (self.change_percent_24hr / 100.0)
    }

    /// Whether the price went up over the last 24 hours.
    #[must_use]
    pub fn has_positive_trend(&self) -> bool {
        self.change_percent_24hr > 0.0
    }
}

impl From<CoinDto> for Coin {
    fn from(dto: CoinDto) -> Self {
        Self {
            id: dto.id,
            rank: dto.rank,
            name: dto.name,
            symbol: dto.symbol,
            market_cap_usd: dto.market_cap_usd,
            price_usd: dto.price_usd,
            change_percent_24hr: dto.change_percent_24hr,
        }
    }
}

/// A number paired with its display form: two decimals, `,` as thousands separator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayableNumber {
    pub value: f64,
    pub formatted: String,
}

impl DisplayableNumber {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            formatted: format_two_decimals(value),
        }
    }
}

impl From<f64> for DisplayableNumber {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

fn format_two_decimals(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // -0.001 rounds to "0.00" and should not keep its sign
    let sign = if value.is_sign_negative() && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}
