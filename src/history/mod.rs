mod api;
mod model;
mod params;
mod wire;

pub use model::CoinPrice;
pub use params::Interval;

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::core::{CcClient, NetResult, conversions::datetime_to_millis};

/// Window queried when no period is set: the five days up to now.
const DEFAULT_LOOKBACK_DAYS: i64 = 5;

/// A builder for fetching the price history of a single coin.
#[derive(Clone)]
pub struct CoinHistoryBuilder {
    client: CcClient,
    coin_id: String,
    period: Option<(i64, i64)>,
    interval: Interval,
}

impl CoinHistoryBuilder {
    /// Creates a new `CoinHistoryBuilder` for a given coin id (e.g. `"bitcoin"`).
    ///
    /// The id is sent as a single percent-encoded path segment, so ids containing `/`
    /// or `?` cannot escape the `assets/{id}/history` route.
    pub fn new(client: &CcClient, coin_id: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            coin_id: coin_id.into(),
            period: None,
            interval: Interval::default(),
        }
    }

    /// Sets the queried period.
    ///
    /// Both ends may be in any time zone; they are sent as UTC epoch milliseconds.
    #[must_use]
    pub fn between<Tz1: TimeZone, Tz2: TimeZone>(
        mut self,
        start: DateTime<Tz1>,
        end: DateTime<Tz2>,
    ) -> Self {
        self.period = Some((datetime_to_millis(&start), datetime_to_millis(&end)));
        self
    }

    /// Sets the bucket size of each price point. (Default: `Interval::H6`)
    #[must_use]
    pub const fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Executes the request and returns the price points in chronological order.
    ///
    /// # Errors
    ///
    /// Returns the classified `NetworkError` if the request fails, the server answers
    /// with a non-2xx status, or the body does not match the expected shape.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(coin_id = %self.coin_id, interval = self.interval.as_str()))
    )]
    pub async fn fetch(self) -> NetResult<Vec<CoinPrice>> {
        let (start_ms, end_ms) = self.period.unwrap_or_else(default_period);
        api::fetch_history(&self.client, &self.coin_id, start_ms, end_ms, self.interval).await
    }
}

fn default_period() -> (i64, i64) {
    let end = Utc::now();
    let start = end - Duration::days(DEFAULT_LOOKBACK_DAYS);
    (datetime_to_millis(&start), datetime_to_millis(&end))
}
