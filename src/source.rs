//! The network-backed [`CoinDataSource`].

use chrono::{DateTime, FixedOffset};
use futures::future::{BoxFuture, FutureExt};

use crate::coins::{Coin, CoinsBuilder};
use crate::core::{CcClient, CoinDataSource, NetResult};
use crate::history::{CoinHistoryBuilder, CoinPrice, Interval};

/// Loads coins and their price history from the CoinCap REST API.
///
/// History is always requested in six-hour buckets. Use [`CoinHistoryBuilder`] directly for
/// another interval.
///
/// # Example
///
/// ```no_run
/// # use coincap_rs::{CcClient, CoinDataSource, RemoteCoinDataSource};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let source = RemoteCoinDataSource::new(CcClient::new()?);
///
/// match source.get_coins().await {
///     Ok(coins) => println!("{} coins listed", coins.len()),
///     Err(e) => println!("{e}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RemoteCoinDataSource {
    client: CcClient,
}

impl RemoteCoinDataSource {
    /// Creates a data source that issues every request through `client`.
    pub fn new(client: CcClient) -> Self {
        Self { client }
    }

    /// The client this source was built with.
    pub fn client(&self) -> &CcClient {
        &self.client
    }
}

impl CoinDataSource for RemoteCoinDataSource {
    fn get_coins(&self) -> BoxFuture<'_, NetResult<Vec<Coin>>> {
        CoinsBuilder::new(&self.client).fetch().boxed()
    }

    fn get_coin_history<'a>(
        &'a self,
        coin_id: &'a str,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> BoxFuture<'a, NetResult<Vec<CoinPrice>>> {
        CoinHistoryBuilder::new(&self.client, coin_id)
            .between(start, end)
            .interval(Interval::H6)
            .fetch()
            .boxed()
    }
}
