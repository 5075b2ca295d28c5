use chrono::{DateTime, FixedOffset};
use futures::future::BoxFuture;

use crate::coins::Coin;
use crate::core::NetResult;
use crate::history::CoinPrice;

/// A source of coin listings and price history.
///
/// Consumers depend on this trait rather than on [`RemoteCoinDataSource`](crate::RemoteCoinDataSource)
/// so that tests can hand in a fake returning canned results without touching the network.
/// The trait is object safe; `&dyn CoinDataSource` and `Arc<dyn CoinDataSource>` both work.
pub trait CoinDataSource: Send + Sync {
    /// Lists all coins, in the order the source ranks them.
    fn get_coins(&self) -> BoxFuture<'_, NetResult<Vec<Coin>>>;

    /// Fetches the price history of `coin_id` between `start` and `end`.
    ///
    /// The offsets of `start` and `end` only affect how the instants are written, not which
    /// instants are queried.
    fn get_coin_history<'a>(
        &'a self,
        coin_id: &'a str,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> BoxFuture<'a, NetResult<Vec<CoinPrice>>>;
}
