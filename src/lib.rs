//! coincap-rs: async client for the CoinCap REST API.
//!
//! Lists coins (`GET assets`) and fetches per-coin price history
//! (`GET assets/{id}/history`). Every call resolves to a [`NetResult`]: either the mapped
//! domain values or one of the six [`NetworkError`] kinds.

pub mod coins;
pub mod core;
pub mod history;
mod source;

pub use coins::{Coin, CoinsBuilder, DisplayableNumber};
pub use crate::core::{
    CcClient, CcClientBuilder, CcError, CoinDataSource, NetResult, NetworkError, ResultExt,
};
pub use history::{CoinHistoryBuilder, CoinPrice, Interval};
pub use source::RemoteCoinDataSource;
