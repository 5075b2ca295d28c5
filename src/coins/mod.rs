mod api;
mod model;
mod wire;

pub use model::{Coin, DisplayableNumber};

use crate::core::{CcClient, NetResult};

/// A builder for listing the coins the API tracks.
pub struct CoinsBuilder {
    client: CcClient,
}

impl CoinsBuilder {
    /// Creates a new `CoinsBuilder`.
    pub fn new(client: &CcClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// Executes the request and returns the coins in ranking order.
    ///
    /// # Errors
    ///
    /// Returns the classified `NetworkError` if the request fails, the server answers
    /// with a non-2xx status, or the body does not match the expected shape.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch(self) -> NetResult<Vec<Coin>> {
        api::fetch_coins(&self.client).await
    }
}
