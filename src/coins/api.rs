use crate::{
    coins::{model::Coin, wire::AssetsEnvelope},
    core::{CcClient, NetResult, net},
};

pub(super) async fn fetch_coins(client: &CcClient) -> NetResult<Vec<Coin>> {
    let url = client.url_for("/assets");

    net::safe_call::<AssetsEnvelope, _>(client.http().get(url).send())
        .await
        .map(|envelope| envelope.data.into_iter().map(Coin::from).collect())
}
