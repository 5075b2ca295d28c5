use crate::{
    core::{CcClient, NetResult, net},
    history::{Interval, model::CoinPrice, wire::HistoryEnvelope},
};

pub(super) async fn fetch_history(
    client: &CcClient,
    coin_id: &str,
    start_ms: i64,
    end_ms: i64,
    interval: Interval,
) -> NetResult<Vec<CoinPrice>> {
    let url = client.url_with_segments(&["assets", coin_id, "history"]);

    let req = client.http().get(url).query(&[
        ("interval", interval.as_str().to_string()),
        ("start", start_ms.to_string()),
        ("end", end_ms.to_string()),
    ]);

    net::safe_call::<HistoryEnvelope, _>(req.send())
        .await
        .map(|envelope| envelope.data.into_iter().map(CoinPrice::from).collect())
}
