use crate::common;
use coincap_rs::{Coin, CoinsBuilder};
use httpmock::Method::GET;

#[tokio::test]
async fn offline_coins_uses_recorded_fixture() {
    let server = common::setup_server();
    let mock = common::mock_assets(&server, 200, &common::fixture("assets.json"));

    let client = common::client_for(&server);
    let coins = CoinsBuilder::new(&client).fetch().await.unwrap();

    mock.assert();
    assert_eq!(coins.len(), 3);

    let ids: Vec<&str> = coins.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["bitcoin", "ethereum", "tether"], "wire order must be kept");
}

#[tokio::test]
async fn coin_fields_are_copied_verbatim() {
    let server = common::setup_server();
    let _mock = common::mock_assets(&server, 200, &common::fixture("assets.json"));

    let client = common::client_for(&server);
    let coins = CoinsBuilder::new(&client).fetch().await.unwrap();

    assert_eq!(
        coins[0],
        Coin {
            id: "bitcoin".into(),
            rank: 1,
            name: "Bitcoin".into(),
            symbol: "BTC".into(),
            market_cap_usd: 1_234_567_890_123.5,
            price_usd: 62_668.125,
            change_percent_24hr: -1.25,
        }
    );
}

#[tokio::test]
async fn numeric_strings_are_accepted() {
    let server = common::setup_server();
    let _mock = common::mock_assets(&server, 200, &common::fixture("assets.json"));

    let client = common::client_for(&server);
    let coins = CoinsBuilder::new(&client).fetch().await.unwrap();

    let eth = &coins[1];
    assert_eq!(eth.rank, 2);
    assert_eq!(eth.market_cap_usd, "371234567890.1234567890123456".parse::<f64>().unwrap());
    assert_eq!(eth.price_usd, "3093.6213157416442812".parse::<f64>().unwrap());
    assert_eq!(eth.change_percent_24hr, 2.5);

    let usdt = &coins[2];
    assert_eq!(usdt.market_cap_usd, 110_000_000_000.0);
    assert_eq!(usdt.price_usd, 1.0);
    assert_eq!(usdt.change_percent_24hr, 0.0);
}

#[tokio::test]
async fn requests_carry_json_content_type() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/assets")
            .header("content-type", "application/json");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data":[]}"#);
    });

    let client = common::client_for(&server);
    let coins = CoinsBuilder::new(&client).fetch().await.unwrap();

    mock.assert();
    assert!(coins.is_empty());
}

#[tokio::test]
async fn base_url_without_trailing_slash_is_normalized() {
    let server = common::setup_server();
    let mock = common::mock_assets(&server, 200, r#"{"data":[]}"#);

    let base = url::Url::parse(&server.url("/v2")).unwrap();
    let client = coincap_rs::CcClient::builder().base_url(base).build().unwrap();
    assert!(client.base_url().as_str().ends_with("/v2/"));

    CoinsBuilder::new(&client).fetch().await.unwrap();
    mock.assert();
}
