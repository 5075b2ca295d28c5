use std::time::Duration;

use crate::common;
use chrono::{TimeZone, Utc};
use coincap_rs::{
    CcClient, CoinDataSource, CoinHistoryBuilder, CoinsBuilder, NetworkError, RemoteCoinDataSource,
};
use httpmock::Method::GET;

fn unreachable_client() -> CcClient {
    CcClient::builder()
        .base_url(common::unreachable_base())
        .build()
        .unwrap()
}

#[tokio::test]
async fn refused_connection_maps_to_no_internet_for_coins() {
    let client = unreachable_client();
    let err = CoinsBuilder::new(&client).fetch().await.unwrap_err();
    assert_eq!(err, NetworkError::NoInternet);
}

#[tokio::test]
async fn refused_connection_maps_to_no_internet_for_history() {
    let client = unreachable_client();
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    let err = CoinHistoryBuilder::new(&client, "bitcoin")
        .between(start, end)
        .fetch()
        .await
        .unwrap_err();
    assert_eq!(err, NetworkError::NoInternet);
}

#[tokio::test]
async fn client_timeout_maps_to_request_timeout() {
    let server = common::setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/v2/assets");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data":[]}"#)
            .delay(Duration::from_secs(3));
    });

    let client = common::client_with_timeout(&server, Duration::from_millis(200));
    let err = CoinsBuilder::new(&client).fetch().await.unwrap_err();

    assert_eq!(err, NetworkError::RequestTimeout);
}

#[tokio::test]
async fn corrupt_gzip_body_maps_to_serialization() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/assets");
        then.status(200)
            .header("content-encoding", "gzip")
            .header("content-type", "application/json")
            .body("this is not gzip");
    });

    let client = common::client_for(&server);
    let err = CoinsBuilder::new(&client).fetch().await.unwrap_err();

    mock.assert();
    assert_eq!(err, NetworkError::Serialization);
}

#[tokio::test]
async fn aborted_task_surfaces_as_cancellation() {
    let server = common::setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/v2/assets");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data":[]}"#)
            .delay(Duration::from_secs(3));
    });

    let source = RemoteCoinDataSource::new(common::client_for(&server));
    let handle = tokio::spawn(async move { source.get_coins().await });

    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.abort();

    let join_err = handle.await.unwrap_err();
    assert!(join_err.is_cancelled(), "expected cancellation, got {join_err:?}");
}

#[tokio::test]
async fn dropped_call_produces_no_result() {
    let server = common::setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/v2/assets");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data":[]}"#)
            .delay(Duration::from_secs(3));
    });

    let source = RemoteCoinDataSource::new(common::client_for(&server));
    let outcome = tokio::time::timeout(Duration::from_millis(100), source.get_coins()).await;

    assert!(outcome.is_err(), "the call must be cut off, got {outcome:?}");
}
