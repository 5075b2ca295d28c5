//! Request execution and failure classification.
//!
//! Failures are split in two stages. [`safe_call`] handles everything that goes wrong
//! *before* a response exists (connectivity, timeouts, transport decoding), and
//! [`response_to_result`] handles what a received response says (status code, body shape).

use std::future::Future;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::core::error::NetworkError;
use crate::core::result::NetResult;

/// Awaits `execute` and classifies its outcome into a [`NetResult`].
///
/// Transport failures are mapped by [`classify_transport`]; a received response is handed
/// to [`response_to_result`].
///
/// Dropping the returned future cancels the request and yields no value at all: a cancelled
/// call is never reported as a [`NetworkError`].
pub async fn safe_call<T, F>(execute: F) -> NetResult<T>
where
    T: DeserializeOwned,
    F: Future<Output = Result<reqwest::Response, reqwest::Error>>,
{
    let resp = match execute.await {
        Ok(resp) => resp,
        Err(e) => return Err(classify_transport(&e)),
    };

    response_to_result(resp).await
}

/// Maps a transport-level failure to a [`NetworkError`].
///
/// A client-side timeout counts as [`NetworkError::RequestTimeout`] even though no 408 was
/// received. It is checked first because a connect timeout also reports as a connect error.
#[must_use]
pub fn classify_transport(e: &reqwest::Error) -> NetworkError {
    let kind = if e.is_timeout() {
        NetworkError::RequestTimeout
    } else if e.is_connect() {
        NetworkError::NoInternet
    } else if e.is_decode() {
        NetworkError::Serialization
    } else {
        NetworkError::UnknownError
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(error = %e, classified = ?kind, "transport failure");

    kind
}

/// Maps a received response to a [`NetResult`].
///
/// Only 2xx bodies are read; every other status is classified by [`status_to_error`].
pub async fn response_to_result<T: DeserializeOwned>(resp: reqwest::Response) -> NetResult<T> {
    let status = resp.status();

    #[cfg(feature = "tracing")]
    tracing::debug!(status = status.as_u16(), url = %resp.url(), "response received");

    if !status.is_success() {
        return Err(status_to_error(status.as_u16()));
    }

    let body = get_text(resp).await?;
    decode(&body)
}

/// Classification of a non-2xx status code.
///
/// Callers are expected to have handled 200..=299 already; passing one of those yields
/// [`NetworkError::UnknownError`].
#[must_use]
pub const fn status_to_error(status: u16) -> NetworkError {
    match status {
        408 => NetworkError::RequestTimeout,
        429 => NetworkError::TooManyRequests,
        500..=599 => NetworkError::ServerError,
        _ => NetworkError::UnknownError,
    }
}

/// Decodes a success body. Unknown fields are ignored; a shape mismatch is
/// [`NetworkError::Serialization`].
pub fn decode<T: DeserializeOwned>(body: &str) -> NetResult<T> {
    serde_json::from_str(body).map_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::warn!(error = %_e, "response body did not match the expected shape");
        NetworkError::Serialization
    })
}

/// Classifies a status and body pair without a live response.
///
/// This is the same table [`response_to_result`] applies, usable on canned data.
pub fn classify_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> NetResult<T> {
    if status.is_success() {
        decode(body)
    } else {
        Err(status_to_error(status.as_u16()))
    }
}

async fn get_text(resp: reqwest::Response) -> NetResult<String> {
    resp.text().await.map_err(|e| classify_transport(&e))
}
