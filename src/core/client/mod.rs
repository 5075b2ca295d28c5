//! Public client surface + builder.
//! Defaults (UA, base URL) live in `constants`.

mod constants;

use std::time::Duration;

use constants::{DEFAULT_BASE_URL, USER_AGENT};
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use url::Url;

use crate::core::CcError;
use crate::core::endpoint::construct_url;

/// Thin wrapper that holds a configured HTTP client and the API base URL.
///
/// Cloning is cheap: clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct CcClient {
    http: Client,
    base_url: Url,
}

impl CcClient {
    /// Create a new builder.
    pub fn builder() -> CcClientBuilder {
        CcClientBuilder::default()
    }

    /// Builds a client with every setting at its default.
    ///
    /// # Errors
    ///
    /// Returns a `CcError` if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, CcError> {
        Self::builder().build()
    }

    /// The base every request path is resolved against. Always ends with `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn url_for(&self, path: &str) -> String {
        construct_url(&self.base_url, path)
    }

    /// Appends `segments` to the base path, percent-encoding each one so that `/`, `?`
    /// and `#` inside a segment stay part of it.
    pub(crate) fn url_with_segments(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `normalize_base` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/* ----------------------- Builder ----------------------- */

/// Configures and builds a [`CcClient`].
///
/// Every setting is optional. Unset values fall back to the default user agent, the
/// build-time base URL, and no timeouts.
#[derive(Default)]
pub struct CcClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl CcClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API base (e.g., `https://api.coincap.io/v2/`).
    ///
    /// A missing trailing `/` is added on `build`.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns a `CcError` if the base URL cannot serve as a base or the HTTP client
    /// fails to initialize.
    pub fn build(self) -> Result<CcClient, CcError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let base_url = normalize_base(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .default_headers(headers);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(CcClient { http, base_url })
    }
}

fn normalize_base(mut url: Url) -> Result<Url, CcError> {
    if url.cannot_be_a_base() {
        return Err(CcError::InvalidBaseUrl(url.to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
