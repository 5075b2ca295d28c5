//! Centralized constants for the default endpoint and UA.

/// Default UA sent with every request.
pub(crate) const USER_AGENT: &str = concat!("coincap-rs/", env!("CARGO_PKG_VERSION"));

/// CoinCap REST base. Overridable at build time through `COINCAP_BASE_URL`.
pub(crate) const DEFAULT_BASE_URL: &str = match option_env!("COINCAP_BASE_URL") {
    Some(url) => url,
    None => "https://api.coincap.io/v2/",
};
