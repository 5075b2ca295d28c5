use url::Url;

/// Resolves `input` against the configured `base`.
///
/// - an input that already contains the base is returned unchanged;
/// - a leading `/` is dropped, since the base always ends with one;
/// - anything else is appended to the base.
///
/// ```
/// # use coincap_rs::core::endpoint::construct_url;
/// let base = url::Url::parse("https://api.coincap.io/v2/").unwrap();
/// assert_eq!(construct_url(&base, "/assets"), "https://api.coincap.io/v2/assets");
/// assert_eq!(construct_url(&base, "assets"), "https://api.coincap.io/v2/assets");
/// assert_eq!(
///     construct_url(&base, "https://api.coincap.io/v2/assets?limit=5"),
///     "https://api.coincap.io/v2/assets?limit=5"
/// );
/// ```
#[must_use]
pub fn construct_url(base: &Url, input: &str) -> String {
    let base = base.as_str();
    if input.contains(base) {
        input.to_string()
    } else if let Some(rest) = input.strip_prefix('/') {
        format!("{base}{rest}")
    } else {
        format!("{base}{input}")
    }
}
