use thiserror::Error;

/// Classified failure of a network call.
///
/// The set is closed so callers can map every variant to a message exhaustively.
/// The `Display` text is the user-facing message for the variant.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkError {
    /// The host could not be reached (DNS resolution, refused or unreachable connection).
    #[error("Couldn't connect to the server. Please check your internet connection.")]
    NoInternet,

    /// The server answered 408, or no response arrived before the client timeout.
    #[error("The request timed out.")]
    RequestTimeout,

    /// The server answered 429.
    #[error("Oops, it seems like your quota is exceeded.")]
    TooManyRequests,

    /// The server answered with a 5xx status.
    #[error("Something went wrong on the server.")]
    ServerError,

    /// The payload did not have the expected shape.
    #[error("Couldn't parse the data.")]
    Serialization,

    /// Any other failure, including unexpected status codes.
    #[error("Oops, something went wrong.")]
    UnknownError,
}

impl NetworkError {
    /// Whether repeating the same request later may succeed.
    ///
    /// Nothing in this crate retries on its own; this only informs the caller.
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::NoInternet | Self::RequestTimeout | Self::TooManyRequests | Self::ServerError
        )
    }
}

/// Error raised while configuring a [`CcClient`](crate::CcClient).
#[derive(Debug, Error)]
pub enum CcError {
    /// The underlying HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The URL parsed but cannot be used as a base for relative paths.
    #[error("URL cannot be used as a base: {0}")]
    InvalidBaseUrl(String),
}
