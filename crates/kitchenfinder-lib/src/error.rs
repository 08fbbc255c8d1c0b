use thiserror::Error;

/// Convenient result alias for the kitchenfinder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Every variant carries a human-readable message via its `Display`
/// implementation; handlers surface that message directly in the
/// response envelope.
#[derive(Debug, Error)]
pub enum Error {
    /// An upstream response body was not valid JSON. The parse detail is
    /// intentionally dropped; callers only learn that the request could
    /// not be completed.
    #[error("Could not complete request")]
    InvalidResponseBody,

    /// The kitchen directory request failed. Replaces the underlying
    /// transport or parse cause.
    #[error("Could not complete kitchen directory request")]
    Directory,

    /// The directions request failed. Replaces the underlying transport
    /// or parse cause.
    #[error("Could not complete directions request")]
    Directions,

    /// The kitchen directory returned no kitchens, so there is nothing
    /// to rank.
    #[error("kitchen directory returned no kitchens")]
    EmptyDirectory,

    /// A configured endpoint was not a valid URL.
    #[error("invalid endpoint URL '{url}': {message}")]
    InvalidEndpoint { url: String, message: String },

    /// Raised when the directions API key is missing from configuration.
    #[error("missing directions API key (set GOOGLE_DIRECTIONS_API_KEY)")]
    MissingApiKey,

    /// Raised when a configuration value cannot be parsed.
    #[error("invalid configuration value for {name}: {message}")]
    InvalidConfig { name: String, message: String },

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
