use thiserror::Error;

/// Errors returned by the store directory client.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Network or TLS failure from the underlying HTTP client, or a non-2xx
    /// HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The directory service answered with a non-`SUCCESS` envelope.
    #[error("store directory API error ({status}): {message}")]
    Api { status: String, message: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The requested search radius was zero or negative. Checked before any
    /// request goes out.
    #[error("search radius {radius} is out of range; it must be greater than zero miles")]
    RadiusOutOfRange { radius: f64 },

    /// The configured base URL did not parse.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
