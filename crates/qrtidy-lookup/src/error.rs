use thiserror::Error;

/// Errors returned by a single provider call.
///
/// [`crate::ProductResolver`] folds all of these into "no data from this
/// provider"; they only surface when an adapter is called directly.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Network, TLS or timeout failure. The request URL is stripped because
    /// provider credentials travel in the query string.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("unexpected HTTP status {status} from {context}")]
    UnexpectedStatus { status: u16, context: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}
