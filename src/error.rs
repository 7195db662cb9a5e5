use thiserror::Error;

/// Errors that can occur while searching for recipes
#[derive(Error, Debug)]
pub enum SearchError {
    /// The search term was empty or whitespace only
    #[error("Search query cannot be empty")]
    EmptyQuery,

    /// Upstream answered with a non-success status
    #[error("Request failed with status {status}")]
    RequestFailed { status: u16 },

    /// Transport failure or an unreadable response body
    #[error("Network error: {cause}")]
    NetworkError { cause: String },

    /// A newer search on the same session replaced this one
    #[error("Search was superseded by a newer search")]
    Superseded,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::NetworkError {
            cause: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::NetworkError {
            cause: format!("malformed response: {}", err),
        }
    }
}
