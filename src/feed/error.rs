//! Feed error types
//!
//! Every failure to obtain or decode the daily feed collapses into a single
//! user-facing message; the variants only exist for logs.

use thiserror::Error;

/// Message shown in place of the entry list whenever the feed cannot be loaded
pub const LOAD_ERROR_MESSAGE: &str = "No se pudieron cargar las normativas.";

/// Errors that can occur while loading the feed
#[derive(Error, Debug)]
pub enum FeedError {
    /// The server answered with a non-success status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The body was not a valid feed document
    #[error("Malformed feed: {0}")]
    Parse(String),

    /// Reading a local feed file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FeedError {
    /// The static message presented to readers, identical for every variant
    pub fn user_message(&self) -> &'static str {
        LOAD_ERROR_MESSAGE
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Parse(err.to_string())
    }
}

/// Result type alias for feed operations
pub type FeedResult<T> = Result<T, FeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FeedError::Status(404);
        assert_eq!(err.to_string(), "HTTP error! status: 404");

        let err = FeedError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_user_message_is_shared() {
        let errors = [
            FeedError::Status(500),
            FeedError::Network("timeout".to_string()),
            FeedError::Parse("expected value".to_string()),
        ];
        for err in &errors {
            assert_eq!(err.user_message(), LOAD_ERROR_MESSAGE);
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: FeedError = json_err.into();
        assert!(matches!(err, FeedError::Parse(_)));
    }
}
