/*
[INPUT]:  Error sources (WebSocket transport, decoding, validation)
[OUTPUT]: Structured error types for the feed crate
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the quote feed
#[derive(Error, Debug)]
pub enum FeedError {
    /// WebSocket transport failed
    #[error("WebSocket error: {0}")]
    WebSocket(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Snapshot decoded but failed validation
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Connect called while a subscription is already live
    #[error("feed already connected")]
    AlreadyConnected,

    /// Operation requires a live subscription
    #[error("feed not connected")]
    NotConnected,
}

impl FeedError {
    /// Check if the error comes from the decode path (dropped frame)
    /// rather than the connection lifecycle.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            FeedError::Serialization(_) | FeedError::InvalidSnapshot(_)
        )
    }
}

/// Result type alias for feed operations
pub type Result<T> = std::result::Result<T, FeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_classification() {
        let err = FeedError::InvalidSnapshot("negative volume".to_string());
        assert!(err.is_decode_error());
        assert!(!FeedError::AlreadyConnected.is_decode_error());
        assert!(!FeedError::WebSocket("reset".to_string()).is_decode_error());
    }
}
