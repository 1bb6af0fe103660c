//! Feed API error types

use thiserror::Error;

/// Feed error with classification
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FeedError {
    pub kind: FeedErrorKind,
    pub message: String,
}

impl FeedError {
    pub fn new(kind: FeedErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(FeedErrorKind::Network, message)
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::new(FeedErrorKind::Auth, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(FeedErrorKind::Decode, message)
    }

    /// Classify a non-success HTTP response
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        match status.as_u16() {
            401 | 403 => Self::auth(format!("Authentication failed: {body}")),
            429 => Self::new(FeedErrorKind::RateLimit, format!("Rate limited: {body}")),
            400..=499 => Self::new(FeedErrorKind::InvalidRequest, format!("Invalid request ({status}): {body}")),
            500..=599 => Self::new(FeedErrorKind::ServerError, format!("Server error ({status}): {body}")),
            _ => Self::new(FeedErrorKind::Unknown, format!("HTTP {status}: {body}")),
        }
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::network(format!("Request timeout: {e}"))
        } else if e.is_connect() {
            Self::network(format!("Connection failed: {e}"))
        } else if e.is_decode() {
            Self::decode(format!("Failed to decode response: {e}"))
        } else {
            Self::new(FeedErrorKind::Unknown, format!("Request failed: {e}"))
        }
    }
}

/// Error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedErrorKind {
    /// Network issues, timeouts, dropped streams
    Network,
    /// Rejected access token (401, 403)
    Auth,
    /// Rate limited (429)
    RateLimit,
    /// Other 4xx
    InvalidRequest,
    /// 5xx
    ServerError,
    /// Response body did not match the expected shape
    Decode,
    Unknown,
}
