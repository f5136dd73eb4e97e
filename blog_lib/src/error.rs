//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping normalized API failures
/// and adding serialization and input validation failures.
#[derive(Debug)]
pub enum BlogError {
    /// A normalized failure from the API client.
    Api(blog_api::RequestFailure),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for BlogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error {}: {}", e.code, e.message),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for BlogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Serialization(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<blog_api::RequestFailure> for BlogError {
    fn from(e: blog_api::RequestFailure) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for BlogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}
