//! Error types for the remote API.

use thiserror::Error;

/// A failed exchange with the backend: the request never completed, the backend
/// answered with a non-success status, or the body could not be decoded.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("Transport error on {endpoint}: {message}")]
    Transport { endpoint: String, message: String },

    /// The backend answered with a non-success HTTP status.
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    /// The response body did not match the expected shape.
    #[error("Could not decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

impl ApiError {
    pub fn transport(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Transport {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// The endpoint the failed request was sent to.
    pub fn endpoint(&self) -> &str {
        match self {
            ApiError::Transport { endpoint, .. }
            | ApiError::Status { endpoint, .. }
            | ApiError::Decode { endpoint, .. } => endpoint,
        }
    }
}
