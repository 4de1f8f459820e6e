//! Client error types.

use checkout_core::ValidationError;
use serde_json::Value;

/// Errors that can occur when using the Checkout client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An argument was rejected before any request was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The server answered with a non-success status and no error envelope.
    #[error("HTTP {status}: {body}")]
    Transport {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The request could not be completed (connection failure, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The platform reported an error in its response envelope.
    #[error("Checkout error: {message} (code: {code})")]
    Remote {
        /// `errorMessage` from the envelope.
        message: String,
        /// `errorCode` from the envelope, as sent.
        code: Value,
    },

    /// A body could not be serialized or a response could not be parsed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A response parsed but lacks a required field.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Whether the error was raised locally before any request.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether the error came from the HTTP layer.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Http(_))
    }

    /// Whether the platform itself reported the error.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    /// HTTP status code associated with the error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
