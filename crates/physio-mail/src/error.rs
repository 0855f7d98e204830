//! Mail and outbound HTTP error types.

use thiserror::Error;

/// Errors from the outbound HTTP layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::JsonError(e.to_string())
    }
}

/// Errors from sending an email.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MailError {
    /// The provider answered and refused the message.
    #[error("provider rejected message ({status}): {name}: {message}")]
    Rejected {
        status: u16,
        name: String,
        message: String,
    },

    /// The provider could not be reached or its answer could not be read.
    #[error("mail transport failed: {0}")]
    Transport(#[from] FetchError),

    /// The message itself is unusable (e.g. no recipients).
    #[error("invalid message: {0}")]
    InvalidMessage(String),
}

impl MailError {
    /// Whether the provider itself reported the failure.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
