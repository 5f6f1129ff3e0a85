//! Errors returned by the REST client.

use thiserror::Error;

/// A failed API call.
///
/// Views never branch on the variant; they call [`ApiError::user_message`] and
/// show the result as a single banner string.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("server returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        /// The `message` field of the JSON error body, when there was one.
        message: Option<String>,
    },
    /// The request never completed or its body could not be decoded.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// The server-provided message, or `fallback` when there is none.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
