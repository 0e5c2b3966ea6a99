//! Transport error taxonomy for REST calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Shown when a request never produced a usable server answer.
pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

/// Errors produced by REST API calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },

    /// A success body did not match the expected shape.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// An authenticated call was attempted with no stored token.
    #[error("no stored session token")]
    MissingToken,

    /// HTTP is only wired up in the browser build.
    #[error("API not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Server-provided `error` text, when present and non-empty.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message: Some(message), .. } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// Message to show the user.
    ///
    /// Server text wins; a bare rejection uses `rejected`; anything that never
    /// reached a server answer uses [`GENERIC_FAILURE`].
    pub fn user_message(&self, rejected: &str) -> String {
        if let Some(message) = self.server_message() {
            return message.to_owned();
        }
        match self {
            ApiError::Status { .. } => rejected.to_owned(),
            ApiError::Network(_) | ApiError::Decode(_) | ApiError::MissingToken | ApiError::Unavailable => {
                GENERIC_FAILURE.to_owned()
            }
        }
    }
}
