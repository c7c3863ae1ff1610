//! Rejection type shared by every API call.
//!
//! ERROR HANDLING
//! ==============
//! Interceptor-level side effects (notifications, redirects) have already
//! happened by the time a caller sees one of these; callers only decide how
//! their own view state reacts.

use serde_json::Value;

/// A rejected API outcome carrying the original body or failure reason.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success application code.
    #[error("request rejected ({code:?}): {message}")]
    Business { code: Option<i64>, message: String, body: Value },

    /// The backend reported that the login session has expired.
    #[error("session expired: {message}")]
    SessionExpired { message: String, body: Value },

    /// The backend answered with an HTTP failure and no usable body.
    #[error("HTTP status {0}")]
    Status(u16),

    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),

    /// The request exceeded the configured deadline.
    #[error("timeout of {0}ms exceeded")]
    Timeout(u64),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// A success envelope did not match the expected payload shape.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for inline display next to a form.
    pub fn display_message(&self) -> String {
        match self {
            Self::Business { message, .. } | Self::SessionExpired { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
