//! Response classification.
//!
//! Turns a raw transport result into a tagged [`Outcome`] without touching
//! the UI. [`super::policy`] decides what to show and where to navigate.

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;

use serde_json::Value;

use super::http::{RawResponse, TransportFailure};
use super::types::{SESSION_EXPIRED_CODE, SUCCESS_CODE};

/// Fallback notification text when a 2xx envelope carries no message.
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";
/// Fallback notification text when an HTTP failure body carries no message.
pub const SYSTEM_ERROR_MESSAGE: &str = "System error";

/// What a response means for the application.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// 2xx with application code 200. Carries the full envelope.
    Ok(Value),
    /// Application-level failure with a user-facing message.
    BusinessError { code: Option<i64>, message: String, body: Value },
    /// The backend says the login session is gone.
    SessionExpired { message: String, body: Value },
    /// No usable response.
    TransportError(TransportFailure),
}

/// Classify a transport result.
pub fn classify(result: Result<RawResponse, TransportFailure>) -> Outcome {
    let response = match result {
        Ok(response) => response,
        Err(failure) => return Outcome::TransportError(failure),
    };

    if response.is_success() {
        let body = parse_body(&response.body);
        let code = body_code(&body);
        if code == Some(SUCCESS_CODE) {
            return Outcome::Ok(body);
        }
        let message = body_message(&body).unwrap_or_else(|| REQUEST_FAILED_MESSAGE.to_owned());
        return Outcome::BusinessError { code, message, body };
    }

    if response.body.trim().is_empty() {
        return Outcome::TransportError(TransportFailure::Status(response.status));
    }

    let body = parse_body(&response.body);
    let code = body_code(&body);
    let message = body_message(&body).unwrap_or_else(|| SYSTEM_ERROR_MESSAGE.to_owned());
    if code == Some(SESSION_EXPIRED_CODE) {
        Outcome::SessionExpired { message, body }
    } else {
        Outcome::BusinessError { code, message, body }
    }
}

/// Parse a body as JSON, keeping non-JSON text as a string value.
fn parse_body(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

fn body_code(body: &Value) -> Option<i64> {
    body.get("code").and_then(Value::as_i64)
}

fn body_message(body: &Value) -> Option<String> {
    body.get("msg")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}
