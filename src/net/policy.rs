//! Response policy: the UI side effects of a classified response.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every API call funnels through [`apply`], so error toasts and the
//! session-expiry redirect behave the same for every page. The concrete
//! [`Notifier`] and [`Navigator`] live in `state`; tests record calls.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use serde_json::Value;

use super::api::is_current_user_probe;
use super::classify::Outcome;
use super::http::TransportFailure;
use crate::error::ApiError;
use crate::routes;

/// Sink for user-visible messages.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);

    fn success(&self, message: &str) {
        let _ = message;
    }
}

/// Access to the router from outside the component tree.
pub trait Navigator: Send + Sync {
    /// Path of the route currently displayed.
    fn current_path(&self) -> String;

    /// Request navigation to `path`.
    fn push(&self, path: &str);
}

/// Apply notification and redirect rules to `outcome`.
///
/// `request_path` is the API path that produced the response; it identifies
/// the current-user probe, whose session expiry redirects without a toast.
///
/// # Errors
///
/// Returns the rejection for every outcome other than [`Outcome::Ok`].
pub fn apply(
    outcome: Outcome,
    request_path: &str,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
) -> Result<Value, ApiError> {
    match outcome {
        Outcome::Ok(body) => Ok(body),
        Outcome::BusinessError { code, message, body } => {
            notifier.error(&message);
            Err(ApiError::Business { code, message, body })
        }
        Outcome::SessionExpired { message, body } => {
            if should_redirect_to_login(&navigator.current_path()) {
                navigator.push(routes::USER_LOGIN);
            }
            if !is_current_user_probe(request_path) {
                notifier.error(&message);
            }
            Err(ApiError::SessionExpired { message, body })
        }
        Outcome::TransportError(failure) => {
            leptos::logging::warn!("request to {request_path} failed: {failure}");
            Err(failure.into())
        }
    }
}

/// The login page and the landing page never bounce to login.
pub fn should_redirect_to_login(current_path: &str) -> bool {
    !current_path.contains(routes::USER_LOGIN) && current_path != routes::HOME
}

impl From<TransportFailure> for ApiError {
    fn from(failure: TransportFailure) -> Self {
        match failure {
            TransportFailure::Network(reason) => Self::Transport(reason),
            TransportFailure::Timeout(ms) => Self::Timeout(ms),
            TransportFailure::Status(status) => Self::Status(status),
        }
    }
}
