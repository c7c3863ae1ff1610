//! Typed endpoint helpers for the user-center backend.
//!
//! ERROR HANDLING
//! ==============
//! Each helper returns the decoded envelope or the [`ApiError`] rejection.
//! Notifications and session-expiry redirects have already been handled by
//! the client's response policy, so callers only update their own state.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{HttpClient, Transport};
use super::types::{
    ApiEnvelope, DeleteRequest, LoginRequest, LoginUser, Page, RegisterRequest, UserQuery, UserVo,
};
use crate::error::ApiError;

pub const CURRENT_USER_PATH: &str = "/user/get/login";
pub const LOGIN_PATH: &str = "/user/login";
pub const REGISTER_PATH: &str = "/user/register";
pub const LOGOUT_PATH: &str = "/user/logout";
pub const LIST_USERS_PATH: &str = "/user/list/page/vo";
pub const DELETE_USER_PATH: &str = "/user/delete";

/// Whether `path` is the current-user probe, which anonymous visitors are
/// expected to fail.
pub fn is_current_user_probe(path: &str) -> bool {
    path.contains("/get/login")
}

/// Fetch the currently logged-in user via `GET /user/get/login`.
///
/// # Errors
///
/// Rejects when no session exists or the request fails.
pub async fn get_login_user<T: Transport>(client: &HttpClient<T>) -> Result<ApiEnvelope<LoginUser>, ApiError> {
    client.get(CURRENT_USER_PATH).await
}

/// Log in with account and password via `POST /user/login`.
///
/// # Errors
///
/// Rejects on bad credentials or request failure.
pub async fn user_login<T: Transport>(
    client: &HttpClient<T>,
    account: &str,
    password: &str,
) -> Result<ApiEnvelope<LoginUser>, ApiError> {
    let body = LoginRequest { user_account: account.to_owned(), user_password: password.to_owned() };
    client.post(LOGIN_PATH, &body).await
}

/// Register a new account via `POST /user/register`. Returns the new user id.
///
/// # Errors
///
/// Rejects when the backend refuses the registration or the request fails.
pub async fn user_register<T: Transport>(
    client: &HttpClient<T>,
    account: &str,
    password: &str,
    check_password: &str,
) -> Result<ApiEnvelope<i64>, ApiError> {
    let body = RegisterRequest {
        user_account: account.to_owned(),
        user_password: password.to_owned(),
        check_password: check_password.to_owned(),
    };
    client.post(REGISTER_PATH, &body).await
}

/// End the current session via `POST /user/logout`.
///
/// # Errors
///
/// Rejects when no session exists or the request fails.
pub async fn user_logout<T: Transport>(client: &HttpClient<T>) -> Result<ApiEnvelope<bool>, ApiError> {
    client.post(LOGOUT_PATH, &serde_json::json!({})).await
}

/// List users page by page via `POST /user/list/page/vo` (admin only).
///
/// # Errors
///
/// Rejects on permission errors or request failure.
pub async fn list_users<T: Transport>(
    client: &HttpClient<T>,
    query: &UserQuery,
) -> Result<ApiEnvelope<Page<UserVo>>, ApiError> {
    client.post(LIST_USERS_PATH, query).await
}

/// Delete a user via `POST /user/delete` (admin only).
///
/// # Errors
///
/// Rejects on permission errors or request failure.
pub async fn delete_user<T: Transport>(client: &HttpClient<T>, id: i64) -> Result<ApiEnvelope<bool>, ApiError> {
    client.post(DELETE_USER_PATH, &DeleteRequest { id }).await
}
