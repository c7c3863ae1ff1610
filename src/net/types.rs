//! Wire DTOs for the user-center backend.
//!
//! DESIGN
//! ======
//! The backend serializes Java beans, so field names are camelCase and most
//! fields may be absent or `null`. Every response is wrapped in an
//! [`ApiEnvelope`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Application-level code for a successful call.
pub const SUCCESS_CODE: i64 = 200;
/// Application-level code for "not logged in / session expired".
pub const SESSION_EXPIRED_CODE: i64 = 400_001;

/// Display name used while no user is logged in.
pub const NOT_LOGGED_IN: &str = "not logged in";

/// Response wrapper `{code, data, msg}` used by every endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i64,
    pub data: Option<T>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Payload of a successful envelope, if any.
    pub fn into_success_data(self) -> Option<T> {
        if self.is_success() { self.data } else { None }
    }
}

/// Role attribute of a user account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
    /// Any role this client does not know about.
    #[serde(other)]
    Other,
}

impl UserRole {
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Other => "other",
        }
    }
}

/// Java beans serialize unset fields as `null`; treat that like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The current user as returned by `GET /user/get/login` and `POST /user/login`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub user_account: Option<String>,
    /// Display name.
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_avatar: Option<String>,
    #[serde(default)]
    pub user_profile: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_role: UserRole,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
}

impl LoginUser {
    pub fn is_admin(&self) -> bool {
        self.user_role == UserRole::Admin
    }

    /// Best available label: name, then account.
    pub fn display_name(&self) -> &str {
        self.user_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.user_account.as_deref())
            .unwrap_or("unnamed user")
    }
}

/// A user row in the admin listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserVo {
    pub id: i64,
    #[serde(default)]
    pub user_account: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_avatar: Option<String>,
    #[serde(default)]
    pub user_profile: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_role: UserRole,
    #[serde(default)]
    pub create_time: Option<String>,
}

/// Paged result returned by list endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub current: i64,
}

/// Filter and paging parameters for `POST /user/list/page/vo`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub current: i64,
    pub page_size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: 10,
            user_account: None,
            user_name: None,
            user_role: None,
            sort_field: None,
            sort_order: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_account: String,
    pub user_password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_account: String,
    pub user_password: String,
    pub check_password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DeleteRequest {
    pub id: i64,
}
