//! HTTP client configuration resolved at build time.
//!
//! The browser has no process environment, so overrides are baked in with
//! `option_env!` when the WASM bundle is compiled. Parsing goes through
//! [`ClientConfig::from_lookup`] so the same rules are testable natively.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:9090";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

pub const BASE_URL_VAR: &str = "ADMIN_API_BASE_URL";
pub const TIMEOUT_SECS_VAR: &str = "ADMIN_API_TIMEOUT_SECS";
pub const WITH_CREDENTIALS_VAR: &str = "ADMIN_API_WITH_CREDENTIALS";

/// Errors produced while parsing configuration overrides.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An override was present but could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Settings shared by every request the [`crate::net::http::HttpClient`] sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin, without a trailing slash.
    pub base_url: String,
    /// Per-request deadline.
    pub timeout: Duration,
    /// Forward cookies on cross-origin requests.
    pub with_credentials: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            with_credentials: true,
        }
    }
}

impl ClientConfig {
    /// Build config from values captured when the crate was compiled.
    ///
    /// Optional:
    /// - `ADMIN_API_BASE_URL`: default `http://localhost:9090`
    /// - `ADMIN_API_TIMEOUT_SECS`: default 60
    /// - `ADMIN_API_WITH_CREDENTIALS`: default `true`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if an override cannot be parsed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                BASE_URL_VAR => option_env!("ADMIN_API_BASE_URL"),
                TIMEOUT_SECS_VAR => option_env!("ADMIN_API_TIMEOUT_SECS"),
                WITH_CREDENTIALS_VAR => option_env!("ADMIN_API_WITH_CREDENTIALS"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build config from an arbitrary key lookup, applying defaults for
    /// missing keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if an override cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR)
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();

        let timeout_secs = match lookup(TIMEOUT_SECS_VAR) {
            Some(raw) => parse_u64(TIMEOUT_SECS_VAR, &raw)?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let with_credentials = match lookup(WITH_CREDENTIALS_VAR) {
            Some(raw) => parse_bool(WITH_CREDENTIALS_VAR, &raw)?,
            None => true,
        };

        Ok(Self { base_url, timeout: Duration::from_secs(timeout_secs), with_credentials })
    }

    /// Join an API path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.base_url)
    }

    /// Timeout in whole milliseconds, as reported in timeout errors.
    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

fn parse_u64(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ConfigError::Invalid { var, value: raw.to_owned() }),
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { var, value: raw.to_owned() }),
    }
}
