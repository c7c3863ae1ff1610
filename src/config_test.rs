use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_nothing_set() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.base_url, "http://localhost:9090");
    assert_eq!(cfg.timeout, Duration::from_secs(60));
    assert!(cfg.with_credentials);
}

#[test]
fn from_lookup_applies_overrides_and_trims_slash() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        (BASE_URL_VAR, "https://api.example.test/"),
        (TIMEOUT_SECS_VAR, "15"),
        (WITH_CREDENTIALS_VAR, "false"),
    ]))
    .unwrap();
    assert_eq!(cfg.base_url, "https://api.example.test");
    assert_eq!(cfg.timeout, Duration::from_secs(15));
    assert!(!cfg.with_credentials);
}

#[test]
fn from_lookup_blank_base_url_falls_back_to_default() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[(BASE_URL_VAR, "   ")])).unwrap();
    assert_eq!(cfg.base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_lookup_rejects_bad_timeout() {
    let err = ClientConfig::from_lookup(lookup_from(&[(TIMEOUT_SECS_VAR, "soon")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: TIMEOUT_SECS_VAR, value: "soon".to_owned() });

    let err = ClientConfig::from_lookup(lookup_from(&[(TIMEOUT_SECS_VAR, "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: TIMEOUT_SECS_VAR, .. }));
}

#[test]
fn from_lookup_rejects_bad_bool() {
    let err = ClientConfig::from_lookup(lookup_from(&[(WITH_CREDENTIALS_VAR, "maybe")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid value for ADMIN_API_WITH_CREDENTIALS: \"maybe\"");
}

#[test]
fn url_joins_paths_with_single_slash() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.url("/user/get/login"), "http://localhost:9090/user/get/login");
    assert_eq!(cfg.url("user/login"), "http://localhost:9090/user/login");
}

#[test]
fn url_passes_absolute_urls_through() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.url("https://other.test/x"), "https://other.test/x");
}

#[test]
fn timeout_ms_reports_millis() {
    assert_eq!(ClientConfig::default().timeout_ms(), 60_000);
}
