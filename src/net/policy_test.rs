use super::*;
use crate::test_support::{RecordingNavigator, RecordingNotifier};
use serde_json::json;

fn expired() -> Outcome {
    Outcome::SessionExpired { message: "please log in".to_owned(), body: json!({ "code": 400001 }) }
}

#[test]
fn ok_resolves_without_side_effects() {
    let notifier = RecordingNotifier::default();
    let navigator = RecordingNavigator::at("/admin/userManage");
    let body = apply(Outcome::Ok(json!({ "code": 200 })), "/user/list/page/vo", &notifier, &navigator).unwrap();
    assert_eq!(body, json!({ "code": 200 }));
    assert!(notifier.errors().is_empty());
    assert!(navigator.pushes().is_empty());
}

#[test]
fn business_error_notifies_and_rejects_with_body() {
    let notifier = RecordingNotifier::default();
    let navigator = RecordingNavigator::at("/");
    let outcome = Outcome::BusinessError { code: Some(40000), message: "bad".to_owned(), body: json!({ "code": 40000 }) };
    let err = apply(outcome, "/user/register", &notifier, &navigator).unwrap_err();
    assert_eq!(err, ApiError::Business { code: Some(40000), message: "bad".to_owned(), body: json!({ "code": 40000 }) });
    assert_eq!(notifier.errors(), vec!["bad".to_owned()]);
    assert!(navigator.pushes().is_empty());
}

#[test]
fn session_expired_redirects_and_notifies_for_regular_endpoint() {
    let notifier = RecordingNotifier::default();
    let navigator = RecordingNavigator::at("/admin/userManage");
    let err = apply(expired(), "/user/list/page/vo", &notifier, &navigator).unwrap_err();
    assert!(matches!(err, ApiError::SessionExpired { .. }));
    assert_eq!(navigator.pushes(), vec!["/user/login".to_owned()]);
    assert_eq!(notifier.errors(), vec!["please log in".to_owned()]);
}

#[test]
fn session_expired_on_home_notifies_without_redirect() {
    let notifier = RecordingNotifier::default();
    let navigator = RecordingNavigator::at("/");
    let _ = apply(expired(), "/user/logout", &notifier, &navigator);
    assert!(navigator.pushes().is_empty());
    assert_eq!(notifier.errors().len(), 1);
}

#[test]
fn session_expired_on_login_page_does_not_redirect() {
    let notifier = RecordingNotifier::default();
    let navigator = RecordingNavigator::at("/user/login");
    let _ = apply(expired(), "/user/logout", &notifier, &navigator);
    assert!(navigator.pushes().is_empty());
}

#[test]
fn session_expired_from_current_user_probe_redirects_without_toast() {
    let notifier = RecordingNotifier::default();
    let navigator = RecordingNavigator::at("/user/register");
    let err = apply(expired(), "/user/get/login", &notifier, &navigator).unwrap_err();
    assert!(matches!(err, ApiError::SessionExpired { .. }));
    assert!(notifier.errors().is_empty());
    assert_eq!(navigator.pushes(), vec!["/user/login".to_owned()]);
}

#[test]
fn session_expired_from_current_user_probe_on_home_stays_put() {
    let notifier = RecordingNotifier::default();
    let navigator = RecordingNavigator::at("/");
    let _ = apply(expired(), "/user/get/login", &notifier, &navigator);
    assert!(notifier.errors().is_empty());
    assert!(navigator.pushes().is_empty());
}

#[test]
fn transport_error_rejects_without_notification() {
    let notifier = RecordingNotifier::default();
    let navigator = RecordingNavigator::at("/");
    let err = apply(Outcome::TransportError(TransportFailure::Timeout(60_000)), "/user/login", &notifier, &navigator)
        .unwrap_err();
    assert_eq!(err, ApiError::Timeout(60_000));
    assert!(notifier.errors().is_empty());
}

#[test]
fn should_redirect_to_login_excludes_login_and_home() {
    assert!(!should_redirect_to_login("/"));
    assert!(!should_redirect_to_login("/user/login"));
    assert!(should_redirect_to_login("/user/register"));
    assert!(should_redirect_to_login("/admin/userManage"));
}
