use super::*;
use serde_json::json;

fn response(status: u16, body: &str) -> Result<RawResponse, TransportFailure> {
    Ok(RawResponse { status, body: body.to_owned() })
}

// =============================================================
// 2xx responses
// =============================================================

#[test]
fn success_code_is_ok_with_full_envelope() {
    let outcome = classify(response(200, r#"{"code":200,"data":{"userName":"x"}}"#));
    assert_eq!(outcome, Outcome::Ok(json!({ "code": 200, "data": { "userName": "x" } })));
}

#[test]
fn non_success_code_on_2xx_is_business_error_with_body_message() {
    let outcome = classify(response(200, r#"{"code":40000,"msg":"bad params"}"#));
    assert_eq!(
        outcome,
        Outcome::BusinessError {
            code: Some(40000),
            message: "bad params".to_owned(),
            body: json!({ "code": 40000, "msg": "bad params" }),
        }
    );
}

#[test]
fn non_success_code_on_2xx_without_message_uses_request_fallback() {
    let Outcome::BusinessError { message, .. } = classify(response(200, r#"{"code":50000,"msg":""}"#)) else {
        panic!("expected business error");
    };
    assert_eq!(message, REQUEST_FAILED_MESSAGE);
}

#[test]
fn session_code_on_2xx_is_still_a_business_error() {
    let outcome = classify(response(200, r#"{"code":400001,"msg":"not logged in"}"#));
    assert!(matches!(outcome, Outcome::BusinessError { code: Some(400_001), .. }));
}

#[test]
fn non_json_2xx_body_is_business_error() {
    let outcome = classify(response(200, "<html>"));
    assert_eq!(
        outcome,
        Outcome::BusinessError {
            code: None,
            message: REQUEST_FAILED_MESSAGE.to_owned(),
            body: json!("<html>"),
        }
    );
}

// =============================================================
// HTTP failures
// =============================================================

#[test]
fn session_expired_code_on_http_failure() {
    let outcome = classify(response(401, r#"{"code":400001,"msg":"please log in"}"#));
    assert_eq!(
        outcome,
        Outcome::SessionExpired {
            message: "please log in".to_owned(),
            body: json!({ "code": 400001, "msg": "please log in" }),
        }
    );
}

#[test]
fn other_code_on_http_failure_uses_system_fallback() {
    let Outcome::BusinessError { code, message, .. } = classify(response(500, r#"{"code":50000}"#)) else {
        panic!("expected business error");
    };
    assert_eq!(code, Some(50000));
    assert_eq!(message, SYSTEM_ERROR_MESSAGE);
}

#[test]
fn http_failure_without_body_is_transport_error() {
    assert_eq!(classify(response(502, "  ")), Outcome::TransportError(TransportFailure::Status(502)));
}

#[test]
fn transport_failure_passes_through() {
    let outcome = classify(Err(TransportFailure::Network("offline".to_owned())));
    assert_eq!(outcome, Outcome::TransportError(TransportFailure::Network("offline".to_owned())));
}
