use super::*;
use serde_json::json;

// =============================================================
// Failure rule
// =============================================================

#[test]
fn explicit_false_fails_even_on_200() {
    let err = ApiResponse::from_body(200, r#"{"success":false,"message":"X"}"#).expect_err("should fail");
    assert_eq!(err.message(), "X");
    assert_eq!(err.status(), Some(200));
}

#[test]
fn explicit_true_resolves_to_full_envelope() {
    let envelope =
        ApiResponse::from_body(200, r#"{"success":true,"data":{"id":4},"total":1}"#).expect("should succeed");
    assert_eq!(envelope.success, Some(true));
    assert_eq!(envelope.data, Some(json!({"id": 4})));
    assert_eq!(envelope.extra.get("total"), Some(&json!(1)));
}

#[test]
fn missing_flag_passes_on_2xx() {
    let envelope = ApiResponse::from_body(200, r#"{"token":"abc","user":{"id":1}}"#).expect("should succeed");
    assert_eq!(envelope.success, None);
    assert_eq!(envelope.member("token"), Some(&json!("abc")));
}

#[test]
fn missing_flag_fails_on_non_2xx_with_message() {
    let err = ApiResponse::from_body(401, r#"{"message":"Token expirado"}"#).expect_err("should fail");
    assert!(err.is_unauthorized());
    assert_eq!(err.message(), "Token expirado");
}

#[test]
fn failure_without_message_uses_status_fallback() {
    let err = ApiResponse::from_body(500, r#"{"success":false}"#).expect_err("should fail");
    assert_eq!(err.message(), "request failed: 500");
}

#[test]
fn blank_message_uses_status_fallback() {
    let err = ApiResponse::from_body(403, r#"{"success":false,"message":"  "}"#).expect_err("should fail");
    assert_eq!(err.message(), "request failed: 403");
}

#[test]
fn non_json_error_page_reports_status() {
    let err = ApiResponse::from_body(502, "<html>Bad Gateway</html>").expect_err("should fail");
    assert_eq!(err, RequestError::backend(502, "request failed: 502"));
}

#[test]
fn non_json_success_body_is_decode_error() {
    let err = ApiResponse::from_body(200, "ok").expect_err("should fail");
    assert!(matches!(err, RequestError::Decode { status: 200, .. }));
}

#[test]
fn array_body_is_not_an_envelope() {
    let err = ApiResponse::from_body(200, "[1,2,3]").expect_err("should fail");
    assert!(matches!(err, RequestError::Decode { .. }));
}

// =============================================================
// Narrowing helpers
// =============================================================

#[derive(Debug, PartialEq, serde::Deserialize)]
struct Item {
    id: u32,
}

#[test]
fn into_data_decodes_typed_payload() {
    let envelope = ApiResponse::from_body(200, r#"{"success":true,"data":{"id":9}}"#).expect("envelope");
    let item: Item = envelope.into_data().expect("data");
    assert_eq!(item, Item { id: 9 });
}

#[test]
fn into_data_rejects_missing_data() {
    let envelope = ApiResponse::from_body(200, r#"{"success":true}"#).expect("envelope");
    let err = envelope.into_data::<Item>().expect_err("should fail");
    assert_eq!(err.message(), "response is missing `data`");
}

#[test]
fn into_list_treats_null_as_empty() {
    let envelope = ApiResponse::from_body(200, r#"{"success":true,"data":null}"#).expect("envelope");
    let items: Vec<Item> = envelope.into_list().expect("list");
    assert!(items.is_empty());
}

#[test]
fn member_falls_back_to_data() {
    let envelope =
        ApiResponse::from_body(200, r#"{"success":true,"data":{"token":"t","user":null}}"#).expect("envelope");
    assert_eq!(envelope.member("token"), Some(&json!("t")));
    assert_eq!(envelope.member("user"), None);
}

#[test]
fn member_as_reports_mistyped_member() {
    let envelope = ApiResponse::from_body(200, r#"{"token":5}"#).expect("envelope");
    let err = envelope.member_as::<String>("token").expect_err("should fail");
    assert!(err.message().starts_with("unexpected `token` shape"));
}
