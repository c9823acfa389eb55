use super::*;
use crate::testing::{ScriptedTransport, client};
use serde_json::json;

// =============================================================
// Request building
// =============================================================

#[tokio::test]
async fn authenticated_request_carries_bearer_header() {
    let transport = ScriptedTransport::new();
    transport.reply(200, json!({"success": true, "data": []}));

    client(&transport)
        .execute(ApiRequest::get("/admin/eventos").authenticated(), Some("tok-1"))
        .await
        .expect("request");

    let sent = transport.last();
    assert_eq!(sent.method, Method::Get);
    assert_eq!(sent.url, "http://api.test/api/admin/eventos");
    assert_eq!(sent.header("authorization"), Some("Bearer tok-1"));
    assert_eq!(sent.header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn authenticated_request_without_token_omits_header() {
    let transport = ScriptedTransport::new();
    transport.reply(401, json!({"success": false, "message": "Token não fornecido"}));

    let err = client(&transport)
        .execute(ApiRequest::get("/admins").authenticated(), None)
        .await
        .expect_err("backend rejects");

    assert_eq!(transport.last().header("authorization"), None);
    assert!(err.is_unauthorized());
    assert_eq!(err.message(), "Token não fornecido");
}

#[tokio::test]
async fn public_request_never_sends_token() {
    let transport = ScriptedTransport::new();
    transport.reply(200, json!({"success": true, "data": []}));

    client(&transport)
        .execute(ApiRequest::get("/eventos"), Some("tok-1"))
        .await
        .expect("request");

    assert_eq!(transport.last().header("authorization"), None);
}

#[tokio::test]
async fn json_body_is_serialized() {
    let transport = ScriptedTransport::new();
    transport.reply(201, json!({"success": true, "data": {"id": 3}}));

    let request = ApiRequest::post("/eventos")
        .json(&json!({"titulo": "Hackathon"}))
        .expect("json body")
        .authenticated();
    client(&transport).execute(request, Some("t")).await.expect("request");

    assert_eq!(transport.last().body, HttpBody::Json(r#"{"titulo":"Hackathon"}"#.to_owned()));
}

#[tokio::test]
async fn upload_uses_multipart_and_bearer() {
    let transport = ScriptedTransport::new();
    transport.reply(200, json!({"success": true, "data": {"filename": "a.png", "url": "/uploads/a.png"}}));

    let part = FilePart::image("a.png", "image/png", vec![1, 2, 3]);
    let request = ApiRequest::post("/admin/upload").multipart(part.clone()).authenticated();
    client(&transport).execute(request, Some("t")).await.expect("upload");

    let sent = transport.last();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.body, HttpBody::Multipart(part));
    assert_eq!(sent.header("authorization"), Some("Bearer t"));
    assert_eq!(sent.header("content-type"), None);
}

// =============================================================
// Response handling
// =============================================================

#[tokio::test]
async fn success_false_surfaces_backend_message() {
    let transport = ScriptedTransport::new();
    transport.reply(200, json!({"success": false, "message": "X"}));

    let err = client(&transport)
        .execute(ApiRequest::get("/noticias"), None)
        .await
        .expect_err("should fail");
    assert_eq!(err.message(), "X");
    assert_eq!(err.to_string(), "X");
}

#[tokio::test]
async fn success_true_resolves_to_envelope_with_data() {
    let transport = ScriptedTransport::new();
    transport.reply(200, json!({"success": true, "data": {"total": 2}}));

    let envelope = client(&transport)
        .execute(ApiRequest::get("/admin/dashboard"), None)
        .await
        .expect("request");
    assert_eq!(envelope.success, Some(true));
    assert_eq!(envelope.data, Some(json!({"total": 2})));
}

#[tokio::test]
async fn transport_failure_is_request_error() {
    let transport = ScriptedTransport::new();
    transport.fail("connection refused");

    let err = client(&transport)
        .execute(ApiRequest::get("/eventos"), None)
        .await
        .expect_err("should fail");
    assert_eq!(err, RequestError::transport("connection refused"));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn invalid_json_on_success_is_decode_error() {
    let transport = ScriptedTransport::new();
    transport.reply_raw(200, "not json");

    let err = client(&transport)
        .execute(ApiRequest::get("/eventos"), None)
        .await
        .expect_err("should fail");
    assert!(matches!(err, RequestError::Decode { .. }));
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn path_segment_escapes_separators() {
    assert_eq!(path_segment("foto 1.png"), "foto%201.png");
    assert_eq!(path_segment("../x"), "..%2Fx");
    assert_eq!(path_segment("abc-123"), "abc-123");
}
