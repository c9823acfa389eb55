use super::*;
use crate::testing::{ScriptedTransport, backend};
use crate::transport::{HttpBody, Method};
use serde_json::json;

#[tokio::test]
async fn list_is_public_and_decodes_rows() {
    let transport = ScriptedTransport::new();
    transport.reply(
        200,
        json!({"success": true, "data": [
            {"_id": "a1", "titulo": "Hackathon", "data": "2024-05-01", "destaque": true},
            {"id": 2, "titulo": "Meetup"}
        ]}),
    );

    let events = list(&mut backend(&transport)).await.expect("list");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, "a1");
    assert_eq!(events[1].id, "2");

    let sent = transport.last();
    assert_eq!(sent.url, "http://api.test/api/eventos");
    assert_eq!(sent.header("authorization"), None);
}

#[tokio::test]
async fn list_treats_missing_data_as_empty() {
    let transport = ScriptedTransport::new();
    transport.reply(200, json!({"success": true}));
    assert_eq!(list(&mut backend(&transport)).await, Ok(Vec::new()));
}

#[tokio::test]
async fn list_all_requires_token() {
    let transport = ScriptedTransport::new();
    transport.reply(200, json!({"success": true, "data": []}));

    list_all(&mut backend(&transport)).await.expect("list");
    let sent = transport.last();
    assert_eq!(sent.url, "http://api.test/api/admin/eventos");
    assert_eq!(sent.header("authorization"), Some("Bearer test-token"));
}

#[tokio::test]
async fn get_missing_event_surfaces_backend_message() {
    let transport = ScriptedTransport::new();
    transport.reply(404, json!({"success": false, "message": "Evento não encontrado"}));

    let err = get(&mut backend(&transport), "999").await.expect_err("should fail");
    assert_eq!(err.to_string(), "Evento não encontrado");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn toggle_featured_resends_event_with_flag_flipped() {
    let transport = ScriptedTransport::new();
    transport.reply(200, json!({"success": true, "message": "Evento atualizado"}));
    let event = Event { id: "7".to_owned(), titulo: "Hackathon".to_owned(), destaque: false, ..Event::default() };

    let envelope = toggle_featured(&mut backend(&transport), &event).await.expect("toggle");
    assert_eq!(envelope.message.as_deref(), Some("Evento atualizado"));

    let sent = transport.last();
    assert_eq!(sent.method, Method::Put);
    assert_eq!(sent.url, "http://api.test/api/eventos/7");
    let HttpBody::Json(body) = sent.body else { panic!("expected json body") };
    let body: serde_json::Value = serde_json::from_str(&body).expect("json");
    assert_eq!(body["destaque"], json!(true));
    assert_eq!(body["titulo"], json!("Hackathon"));
}

#[tokio::test]
async fn delete_escapes_id() {
    let transport = ScriptedTransport::new();
    transport.reply(200, json!({"success": true}));

    delete(&mut backend(&transport), "a/b").await.expect("delete");
    assert_eq!(transport.last().url, "http://api.test/api/eventos/a%2Fb");
}

#[test]
fn split_featured_keeps_order() {
    let make = |id: &str, destaque| Event { id: id.to_owned(), destaque, ..Event::default() };
    let (featured, rest) = split_featured(vec![make("1", false), make("2", true), make("3", false)]);
    assert_eq!(featured.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(), ["2"]);
    assert_eq!(rest.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(), ["1", "3"]);
}
