use super::*;
use crate::testing::{ScriptedTransport, backend};
use serde_json::json;

#[tokio::test]
async fn overview_sorts_and_truncates_recent_lists() {
    let transport = ScriptedTransport::new();
    transport.reply(200, json!({"success": true, "data": {"eventos": {"total": 7}, "mensagens": {"naoLidas": 2}}}));
    let events: Vec<_> = (1..=7).map(|d| json!({"id": d, "titulo": "E", "data": format!("2024-02-0{d}")})).collect();
    transport.reply(200, json!({"success": true, "data": events}));
    transport.reply(200, json!({"success": true, "data": []}));

    let overview = overview(&mut backend(&transport)).await;

    let stats = overview.stats.expect("stats");
    assert_eq!(stats.eventos.total, 7);
    assert_eq!(stats.mensagens.nao_lidas, 2);
    let recent = overview.recent_events.expect("events");
    assert_eq!(recent.len(), RECENT_LIMIT);
    assert_eq!(recent[0].id, "7");
    assert_eq!(overview.recent_news, Ok(Vec::new()));
}

#[tokio::test]
async fn panels_fail_independently() {
    let transport = ScriptedTransport::new();
    transport.reply(500, json!({"success": false, "message": "Erro interno"}));
    transport.reply(200, json!({"success": true, "data": [{"id": 1, "titulo": "E"}]}));
    transport.fail("offline");

    let overview = overview(&mut backend(&transport)).await;

    assert_eq!(overview.stats.expect_err("stats fail").message(), "Erro interno");
    assert_eq!(overview.recent_events.expect("events").len(), 1);
    assert!(overview.recent_news.is_err());
    assert_eq!(transport.sent().len(), 3);
}
