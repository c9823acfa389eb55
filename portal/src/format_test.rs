use super::*;
use crate::types::{Event, News};

fn event(id: &str, data: &str, created_at: Option<&str>) -> Event {
    Event {
        id: id.to_owned(),
        titulo: format!("Evento {id}"),
        data: data.to_owned(),
        created_at: created_at.map(ToOwned::to_owned),
        ..Event::default()
    }
}

fn message(lida: bool, respondida: bool) -> ContactMessage {
    ContactMessage {
        id: "m".to_owned(),
        nome: "Rui".to_owned(),
        email: "rui@example.com".to_owned(),
        assunto: String::new(),
        mensagem: String::new(),
        data_envio: None,
        lida,
        respondida,
    }
}

// =============================================================
// Dates
// =============================================================

#[test]
fn format_date_accepts_timestamps_and_plain_dates() {
    assert_eq!(format_date("2024-03-09T14:30:00.000Z"), "09/03/2024");
    assert_eq!(format_date("2024-03-09"), "09/03/2024");
    assert_eq!(format_date("2024-03-09T14:30:00"), "09/03/2024");
}

#[test]
fn format_date_keeps_unparseable_input() {
    assert_eq!(format_date("em breve"), "em breve");
    assert_eq!(format_date(""), "");
}

#[test]
fn format_date_time_says_never_when_absent() {
    assert_eq!(format_date_time(None), "Nunca");
    assert_eq!(format_date_time(Some("  ")), "Nunca");
    assert_eq!(format_date_time(Some("2024-03-09T14:30:00Z")), "09/03/2024 14:30");
}

#[test]
fn date_input_value_strips_time() {
    assert_eq!(date_input_value("2024-03-09T14:30:00.000Z"), "2024-03-09");
}

// =============================================================
// Recency
// =============================================================

#[test]
fn sort_recent_orders_newest_first_and_truncates() {
    let items: Vec<Event> = (1..=7).map(|day| event(&day.to_string(), &format!("2024-01-0{day}"), None)).collect();

    let recent = sort_recent(&items, RECENT_LIMIT);
    let ids: Vec<&str> = recent.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["7", "6", "5", "4", "3"]);
}

#[test]
fn sort_recent_prefers_created_at() {
    let items = vec![
        event("old-date-new-row", "2020-01-01", Some("2024-06-01T10:00:00Z")),
        event("new-date-old-row", "2024-05-01", Some("2023-01-01T10:00:00Z")),
    ];
    let recent = sort_recent(&items, 5);
    assert_eq!(recent[0].id, "old-date-new-row");
}

#[test]
fn sort_recent_puts_undated_last() {
    let items = vec![
        News { id: "undated".to_owned(), data: "sem data".to_owned(), ..News::default() },
        News { id: "dated".to_owned(), data: "2023-02-01".to_owned(), ..News::default() },
    ];
    let recent = sort_recent(&items, 5);
    assert_eq!(recent[0].id, "dated");
    assert_eq!(recent[1].id, "undated");
}

#[test]
fn sort_by_date_desc_orders_listing() {
    let mut items = vec![
        event("a", "2023-01-01", None),
        event("b", "?", None),
        event("c", "2024-01-01", None),
    ];
    sort_by_date_desc(&mut items, |e| &e.data);
    let ids: Vec<&str> = items.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["c", "a", "b"]);
}

#[test]
fn upcoming_keeps_today_and_later_soonest_first() {
    let items = vec![
        event("past", "2024-03-01", None),
        event("later", "2024-04-20T19:00:00Z", None),
        event("today", "2024-03-10", None),
        event("undated", "em breve", None),
    ];
    let ids: Vec<String> = upcoming(&items, "2024-03-10", 5).into_iter().map(|e| e.id).collect();
    assert_eq!(ids, ["today", "later"]);
    assert_eq!(upcoming(&items, "2024-03-10", 1).len(), 1);
}

#[test]
fn upcoming_without_today_is_empty() {
    assert!(upcoming(&[event("a", "2030-01-01", None)], "", 3).is_empty());
}

// =============================================================
// Sizes and counts
// =============================================================

#[test]
fn format_size_scales_units() {
    assert_eq!(format_size(512), "512 B");
    assert_eq!(format_size(1536), "1.5 KB");
    assert_eq!(format_size(2 * 1024 * 1024), "2.0 MB");
}

#[test]
fn message_counters() {
    let messages = vec![message(false, false), message(true, false), message(true, true)];
    assert_eq!(unread_count(&messages), 1);
    assert_eq!(unanswered_count(&messages), 2);
}

#[test]
fn pluralize_by_count() {
    assert_eq!(pluralize(1, "evento", "eventos"), "1 evento");
    assert_eq!(pluralize(0, "evento", "eventos"), "0 eventos");
}
