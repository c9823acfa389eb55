//! Display helpers shared by the web pages and the CLI.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::types::{ContactMessage, Dated, Event};

/// Entries shown in the dashboard's recent lists.
pub const RECENT_LIMIT: usize = 5;

fn parse_instant(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// `dd/mm/yyyy`, or the input unchanged when it is not a date.
#[must_use]
pub fn format_date(raw: &str) -> String {
    parse_instant(raw).map_or_else(|| raw.to_owned(), |dt| dt.format("%d/%m/%Y").to_string())
}

/// `dd/mm/yyyy HH:MM`; `Nunca` when absent.
#[must_use]
pub fn format_date_time(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        None => "Nunca".to_owned(),
        Some(raw) => parse_instant(raw).map_or_else(|| raw.to_owned(), |dt| dt.format("%d/%m/%Y %H:%M").to_string()),
    }
}

/// The date part (`yyyy-mm-dd`) of a backend timestamp, for date inputs.
#[must_use]
pub fn date_input_value(raw: &str) -> String {
    parse_instant(raw).map_or_else(|| raw.to_owned(), |dt| dt.format("%Y-%m-%d").to_string())
}

/// Newest first by `createdAt` (or content date), at most `limit` items.
///
/// Items whose key does not parse sort after every dated item.
#[must_use]
pub fn sort_recent<T: Dated + Clone>(items: &[T], limit: usize) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| parse_instant(b.recency_key()).cmp(&parse_instant(a.recency_key())));
    sorted.truncate(limit);
    sorted
}

/// Newest content date first (listing order); unparseable dates last.
pub fn sort_by_date_desc<T>(items: &mut [T], date: impl Fn(&T) -> &str) {
    items.sort_by(|a, b| parse_instant(date(b)).cmp(&parse_instant(date(a))));
}

/// Events on or after `today` (`yyyy-mm-dd`), soonest first, at most `limit`.
#[must_use]
pub fn upcoming(events: &[Event], today: &str, limit: usize) -> Vec<Event> {
    let Some(today) = parse_instant(today) else {
        return Vec::new();
    };
    let mut ahead: Vec<(NaiveDateTime, &Event)> = events
        .iter()
        .filter_map(|event| parse_instant(&event.data).map(|at| (at, event)))
        .filter(|(at, _)| at.date() >= today.date())
        .collect();
    ahead.sort_by_key(|(at, _)| *at);
    ahead.into_iter().take(limit).map(|(_, event)| event.clone()).collect()
}

/// Human-readable byte count (`512 B`, `1.5 KB`, `2.0 MB`).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

#[must_use]
pub fn unread_count(messages: &[ContactMessage]) -> usize {
    messages.iter().filter(|m| !m.lida).count()
}

#[must_use]
pub fn unanswered_count(messages: &[ContactMessage]) -> usize {
    messages.iter().filter(|m| !m.respondida).count()
}

/// `1 evento`, `3 eventos`.
#[must_use]
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 { format!("{count} {singular}") } else { format!("{count} {plural}") }
}
