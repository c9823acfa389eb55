//! Admin dashboard: counters plus the most recent content.
//!
//! DESIGN
//! ======
//! The three panels are fetched one after another and fail independently:
//! a broken stats call still shows the recent lists and vice versa. Each
//! panel carries its own `Result`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use super::{events, news};
use crate::auth::Backend;
use crate::client::ApiRequest;
use crate::error::RequestError;
use crate::format::{RECENT_LIMIT, sort_recent};
use crate::types::{DashboardStats, Event, News};

/// Everything the dashboard renders.
#[derive(Clone, Debug, PartialEq)]
pub struct Overview {
    pub stats: Result<DashboardStats, RequestError>,
    pub recent_events: Result<Vec<Event>, RequestError>,
    pub recent_news: Result<Vec<News>, RequestError>,
}

/// `GET /admin/dashboard`.
///
/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn stats<B: Backend>(backend: &mut B) -> Result<DashboardStats, RequestError> {
    backend.send(ApiRequest::get("/admin/dashboard").authenticated()).await?.into_data()
}

/// Load all panels, newest five events and news first.
pub async fn overview<B: Backend>(backend: &mut B) -> Overview {
    let stats = stats(backend).await;
    let recent_events = events::list_all(backend).await.map(|items| sort_recent(&items, RECENT_LIMIT));
    let recent_news = news::list_all(backend).await.map(|items| sort_recent(&items, RECENT_LIMIT));

    for (panel, err) in [
        ("stats", stats.as_ref().err()),
        ("events", recent_events.as_ref().err()),
        ("news", recent_news.as_ref().err()),
    ] {
        if let Some(err) = err {
            tracing::warn!(panel, error = %err, "dashboard panel failed");
        }
    }

    Overview { stats, recent_events, recent_news }
}
