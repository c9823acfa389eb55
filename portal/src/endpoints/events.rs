//! `/eventos` and `/admin/eventos`.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use super::item_path;
use crate::auth::Backend;
use crate::client::ApiRequest;
use crate::envelope::ApiResponse;
use crate::error::RequestError;
use crate::types::{Event, EventDraft};

const PUBLIC: &str = "/eventos";
const ADMIN: &str = "/admin/eventos";

/// Active events, as the public site lists them.
///
/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn list<B: Backend>(backend: &mut B) -> Result<Vec<Event>, RequestError> {
    backend.send(ApiRequest::get(PUBLIC)).await?.into_list()
}

/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn get<B: Backend>(backend: &mut B, id: &str) -> Result<Event, RequestError> {
    backend.send(ApiRequest::get(item_path(PUBLIC, id))).await?.into_data()
}

/// Every event, inactive ones included.
///
/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn list_all<B: Backend>(backend: &mut B) -> Result<Vec<Event>, RequestError> {
    backend.send(ApiRequest::get(ADMIN).authenticated()).await?.into_list()
}

/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn create<B: Backend>(backend: &mut B, draft: &EventDraft) -> Result<ApiResponse, RequestError> {
    backend.send(ApiRequest::post(PUBLIC).json(draft)?.authenticated()).await
}

/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn update<B: Backend>(backend: &mut B, id: &str, draft: &EventDraft) -> Result<ApiResponse, RequestError> {
    backend.send(ApiRequest::put(item_path(PUBLIC, id)).json(draft)?.authenticated()).await
}

/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn delete<B: Backend>(backend: &mut B, id: &str) -> Result<ApiResponse, RequestError> {
    backend.send(ApiRequest::delete(item_path(PUBLIC, id)).authenticated()).await
}

/// Flip `destaque`, resending the rest of the event unchanged.
///
/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn toggle_featured<B: Backend>(backend: &mut B, event: &Event) -> Result<ApiResponse, RequestError> {
    let mut draft = EventDraft::from(event);
    draft.destaque = !event.destaque;
    update(backend, &event.id, &draft).await
}

/// Featured events first, then the rest, each group in backend order.
#[must_use]
pub fn split_featured(events: Vec<Event>) -> (Vec<Event>, Vec<Event>) {
    events.into_iter().partition(|e| e.destaque)
}
