//! `/noticias` and `/admin/noticias`.

#[cfg(test)]
#[path = "news_test.rs"]
mod news_test;

use super::item_path;
use crate::auth::Backend;
use crate::client::ApiRequest;
use crate::envelope::ApiResponse;
use crate::error::RequestError;
use crate::types::{News, NewsDraft};

const PUBLIC: &str = "/noticias";
const FEATURED: &str = "/noticias/destaques";
const ADMIN: &str = "/admin/noticias";

/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn list<B: Backend>(backend: &mut B) -> Result<Vec<News>, RequestError> {
    backend.send(ApiRequest::get(PUBLIC)).await?.into_list()
}

/// Items flagged for the home page.
///
/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn featured<B: Backend>(backend: &mut B) -> Result<Vec<News>, RequestError> {
    backend.send(ApiRequest::get(FEATURED)).await?.into_list()
}

/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn get<B: Backend>(backend: &mut B, id: &str) -> Result<News, RequestError> {
    backend.send(ApiRequest::get(item_path(PUBLIC, id))).await?.into_data()
}

/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn list_all<B: Backend>(backend: &mut B) -> Result<Vec<News>, RequestError> {
    backend.send(ApiRequest::get(ADMIN).authenticated()).await?.into_list()
}

/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn create<B: Backend>(backend: &mut B, draft: &NewsDraft) -> Result<ApiResponse, RequestError> {
    backend.send(ApiRequest::post(PUBLIC).json(draft)?.authenticated()).await
}

/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn update<B: Backend>(backend: &mut B, id: &str, draft: &NewsDraft) -> Result<ApiResponse, RequestError> {
    backend.send(ApiRequest::put(item_path(PUBLIC, id)).json(draft)?.authenticated()).await
}

/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn delete<B: Backend>(backend: &mut B, id: &str) -> Result<ApiResponse, RequestError> {
    backend.send(ApiRequest::delete(item_path(PUBLIC, id)).authenticated()).await
}

/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn toggle_featured<B: Backend>(backend: &mut B, news: &News) -> Result<ApiResponse, RequestError> {
    let mut draft = NewsDraft::from(news);
    draft.destaque = !news.destaque;
    update(backend, &news.id, &draft).await
}
