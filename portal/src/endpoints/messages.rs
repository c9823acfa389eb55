//! Contact-form inbox: `/contatos/mensagens`.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use super::item_path;
use crate::auth::Backend;
use crate::client::ApiRequest;
use crate::envelope::ApiResponse;
use crate::error::RequestError;
use crate::types::{ContactMessage, MessageFlags};

const BASE: &str = "/contatos/mensagens";

/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn list<B: Backend>(backend: &mut B) -> Result<Vec<ContactMessage>, RequestError> {
    backend.send(ApiRequest::get(BASE).authenticated()).await?.into_list()
}

/// Set `lida` and/or `respondida`; unset flags are left alone.
///
/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn set_flags<B: Backend>(backend: &mut B, id: &str, flags: MessageFlags) -> Result<ApiResponse, RequestError> {
    backend.send(ApiRequest::put(item_path(BASE, id)).json(&flags)?.authenticated()).await
}

/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn toggle_read<B: Backend>(backend: &mut B, message: &ContactMessage) -> Result<ApiResponse, RequestError> {
    set_flags(backend, &message.id, MessageFlags { lida: Some(!message.lida), respondida: None }).await
}

/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn toggle_answered<B: Backend>(backend: &mut B, message: &ContactMessage) -> Result<ApiResponse, RequestError> {
    set_flags(backend, &message.id, MessageFlags { lida: None, respondida: Some(!message.respondida) }).await
}

/// Opening an unread message marks it read; a read one needs no call.
///
/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn mark_opened<B: Backend>(backend: &mut B, message: &ContactMessage) -> Result<bool, RequestError> {
    if message.lida {
        return Ok(false);
    }
    set_flags(backend, &message.id, MessageFlags { lida: Some(true), respondida: None }).await?;
    Ok(true)
}

/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn delete<B: Backend>(backend: &mut B, id: &str) -> Result<ApiResponse, RequestError> {
    backend.send(ApiRequest::delete(item_path(BASE, id)).authenticated()).await
}
