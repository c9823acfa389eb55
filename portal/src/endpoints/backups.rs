//! Database backups: create, list, restore.

use serde::Serialize;

use crate::auth::Backend;
use crate::client::ApiRequest;
use crate::envelope::ApiResponse;
use crate::error::RequestError;
use crate::types::BackupInfo;

#[derive(Serialize)]
struct RestoreRequest<'a> {
    filename: &'a str,
}

/// `POST /admin/backup`; returns the new file's name when reported.
///
/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn create<B: Backend>(backend: &mut B) -> Result<Option<String>, RequestError> {
    let envelope = backend.send(ApiRequest::post("/admin/backup").authenticated()).await?;
    Ok(envelope.member_as::<String>("filename").ok())
}

/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn list<B: Backend>(backend: &mut B) -> Result<Vec<BackupInfo>, RequestError> {
    backend.send(ApiRequest::get("/admin/backups").authenticated()).await?.into_list()
}

/// Replace the live data with `filename`'s contents.
///
/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn restore<B: Backend>(backend: &mut B, filename: &str) -> Result<ApiResponse, RequestError> {
    backend
        .send(ApiRequest::post("/admin/restore").json(&RestoreRequest { filename })?.authenticated())
        .await
}
