//! Administrator accounts: `/admins`.

#[cfg(test)]
#[path = "admins_test.rs"]
mod admins_test;

use serde::Serialize;

use super::item_path;
use crate::auth::Backend;
use crate::client::ApiRequest;
use crate::envelope::ApiResponse;
use crate::error::RequestError;
use crate::types::{Admin, AdminUpdate, NewAdmin};

const BASE: &str = "/admins";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordReset<'a> {
    nova_senha: &'a str,
}

/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn list<B: Backend>(backend: &mut B) -> Result<Vec<Admin>, RequestError> {
    backend.send(ApiRequest::get(BASE).authenticated()).await?.into_list()
}

/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn create<B: Backend>(backend: &mut B, admin: &NewAdmin) -> Result<ApiResponse, RequestError> {
    backend.send(ApiRequest::post(BASE).json(admin)?.authenticated()).await
}

/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn update<B: Backend>(backend: &mut B, id: &str, update: &AdminUpdate) -> Result<ApiResponse, RequestError> {
    backend.send(ApiRequest::put(item_path(BASE, id)).json(update)?.authenticated()).await
}

/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn delete<B: Backend>(backend: &mut B, id: &str) -> Result<ApiResponse, RequestError> {
    backend.send(ApiRequest::delete(item_path(BASE, id)).authenticated()).await
}

/// Set another administrator's password (`PUT /admins/:id/password`).
///
/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn set_password<B: Backend>(backend: &mut B, id: &str, new_password: &str) -> Result<ApiResponse, RequestError> {
    let path = format!("{}/password", item_path(BASE, id));
    backend
        .send(ApiRequest::put(path).json(&PasswordReset { nova_senha: new_password })?.authenticated())
        .await
}
