//! Image uploads for event and news forms.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

use super::item_path;
use crate::auth::Backend;
use crate::client::ApiRequest;
use crate::envelope::ApiResponse;
use crate::error::RequestError;
use crate::transport::FilePart;
use crate::types::UploadedImage;

const UPLOAD: &str = "/admin/upload";

/// Largest image the backend accepts.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Upload one image as multipart field `image`.
///
/// # Errors
///
/// Returns [`RequestError`] when the backend call fails or the reply carries
/// no `data`.
pub async fn upload_image<B: Backend>(backend: &mut B, file: FilePart) -> Result<UploadedImage, RequestError> {
    backend.send(ApiRequest::post(UPLOAD).multipart(file).authenticated()).await?.into_data()
}

/// # Errors
///
/// Returns [`RequestError`] when the backend call fails.
pub async fn delete_image<B: Backend>(backend: &mut B, filename: &str) -> Result<ApiResponse, RequestError> {
    backend.send(ApiRequest::delete(item_path(UPLOAD, filename)).authenticated()).await
}
