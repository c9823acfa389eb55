//! Picked files to multipart parts and back.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use portal::endpoints::media::MAX_IMAGE_BYTES;
use portal::transport::FilePart;

/// Accepted by the upload endpoint.
pub const IMAGE_TYPES: &str = "image/png,image/jpeg,image/gif,image/webp";

/// Reject files the backend would refuse anyway.
///
/// # Errors
///
/// Returns a user-facing message when the file is not an image or too large.
pub fn check_image(content_type: &str, size: usize) -> Result<(), String> {
    if !content_type.starts_with("image/") {
        return Err("Selecione um arquivo de imagem".to_owned());
    }
    if size > MAX_IMAGE_BYTES {
        return Err(format!("A imagem deve ter no máximo {}", portal::format::format_size(MAX_IMAGE_BYTES as u64)));
    }
    Ok(())
}

/// Read a picked file into an `image` part.
///
/// # Errors
///
/// Returns a user-facing message when the file fails [`check_image`] or
/// cannot be read.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub async fn read_image(file: web_sys::File) -> Result<FilePart, String> {
    let size = file.size() as usize;
    check_image(&file.type_(), size)?;
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Não foi possível ler o arquivo".to_owned())?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(FilePart::image(file.name(), file.type_(), bytes))
}

/// Browser `FormData` carrying `part` under its field name.
///
/// # Errors
///
/// Returns a message when the browser refuses to build the form.
#[cfg(feature = "hydrate")]
pub fn form_data(part: &FilePart) -> Result<web_sys::FormData, String> {
    let fail = |_| "could not build multipart body".to_owned();
    let bytes = js_sys::Uint8Array::from(part.bytes.as_slice());
    let chunks = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&part.content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&chunks, &options).map_err(fail)?;
    let form = web_sys::FormData::new().map_err(fail)?;
    form.append_with_blob_and_filename(&part.field, &blob, &part.file_name).map_err(fail)?;
    Ok(form)
}
