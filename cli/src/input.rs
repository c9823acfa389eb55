//! Turning command-line arguments into request payloads.
//!
//! Create and update commands take `--data` as a JSON object (inline, or
//! `@path` to read a file). The object is merged over a base record: the
//! empty draft for `create`, the current record for `update`. Only the keys
//! given change.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::path::Path;

use portal::endpoints::media::MAX_IMAGE_BYTES;
use portal::transport::FilePart;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::CliError;

/// Parse a `--data` argument into a JSON object.
///
/// # Errors
///
/// Returns [`CliError::Input`] when the text is not a JSON object and
/// [`CliError::Io`] when an `@path` file cannot be read.
pub fn read_object(raw: &str) -> Result<Map<String, Value>, CliError> {
    let text = match raw.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)?,
        None => raw.to_owned(),
    };
    match serde_json::from_str(&text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(CliError::Input("--data must be a JSON object".to_owned())),
        Err(err) => Err(CliError::Input(format!("--data is not valid JSON: {err}"))),
    }
}

/// `base` with every key of `patch` overwritten.
///
/// # Errors
///
/// Returns [`CliError::Input`] when a patched value has the wrong type for
/// its field.
pub fn merge<T: Serialize + DeserializeOwned>(base: &T, patch: Map<String, Value>) -> Result<T, CliError> {
    let mut value = serde_json::to_value(base)?;
    if let Value::Object(fields) = &mut value {
        fields.extend(patch);
    }
    serde_json::from_value(value).map_err(|err| CliError::Input(format!("invalid field in --data: {err}")))
}

/// Content type for an image path, by extension.
#[must_use]
pub fn image_content_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Read an image from disk as the upload route's `image` part.
///
/// # Errors
///
/// Returns [`CliError::Input`] for paths that are not a supported image or
/// exceed the upload limit, and [`CliError::Io`] when the file cannot be read.
pub fn read_image(path: &Path) -> Result<FilePart, CliError> {
    let content_type = image_content_type(path)
        .ok_or_else(|| CliError::Input(format!("{} is not a JPEG, PNG, GIF or WebP image", path.display())))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| CliError::Input(format!("{} has no file name", path.display())))?;
    let bytes = std::fs::read(path)?;
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(CliError::Input(format!(
            "{} is larger than {}",
            path.display(),
            portal::format::format_size(MAX_IMAGE_BYTES as u64)
        )));
    }
    Ok(FilePart::image(file_name, content_type, bytes))
}
