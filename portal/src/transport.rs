//! The HTTP seam between the API client and a concrete HTTP stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! The CLI implements [`Transport`] over `reqwest`, the browser build over
//! `gloo-net`, and tests over a scripted fake. Futures are not required to be
//! `Send` because browser fetch futures are not.

use std::future::Future;

/// HTTP verbs the backend uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A single file sent as `multipart/form-data`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePart {
    /// Form field name, `image` for the upload route.
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FilePart {
    /// An image destined for `POST /admin/upload`.
    #[must_use]
    pub fn image(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            field: "image".to_owned(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// Request payload as handed to the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HttpBody {
    Empty,
    /// Serialized JSON text.
    Json(String),
    Multipart(FilePart),
}

/// A fully resolved outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: HttpBody,
}

impl HttpRequest {
    /// First header value named `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response: status plus body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// The request never produced a response (DNS, connection, CORS, ...).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Sends one [`HttpRequest`] and yields the raw response.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, TransportError>>;
}
