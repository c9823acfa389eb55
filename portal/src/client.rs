//! Outbound HTTP wrapper: builds requests, attaches the bearer token, reads
//! the envelope and normalizes failures.
//!
//! DESIGN
//! ======
//! The client is stateless apart from its config and transport. It never
//! reads or writes the session; the caller passes the token in. A request
//! marked authenticated with no token is sent without `Authorization` and the
//! backend decides; it is not failed locally.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::envelope::ApiResponse;
use crate::error::RequestError;
use crate::transport::{FilePart, HttpBody, HttpRequest, Method, Transport};

/// Payload of an [`ApiRequest`].
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    None,
    Json(Value),
    Multipart(FilePart),
}

/// One backend call: `request(path, {method, body, auth})`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: RequestBody,
    /// Attach the session's bearer token when one is present.
    pub auth: bool,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), body: RequestBody::None, auth: false }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    #[must_use]
    pub fn authenticated(mut self) -> Self {
        self.auth = true;
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Decode`] if `body` cannot be represented as JSON.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, RequestError> {
        let value = serde_json::to_value(body)
            .map_err(|err| RequestError::decode(0, format!("request body is not JSON: {err}")))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    #[must_use]
    pub fn json_value(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    #[must_use]
    pub fn multipart(mut self, part: FilePart) -> Self {
        self.body = RequestBody::Multipart(part);
        self
    }
}

/// Path segment with `/`, `?`, `#` and friends percent-encoded.
#[must_use]
pub fn path_segment(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// The single point of outbound HTTP communication.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `request`, attaching `bearer` when the request is authenticated.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the transport fails, the body is not a
    /// JSON envelope, or the envelope reports failure.
    pub async fn execute(&self, request: ApiRequest, bearer: Option<&str>) -> Result<ApiResponse, RequestError> {
        let method = request.method;
        let path = request.path.clone();
        let http = self.build(request, bearer)?;

        tracing::debug!(method = method.as_str(), %path, "api request");
        let response = self.transport.send(http).await.map_err(|err| {
            tracing::warn!(method = method.as_str(), %path, error = %err, "api transport failed");
            RequestError::transport(err.0)
        })?;

        let result = ApiResponse::from_body(response.status, &response.body);
        if let Err(err) = &result {
            tracing::warn!(method = method.as_str(), %path, status = response.status, error = %err, "api request failed");
        }
        result
    }

    fn build(&self, request: ApiRequest, bearer: Option<&str>) -> Result<HttpRequest, RequestError> {
        let mut headers = Vec::new();
        let body = match request.body {
            RequestBody::None => {
                headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
                HttpBody::Empty
            }
            RequestBody::Json(value) => {
                headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
                let text = serde_json::to_string(&value)
                    .map_err(|err| RequestError::decode(0, format!("request body is not JSON: {err}")))?;
                HttpBody::Json(text)
            }
            // The transport sets the multipart boundary header itself.
            RequestBody::Multipart(part) => HttpBody::Multipart(part),
        };

        if request.auth {
            match bearer {
                Some(token) => headers.push(("Authorization".to_owned(), format!("Bearer {token}"))),
                None => tracing::debug!(path = %request.path, "no session token; sending without authorization"),
            }
        }

        Ok(HttpRequest { method: request.method, url: self.config.endpoint(&request.path), headers, body })
    }
}
