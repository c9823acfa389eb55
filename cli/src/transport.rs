//! `reqwest`-backed transport for the portal API client.
//!
//! Non-2xx responses are returned as-is; the API client decides what a
//! status means. Only connection failures and unreadable bodies become
//! [`TransportError`].

use portal::transport::{HttpBody, HttpRequest, HttpResponse, Method, Transport, TransportError};
use reqwest::multipart::{Form, Part};

#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let HttpRequest { method, url, headers, body } = request;
        let fail = |detail: String| TransportError(format!("{} {url} failed: {detail}", method.as_str()));

        let mut builder = self.http.request(http_method(method), &url);
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }
        builder = match body {
            HttpBody::Empty => builder,
            HttpBody::Json(text) => builder.body(text),
            HttpBody::Multipart(part) => {
                let file = Part::bytes(part.bytes)
                    .file_name(part.file_name)
                    .mime_str(&part.content_type)
                    .map_err(|err| fail(err.to_string()))?;
                builder.multipart(Form::new().part(part.field, file))
            }
        };

        let response = builder.send().await.map_err(|err| fail(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|err| fail(err.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}
