//! `fetch`-backed transport for the portal API client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with "not available on server"; pages
//! only issue requests from the browser, after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Network failures and unreadable bodies become `TransportError`; HTTP
//! status handling belongs to the API client, so non-2xx responses are
//! returned as-is.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use portal::transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};

/// Transport over the browser's `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(any(test, feature = "hydrate"))]
fn network_failed_message(method: Method, url: &str, detail: &str) -> String {
    format!("{} {url} failed: {detail}", method.as_str())
}

impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::RequestBuilder;
            use portal::transport::HttpBody;

            let HttpRequest { method, url, headers, body } = request;
            let mut builder = match method {
                Method::Get => gloo_net::http::Request::get(&url),
                Method::Post => gloo_net::http::Request::post(&url),
                Method::Put => gloo_net::http::Request::put(&url),
                Method::Delete => gloo_net::http::Request::delete(&url),
            };
            for (name, value) in &headers {
                builder = builder.header(name, value);
            }

            let fail = |err: gloo_net::Error| TransportError(network_failed_message(method, &url, &err.to_string()));
            let prepared = match body {
                HttpBody::Empty => RequestBuilder::build(builder),
                HttpBody::Json(text) => builder.body(text),
                HttpBody::Multipart(part) => {
                    let form = super::files::form_data(&part).map_err(TransportError)?;
                    builder.body(form)
                }
            }
            .map_err(fail)?;

            let response = prepared.send().await.map_err(fail)?;
            let status = response.status();
            let body = response.text().await.map_err(fail)?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError("not available on server".to_owned()))
        }
    }
}
