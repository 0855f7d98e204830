//! Outbound HTTP transports.

use async_trait::async_trait;

use crate::{FetchError, HttpResponse, OutboundRequest};

/// Sends an outbound HTTP request.
///
/// Spin runs components single-threaded, so futures need not be `Send`.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: OutboundRequest) -> Result<HttpResponse, FetchError>;
}

#[async_trait(?Send)]
impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    async fn send(&self, request: OutboundRequest) -> Result<HttpResponse, FetchError> {
        (**self).send(request).await
    }
}

/// Transport backed by Spin's outbound HTTP.
///
/// The destination host must be listed in the component's
/// `allowed_outbound_hosts`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl HttpTransport for SpinTransport {
    async fn send(&self, request: OutboundRequest) -> Result<HttpResponse, FetchError> {
        use physio_core::Method;
        use spin_sdk::http::{Method as SpinMethod, Request, Response};

        let method = match request.method {
            Method::Get => SpinMethod::Get,
            Method::Head => SpinMethod::Head,
            Method::Post => SpinMethod::Post,
            Method::Put => SpinMethod::Put,
            Method::Delete => SpinMethod::Delete,
            Method::Patch => SpinMethod::Patch,
            Method::Options => SpinMethod::Options,
            Method::Other => {
                return Err(FetchError::RequestError(
                    "unsupported outbound method".to_string(),
                ))
            }
        };

        let mut builder = Request::builder();
        builder.method(method).uri(request.url.as_str());
        for (key, value) in &request.headers {
            builder.header(key.as_str(), value.as_str());
        }
        let outbound = builder.body(request.body.unwrap_or_default()).build();

        let response: Response = spin_sdk::http::send(outbound)
            .await
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let status = *response.status();
        let headers = response
            .headers()
            .map(|(k, v)| (k.to_string(), v.as_str().unwrap_or("").to_string()))
            .collect();

        Ok(HttpResponse::new(status, headers, response.into_body()))
    }
}
