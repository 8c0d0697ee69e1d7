//! HTTP transport seam.
//!
//! The pipeline builds an [`HttpRequest`] and hands it to a [`Transport`];
//! in the browser that is `gloo-net` (`fetch`) raced against a timer. Tests
//! substitute a scripted transport.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;

pub const AUTHORIZATION: &str = "Authorization";

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

/// An outgoing request before transmission.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Endpoint path; the pipeline prefixes the API base before sending.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), headers: Vec::new(), body: None }
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
    pub fn with_query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Attach a JSON body. Serialization failures leave the body empty.
    #[must_use]
    pub fn with_json<T: serde::Serialize>(mut self, body: &T) -> Self {
        self.body = serde_json::to_value(body).ok();
        self
    }

    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Insert or replace a header.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(slot) = self.headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
            slot.1 = value;
        } else {
            self.headers.push((name.to_owned(), value));
        }
    }

    /// Path plus percent-encoded query string.
    #[must_use]
    pub fn url(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }
}

/// A completed exchange: status plus the raw body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request did not complete.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {0} ms")]
    Timeout(u64),
}

impl From<TransportError> for crate::net::types::ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Network(msg) => Self::Transport(msg),
            TransportError::Timeout(ms) => Self::Timeout(ms),
        }
    }
}

#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// `fetch`-based transport with a per-request timeout.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug)]
pub struct FetchTransport {
    timeout_ms: u64,
}

#[cfg(feature = "csr")]
impl FetchTransport {
    #[must_use]
    pub fn new(timeout_ms: u64) -> Self {
        Self { timeout_ms }
    }
}

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        use futures::future::{Either, select};
        use gloo_net::http::Request;

        let url = request.url();
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let exchange = async move {
            let prepared = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError::Network(e.to_string()))?;
            let resp = prepared.send().await.map_err(|e| TransportError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| TransportError::Network(e.to_string()))?;
            Ok(HttpResponse { status, body })
        };

        let millis = u32::try_from(self.timeout_ms).unwrap_or(u32::MAX);
        let timer = gloo_timers::future::TimeoutFuture::new(millis);
        match select(Box::pin(exchange), Box::pin(timer)).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(TransportError::Timeout(self.timeout_ms)),
        }
    }
}

/// Transport used by the running app.
#[cfg(feature = "csr")]
#[must_use]
pub fn app_transport(config: &crate::config::ClientConfig) -> std::rc::Rc<dyn Transport> {
    std::rc::Rc::new(FetchTransport::new(config.request_timeout_ms))
}

/// Outside the browser there is no network stack; every request fails fast.
#[cfg(not(feature = "csr"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineTransport;

#[cfg(not(feature = "csr"))]
#[async_trait(?Send)]
impl Transport for OfflineTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        Err(TransportError::Network(format!("{} {} not available outside the browser", request.method.as_str(), request.path)))
    }
}

#[cfg(not(feature = "csr"))]
#[must_use]
pub fn app_transport(_config: &crate::config::ClientConfig) -> std::rc::Rc<dyn Transport> {
    std::rc::Rc::new(OfflineTransport)
}
