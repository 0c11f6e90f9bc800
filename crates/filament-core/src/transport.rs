//! Transport Layer
//!
//! The single seam between the client and the network. The browser build
//! plugs in a fetch-based transport; tests plug in [`MockTransport`].

use async_trait::async_trait;

use crate::error::ApiResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Outgoing request, fully resolved against the API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Sent as `Authorization: Bearer <token>`
    pub bearer: Option<String>,
    /// JSON text, sent with `Content-Type: application/json`
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_auth_failure(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

/// Sends one request and returns whatever the server answered.
///
/// `Err` is reserved for requests that never got a response
/// ([`ApiError::Network`](crate::ApiError::Network)); every HTTP status,
/// including errors, comes back as `Ok`.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse>;
}

#[cfg(test)]
pub use mock::MockTransport;
