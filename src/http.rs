//! Browser Transport
//!
//! `fetch` through gloo-net. Any HTTP status is a response; only a request
//! that never completes is an error.

use async_trait::async_trait;
use gloo_net::http::Request;

use filament_core::{ApiError, ApiResult, HttpRequest, HttpResponse, Method, Transport};

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let outgoing = match request.body {
            Some(body) => builder.header("Content-Type", "application/json").body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = outgoing.send().await.map_err(|e| {
            log::error!("[HTTP] {} {} failed: {}", request.method.as_str(), request.url, e);
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        log::debug!("[HTTP] {} {} -> {}", request.method.as_str(), request.url, status);

        Ok(HttpResponse { status, body })
    }
}
