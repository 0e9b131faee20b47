//! HTTP client for the research backend.
//!
//! DESIGN
//! ======
//! The host does not interpret backend payloads. Requests are forwarded as raw
//! JSON bytes and replies come back with their status, content type, and body
//! untouched, so the browser sees the backend's own `detail` messages.

use std::time::Duration;

use axum::Json;
use axum::body::Bytes;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::config::BackendConfig;
use crate::error::HostError;

/// Relay failures that never produced a backend response.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Connect, timeout, or other transport failure.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The backend answered but its body could not be read.
    #[error("backend response unreadable: {0}")]
    Body(String),
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "backend relay failed");
        let body = serde_json::json!({ "detail": self.to_string() });
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

/// A backend response, passed through to the browser as-is.
#[derive(Debug)]
pub struct BackendReply {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl IntoResponse for BackendReply {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.body).into_response();
        if let Some(content_type) = self.content_type {
            response.headers_mut().insert(header::CONTENT_TYPE, content_type);
        }
        response
    }
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Build a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::HttpClientBuild`] if reqwest rejects the builder.
    pub fn new(config: &BackendConfig) -> Result<Self, HostError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| HostError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Forward a JSON body to `path` with POST.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] only when no response could be read; non-2xx
    /// statuses are returned as ordinary replies.
    pub async fn post_json(&self, path: &str, body: Bytes) -> Result<BackendReply, BackendError> {
        let resp = self
            .http
            .post(self.url(path))
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;
        read_reply(resp).await
    }

    /// Issue a GET to `path`.
    ///
    /// # Errors
    ///
    /// Same as [`BackendClient::post_json`].
    pub async fn get(&self, path: &str) -> Result<BackendReply, BackendError> {
        let resp = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;
        read_reply(resp).await
    }
}

async fn read_reply(resp: reqwest::Response) -> Result<BackendReply, BackendError> {
    let status = resp.status();
    let content_type = resp.headers().get(header::CONTENT_TYPE).cloned();
    let body = resp
        .bytes()
        .await
        .map_err(|e| BackendError::Body(e.to_string()))?;
    if !status.is_success() {
        tracing::debug!(%status, "backend returned non-success status");
    }
    Ok(BackendReply { status, content_type, body })
}
