//! REST API helpers for talking to the research backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the page's
//! own origin; the host relays `/api/*` to the backend.
//! Server-side (SSR): stubs returning an error/`None` since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (transport, non-2xx, undecodable body) collapses into one
//! display string. There is no retry; the user resubmits.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{HealthStatus, ProcessTopicResponse, QueryRagResponse};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;

#[cfg(any(test, feature = "hydrate"))]
const PROCESS_TOPIC_ENDPOINT: &str = "/api/process-topic";
#[cfg(any(test, feature = "hydrate"))]
const QUERY_RAG_ENDPOINT: &str = "/api/query-rag";
#[cfg(any(test, feature = "hydrate"))]
const HEALTH_ENDPOINT: &str = "/api/health";

#[cfg(any(test, feature = "hydrate"))]
const PROCESS_TOPIC_FAILED: &str = "Failed to process topic";
#[cfg(any(test, feature = "hydrate"))]
const QUERY_RAG_FAILED: &str = "Failed to query RAG system";

/// Pick the message shown for a non-2xx response.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(body: Option<&ErrorBody>, fallback: &str) -> String {
    body.and_then(ErrorBody::message)
        .unwrap_or_else(|| fallback.to_owned())
}

#[cfg(any(test, feature = "hydrate"))]
fn process_topic_payload(topic: &str) -> serde_json::Value {
    serde_json::to_value(super::types::ProcessTopicRequest { topic: topic.to_owned() }).unwrap_or_default()
}

#[cfg(any(test, feature = "hydrate"))]
fn query_rag_payload(session_id: &str, question: &str) -> serde_json::Value {
    serde_json::to_value(super::types::QueryRagRequest {
        session_id: session_id.to_owned(),
        question: question.to_owned(),
    })
    .unwrap_or_default()
}

#[cfg(feature = "hydrate")]
async fn post_json<T>(endpoint: &str, payload: &serde_json::Value, fallback: &str) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(endpoint)
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        let body = resp.json::<ErrorBody>().await.ok();
        log::warn!("{endpoint} returned {}", resp.status());
        return Err(failure_message(body.as_ref(), fallback));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Submit a topic via `POST /api/process-topic`.
///
/// # Errors
///
/// Returns the backend's `detail` message for non-2xx responses, or the
/// transport/decode error text.
pub async fn process_topic(topic: &str) -> Result<ProcessTopicResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(PROCESS_TOPIC_ENDPOINT, &process_topic_payload(topic), PROCESS_TOPIC_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = topic;
        Err("not available on server".to_owned())
    }
}

/// Ask a question against a RAG session via `POST /api/query-rag`.
///
/// # Errors
///
/// Returns the backend's `detail` message for non-2xx responses (for example
/// an expired session), or the transport/decode error text.
pub async fn query_rag(session_id: &str, question: &str) -> Result<QueryRagResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(QUERY_RAG_ENDPOINT, &query_rag_payload(session_id, question), QUERY_RAG_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session_id, question);
        Err("not available on server".to_owned())
    }
}

/// Probe backend health via `GET /api/health`.
/// Returns `None` if the backend is unreachable or on the server.
pub async fn check_health() -> Option<HealthStatus> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(HEALTH_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<HealthStatus>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
