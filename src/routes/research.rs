//! Research relay handlers.
//!
//! Each handler forwards to the backend path of the same name. The request
//! body is not parsed here; validation belongs to the backend.

#[cfg(test)]
#[path = "research_test.rs"]
mod research_test;

use axum::body::Bytes;
use axum::extract::State;

use crate::backend::{BackendError, BackendReply};
use crate::state::AppState;

const PROCESS_TOPIC_PATH: &str = "/api/process-topic";
const QUERY_RAG_PATH: &str = "/api/query-rag";
const HEALTH_PATH: &str = "/health";

/// `POST /api/process-topic`
pub async fn process_topic(State(state): State<AppState>, body: Bytes) -> Result<BackendReply, BackendError> {
    tracing::info!(bytes = body.len(), "relaying process-topic");
    state.backend.post_json(PROCESS_TOPIC_PATH, body).await
}

/// `POST /api/query-rag`
pub async fn query_rag(State(state): State<AppState>, body: Bytes) -> Result<BackendReply, BackendError> {
    tracing::info!(bytes = body.len(), "relaying query-rag");
    state.backend.post_json(QUERY_RAG_PATH, body).await
}

/// `GET /api/health`, answered by the backend's `/health`.
pub async fn health(State(state): State<AppState>) -> Result<BackendReply, BackendError> {
    state.backend.get(HEALTH_PATH).await
}
