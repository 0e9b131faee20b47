//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host is a stateless relay, so it only carries the backend client.

use crate::backend::BackendClient;

#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
}

impl AppState {
    #[must_use]
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}
