//! Axum host for the research paper discovery app: serves the Leptos SSR
//! shell and WASM bundle, and relays `/api/*` calls to the research backend.

mod backend;
mod config;
mod error;
mod routes;
mod state;

use crate::error::HostError;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = config::HostConfig::from_env()?;
    let backend = backend::BackendClient::new(&config.backend)?;
    tracing::info!(
        backend = backend.base_url(),
        request_timeout_secs = config.backend.timeouts.request_secs,
        "backend client initialized"
    );

    let app = routes::app(state::AppState::new(backend))?;

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| HostError::Bind { addr: addr.clone(), source })?;

    tracing::info!(port = config.port, "paperscout listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
