//! Host startup errors.

/// Errors that stop the host before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// An environment variable held a value that could not be used.
    #[error("config parse failed: {0}")]
    Config(String),

    /// The backend HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The Leptos site options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The listener could not bind its address.
    #[error("bind {addr} failed: {source}")]
    Bind { addr: String, source: std::io::Error },

    /// The server stopped with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
