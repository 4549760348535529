//! Server startup error types.

use thiserror::Error;

/// Errors that can occur while bringing the server up or serving connections.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not be bound (or the host did not resolve).
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop failed.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;
