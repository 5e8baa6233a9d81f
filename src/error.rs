//! Error types for `taskboard`.

/// Errors that can occur while starting or running the server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred (resolving, binding, or serving the listener).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
