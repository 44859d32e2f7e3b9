//! Error types for repo-auth

use std::path::PathBuf;

/// Result type for repo-auth operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or saving credentials
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse credential store at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Failed to serialize credential store for {path}: {message}")]
    ConfigSerialize { path: PathBuf, message: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error("No Git server registered with name or URL '{key}'")]
    ServerNotFound { key: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
