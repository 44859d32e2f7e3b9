//! Error types for repo-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the credential store
    #[error(transparent)]
    Auth(#[from] repo_auth::Error),

    /// Error from a hosting provider
    #[error(transparent)]
    Hosting(#[from] repo_hosting::Error),

    /// Resolution failed
    #[error(transparent)]
    Resolve(#[from] repo_provision::ResolveError),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Resolver settings file could not be parsed
    #[error("Invalid settings file {path}: {message}")]
    Settings { path: PathBuf, message: String },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
