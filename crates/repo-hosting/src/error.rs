//! Error types for repo-hosting

/// Result type for repo-hosting operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while binding or talking to a hosting provider
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Unsupported Git provider kind '{kind}' for server {url}")]
    UnsupportedKind { kind: String, url: String },

    #[error("Invalid Git server URL '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },

    #[error("Credential for '{username}' on {url} has no usable access token")]
    InvalidCredential { username: String, url: String },

    #[error("Repository {full_name} not found")]
    NotFound { full_name: String },

    #[error("Repository {full_name} already exists")]
    AlreadyExists { full_name: String },

    #[error("Invalid repository name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Git provider request failed: {message}")]
    Transport { message: String },

    #[error("Operation '{operation}' is not supported by this connection")]
    Unsupported { operation: String },
}

impl Error {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_name(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
