//! Error types for repo-provision

use crate::prompt::PromptError;

/// Result type for resolution
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Terminal failures of a resolution. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Batch mode found no server to fall back on
    #[error("No Git servers are configured")]
    NoServersConfigured,

    /// Batch mode found no credential to fall back on
    #[error("Server {server_url} has no user credentials defined")]
    NoCredentialsConfigured { server_url: String },

    /// The credential still has no usable token after editing
    #[error("You did not properly define the user authentication for {server}")]
    IncompleteAuthentication { server: String },

    /// The provider for the resolved server could not be constructed
    #[error("Could not create Git provider: {0}")]
    ProviderConstruction(#[source] repo_hosting::Error),

    #[error("No repository name specified")]
    RepositoryNameRequired,

    #[error("Prompt cancelled by user")]
    PromptCancelled,

    /// The prompt could not be shown or read
    #[error("Interactive prompt error: {message}")]
    Prompt { message: String },

    /// Writing the edited credential back to the store failed
    #[error("Failed to store git auth configuration for {server_url}: {source}")]
    Persist {
        server_url: String,
        #[source]
        source: repo_auth::Error,
    },

    /// A provider call failed for reasons other than name validation
    #[error(transparent)]
    Hosting(#[from] repo_hosting::Error),
}

impl From<PromptError> for ResolveError {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::Cancelled => Self::PromptCancelled,
            PromptError::Io { message } => Self::Prompt { message },
        }
    }
}

/// Whether a validation failure is about the name rather than the service.
pub(crate) fn is_rejection(err: &repo_hosting::Error) -> bool {
    matches!(
        err,
        repo_hosting::Error::InvalidName { .. } | repo_hosting::Error::AlreadyExists { .. }
    )
}
