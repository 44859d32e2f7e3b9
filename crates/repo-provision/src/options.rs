//! Caller input for a resolution

use repo_auth::{HostingServer, UserCredential};

use crate::stages::Mode;

/// Name used in batch mode when nothing better is known.
pub const PLACEHOLDER_REPO_NAME: &str = "dummy";

/// Optional hints from the caller. Every field may be absent.
///
/// The server stage writes the chosen server URL back into `server_url`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryRequestOptions {
    pub server_url: Option<String>,
    /// Provider kind to record when `server_url` is not yet registered
    pub server_kind: Option<String>,
    pub username: Option<String>,
    /// Token to use when the stored credential has none
    pub api_token: Option<String>,
    pub owner: Option<String>,
    pub repo_name: Option<String>,
    pub private: bool,
}

impl RepositoryRequestOptions {
    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    pub fn with_server_kind(mut self, kind: impl Into<String>) -> Self {
        self.server_kind = Some(kind.into());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_repo_name(mut self, name: impl Into<String>) -> Self {
        self.repo_name = Some(name.into());
        self
    }

    pub fn with_private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }
}

/// Treat `Some("")` like `None`.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Treat blank values like `None`.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Everything one resolution needs from its caller.
#[derive(Debug, Clone, Default)]
pub struct ResolveRequest {
    pub batch_mode: bool,
    pub options: RepositoryRequestOptions,
    /// Server to use instead of consulting the store
    pub server: Option<HostingServer>,
    /// Credential to use instead of consulting the store
    pub credential: Option<UserCredential>,
    /// Skip the provider check that the name is still free
    pub allow_existing_repository: bool,
    /// Suggested name; also appears in log output
    pub default_repo_name: String,
}

impl ResolveRequest {
    pub fn batch(options: RepositoryRequestOptions) -> Self {
        Self {
            batch_mode: true,
            options,
            ..Self::default()
        }
    }

    pub fn interactive(options: RepositoryRequestOptions) -> Self {
        Self {
            batch_mode: false,
            options,
            ..Self::default()
        }
    }

    pub fn with_server(mut self, server: HostingServer) -> Self {
        self.server = Some(server);
        self
    }

    pub fn with_credential(mut self, credential: UserCredential) -> Self {
        self.credential = Some(credential);
        self
    }

    pub fn allow_existing(mut self, allow: bool) -> Self {
        self.allow_existing_repository = allow;
        self
    }

    pub fn with_default_repo_name(mut self, name: impl Into<String>) -> Self {
        self.default_repo_name = name.into();
        self
    }

    pub fn mode(&self) -> Mode {
        if self.batch_mode {
            Mode::Batch
        } else {
            Mode::Interactive
        }
    }
}
