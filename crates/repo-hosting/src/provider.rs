//! The hosting provider capability and provider binding

use std::fmt;

use repo_auth::{HostingServer, UserCredential};

use crate::api::{Connector, HostingApi, Repository};
use crate::bitbucket::BitbucketProvider;
use crate::error::{Error, Result};
use crate::gitea::GiteaProvider;
use crate::github::GitHubProvider;
use crate::gitlab::GitLabProvider;
use crate::kind::ProviderKind;

/// An authenticated connection shared by all provider implementations.
pub struct Connection {
    kind: ProviderKind,
    server_url: String,
    username: String,
    api: Box<dyn HostingApi>,
}

impl Connection {
    pub fn new(
        kind: ProviderKind,
        server: &HostingServer,
        credential: &UserCredential,
        api: Box<dyn HostingApi>,
    ) -> Self {
        Self {
            kind,
            server_url: server.url.clone(),
            username: credential.username.clone(),
            api,
        }
    }

    pub fn api(&self) -> &dyn HostingApi {
        self.api.as_ref()
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("kind", &self.kind)
            .field("server_url", &self.server_url)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// What the resolver and its callers can do with a bound hosting service.
///
/// Implementations supply the kind-specific parts: name syntax, the
/// qualified-name convention, and the slug used on the wire. Repository
/// operations are provided on top of those.
pub trait HostingProvider: fmt::Debug {
    fn connection(&self) -> &Connection;

    /// Reject names the service would never accept, without a round trip.
    fn check_name_syntax(&self, name: &str) -> Result<()>;

    fn kind(&self) -> ProviderKind {
        self.connection().kind
    }

    fn server_url(&self) -> &str {
        &self.connection().server_url
    }

    /// Username of the credential this provider is bound to.
    fn username(&self) -> &str {
        &self.connection().username
    }

    /// Identifier of the repository in API paths.
    fn repository_slug(&self, name: &str) -> String {
        name.to_string()
    }

    /// The string that identifies a repository uniquely on this service.
    fn qualified_name(&self, owner: &str, name: &str) -> String {
        format!("{owner}/{}", self.repository_slug(name))
    }

    fn get_repository(&self, owner: &str, name: &str) -> Result<Repository> {
        let slug = self.repository_slug(name);
        self.connection()
            .api()
            .get_repository(owner, &slug)?
            .ok_or_else(|| Error::NotFound {
                full_name: self.qualified_name(owner, name),
            })
    }

    /// Create the repository, failing if it already exists.
    fn create_repository(&self, owner: &str, name: &str, private: bool) -> Result<Repository> {
        self.check_name_syntax(name)?;
        tracing::info!(
            full_name = %self.qualified_name(owner, name),
            private,
            "Creating repository"
        );
        self.connection()
            .api()
            .create_repository(owner, &self.repository_slug(name), private)
    }

    /// Check that `name` can be used for a new repository under `owner`.
    fn validate_repository_name(&self, owner: &str, name: &str) -> Result<()> {
        self.check_name_syntax(name)?;
        let slug = self.repository_slug(name);
        if self.connection().api().get_repository(owner, &slug)?.is_some() {
            return Err(Error::AlreadyExists {
                full_name: self.qualified_name(owner, name),
            });
        }
        Ok(())
    }

    fn list_organizations(&self) -> Result<Vec<String>> {
        self.connection().api().list_organizations()
    }
}

/// Reject URLs a client could never connect to.
pub fn validate_server_url(url: &str) -> Result<()> {
    let invalid = |reason: &str| Error::InvalidServerUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    };

    let (scheme, rest) = url
        .split_once("://")
        .ok_or_else(|| invalid("missing scheme"))?;
    if scheme != "http" && scheme != "https" {
        return Err(invalid("scheme must be http or https"));
    }
    let host = rest.split('/').next().unwrap_or_default();
    if host.is_empty() {
        return Err(invalid("missing host"));
    }
    if url.chars().any(char::is_whitespace) {
        return Err(invalid("contains whitespace"));
    }
    Ok(())
}

/// Select and construct the provider for a resolved server and credential.
///
/// The server's declared kind wins; a server without one falls back to
/// detection from its URL.
pub fn bind_provider(
    server: &HostingServer,
    credential: &UserCredential,
    connector: &dyn Connector,
) -> Result<Box<dyn HostingProvider>> {
    let unsupported = || Error::UnsupportedKind {
        kind: server.kind.clone(),
        url: server.url.clone(),
    };
    let kind = if server.kind.trim().is_empty() {
        ProviderKind::detect(&server.url).ok_or_else(unsupported)?
    } else {
        server.kind.parse::<ProviderKind>().map_err(|_| unsupported())?
    };

    validate_server_url(&server.url)?;

    if credential.is_invalid() {
        return Err(Error::InvalidCredential {
            username: credential.username.clone(),
            url: server.url.clone(),
        });
    }

    let api = connector.connect(kind, server, credential)?;
    let connection = Connection::new(kind, server, credential, api);
    tracing::debug!(%kind, url = %server.url, username = %credential.username, "Bound Git provider");

    let provider: Box<dyn HostingProvider> = match kind {
        ProviderKind::GitHub => Box::new(GitHubProvider::new(connection)),
        ProviderKind::GitLab => Box::new(GitLabProvider::new(connection)),
        ProviderKind::Gitea => Box::new(GiteaProvider::new(connection)),
        ProviderKind::Bitbucket => Box::new(BitbucketProvider::new(connection)),
    };
    Ok(provider)
}

/// Shared length and emptiness checks.
pub(crate) fn check_length(name: &str, max: usize) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::invalid_name(name, "name is required"));
    }
    if name.chars().count() > max {
        return Err(Error::invalid_name(
            name,
            format!("must be at most {max} characters"),
        ));
    }
    Ok(())
}
