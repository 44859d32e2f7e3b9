//! In-memory snapshot of the credential store
//!
//! The snapshot is what the resolver reads "current server" and "current
//! user" from. Lookups that create missing records only touch the snapshot;
//! nothing is written to disk until a [`CredentialStore`](crate::CredentialStore)
//! persists it.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::server::{HostingServer, UserCredential};

/// Known servers plus the process-independent "current" selections.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Name or URL of the server used when none is requested
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub current_server: String,

    /// Username offered as the default when editing a credential
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_username: String,

    /// Registered servers, in registration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<HostingServer>,
}

/// Canonical form of a server URL used for matching.
pub fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Host part of a URL, used as the default name of servers created on the fly.
fn host_of(url: &str) -> &str {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    without_scheme.split('/').next().unwrap_or(without_scheme)
}

impl AuthConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn servers(&self) -> &[HostingServer] {
        &self.servers
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn current_server(&self) -> Option<&str> {
        if self.current_server.is_empty() {
            None
        } else {
            Some(&self.current_server)
        }
    }

    pub fn find_server(&self, url: &str) -> Option<&HostingServer> {
        let url = normalize_url(url);
        self.servers.iter().find(|s| normalize_url(&s.url) == url)
    }

    /// Find a server whose name or URL equals `key`.
    pub fn find_server_by_name_or_url(&self, key: &str) -> Option<&HostingServer> {
        let url = normalize_url(key);
        self.servers
            .iter()
            .find(|s| s.name == key || normalize_url(&s.url) == url)
    }

    /// Index of the server registered for `url`, registering it if needed.
    fn ensure_server(&mut self, url: &str, kind: &str) -> usize {
        let normalized = normalize_url(url);
        if let Some(index) = self
            .servers
            .iter()
            .position(|s| normalize_url(&s.url) == normalized)
        {
            return index;
        }

        tracing::debug!(url = %normalized, kind, "Registering new Git server");
        let name = host_of(&normalized).to_string();
        self.servers.push(HostingServer::new(normalized, name, kind));
        self.servers.len() - 1
    }

    /// Return the server registered for `url`, registering it first if needed.
    ///
    /// `kind` fills in the provider kind of a new record, and of an existing
    /// record that does not have one yet.
    pub fn get_or_create_server(&mut self, url: &str, kind: Option<&str>) -> HostingServer {
        let kind = kind.unwrap_or_default();
        let index = self.ensure_server(url, kind);

        let server = &mut self.servers[index];
        if server.kind.is_empty() && !kind.is_empty() {
            tracing::debug!(url = %server.url, kind, "Filling in missing server kind");
            server.kind = kind.to_string();
        }
        server.clone()
    }

    /// Look up a credential by username on the server registered for `server_url`.
    pub fn find_credential(&self, server_url: &str, username: &str) -> Option<UserCredential> {
        self.find_server(server_url)
            .and_then(|s| s.find_user(username))
            .cloned()
    }

    /// Return the credential for `username`, registering the server and an
    /// empty credential if either is missing.
    pub fn get_or_create_credential(&mut self, server_url: &str, username: &str) -> UserCredential {
        let index = self.ensure_server(server_url, "");
        let server = &mut self.servers[index];
        if let Some(existing) = server.find_user(username) {
            return existing.clone();
        }

        tracing::debug!(url = %server.url, username, "Registering new credential");
        let credential = UserCredential::without_token(username);
        server.users.push(credential.clone());
        credential
    }

    /// Store `credential` and make it the current selection.
    ///
    /// The credential becomes the server's current user, the server becomes
    /// the current server, and the username becomes the default username.
    pub fn set_credential(&mut self, server_url: &str, credential: &UserCredential) {
        let index = self.ensure_server(server_url, "");
        let server = &mut self.servers[index];
        server.upsert_user(credential.clone());
        if !credential.username.is_empty() {
            server.current_user = credential.username.clone();
            self.default_username = credential.username.clone();
        }
        self.current_server = self.servers[index].url.clone();
    }

    /// Register a server explicitly, updating name and kind if it exists.
    pub fn add_server(&mut self, url: &str, name: &str, kind: &str) -> &HostingServer {
        let index = self.ensure_server(url, kind);
        let server = &mut self.servers[index];
        if !name.is_empty() {
            server.name = name.to_string();
        }
        if !kind.is_empty() {
            server.kind = kind.to_string();
        }
        server
    }

    /// Select the current server by name or URL.
    pub fn use_server(&mut self, key: &str) -> Result<()> {
        let url = self
            .find_server_by_name_or_url(key)
            .map(|s| s.url.clone())
            .ok_or_else(|| Error::ServerNotFound {
                key: key.to_string(),
            })?;
        self.current_server = url;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn get_or_create_server_registers_once() {
        let mut config = AuthConfig::new();
        let created = config.get_or_create_server("https://git.example.com/", Some("gitea"));
        assert_eq!(created.url, "https://git.example.com");
        assert_eq!(created.name, "git.example.com");
        assert_eq!(created.kind, "gitea");

        let again = config.get_or_create_server("https://git.example.com", None);
        assert_eq!(again, created);
        assert_eq!(config.servers().len(), 1);
    }

    #[test]
    fn get_or_create_server_fills_missing_kind() {
        let mut config = AuthConfig::new();
        config.add_server("https://git.example.com", "Example", "");
        let server = config.get_or_create_server("https://git.example.com", Some("gitlab"));
        assert_eq!(server.kind, "gitlab");
        assert_eq!(server.name, "Example");
    }

    #[test]
    fn get_or_create_credential_creates_server_and_user() {
        let mut config = AuthConfig::new();
        let cred = config.get_or_create_credential("https://github.com", "alice");
        assert_eq!(cred, UserCredential::without_token("alice"));
        assert!(config.find_server("https://github.com").is_some());
        assert_eq!(
            config.find_credential("https://github.com", "alice"),
            Some(UserCredential::without_token("alice"))
        );
    }

    #[test]
    fn get_or_create_credential_returns_existing() {
        let mut config = AuthConfig::new();
        config.set_credential("https://github.com", &UserCredential::new("alice", "tok"));
        let cred = config.get_or_create_credential("https://github.com/", "alice");
        assert_eq!(cred.api_token, "tok");
        assert_eq!(config.find_server("https://github.com").unwrap().users.len(), 1);
    }

    #[test]
    fn set_credential_updates_current_selections() {
        let mut config = AuthConfig::new();
        config.add_server("https://gitlab.com", "GitLab", "gitlab");
        config.set_credential("https://gitlab.com", &UserCredential::new("bob", "tok"));

        assert_eq!(config.current_server(), Some("https://gitlab.com"));
        assert_eq!(config.default_username, "bob");
        let server = config.find_server("https://gitlab.com").unwrap();
        assert_eq!(server.current_user, "bob");
    }

    #[test]
    fn use_server_accepts_name_or_url() {
        let mut config = AuthConfig::new();
        config.add_server("https://github.com", "GitHub", "github");
        config.add_server("https://gitlab.com", "GitLab", "gitlab");

        config.use_server("GitLab").unwrap();
        assert_eq!(config.current_server(), Some("https://gitlab.com"));

        config.use_server("https://github.com/").unwrap();
        assert_eq!(config.current_server(), Some("https://github.com"));

        assert!(matches!(
            config.use_server("nope"),
            Err(Error::ServerNotFound { .. })
        ));
    }

    #[test]
    fn host_of_strips_scheme_and_path() {
        assert_eq!(host_of("https://git.example.com/group"), "git.example.com");
        assert_eq!(host_of("git.example.com"), "git.example.com");
    }
}
