//! Transport seam between providers and the remote service

use repo_auth::{HostingServer, UserCredential};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::kind::ProviderKind;

/// A repository as reported by the hosting service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub owner: String,
    pub name: String,
    pub full_name: String,
    pub clone_url: String,
    pub html_url: String,
    pub private: bool,
}

/// Raw calls against one hosting service, already authenticated.
///
/// Providers layer naming rules and error mapping on top; implementations
/// only move data.
pub trait HostingApi {
    /// `Ok(None)` when the repository does not exist.
    fn get_repository(&self, owner: &str, name: &str) -> Result<Option<Repository>>;

    fn create_repository(&self, owner: &str, name: &str, private: bool) -> Result<Repository>;

    /// Organisations (groups, workspaces) the authenticated user belongs to.
    fn list_organizations(&self) -> Result<Vec<String>>;
}

/// Opens a [`HostingApi`] for a server and credential.
pub trait Connector {
    fn connect(
        &self,
        kind: ProviderKind,
        server: &HostingServer,
        credential: &UserCredential,
    ) -> Result<Box<dyn HostingApi>>;
}

/// Connector that never leaves the machine.
///
/// Reports no organisations and no existing repositories, and refuses to
/// create anything. Used to plan a repository without network access.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineConnector;

impl Connector for OfflineConnector {
    fn connect(
        &self,
        kind: ProviderKind,
        server: &HostingServer,
        _credential: &UserCredential,
    ) -> Result<Box<dyn HostingApi>> {
        tracing::debug!(%kind, url = %server.url, "Using offline connection");
        Ok(Box::new(OfflineApi))
    }
}

#[derive(Debug)]
struct OfflineApi;

impl HostingApi for OfflineApi {
    fn get_repository(&self, _owner: &str, _name: &str) -> Result<Option<Repository>> {
        Ok(None)
    }

    fn create_repository(&self, _owner: &str, _name: &str, _private: bool) -> Result<Repository> {
        Err(Error::Unsupported {
            operation: "create repository".to_string(),
        })
    }

    fn list_organizations(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_api_reports_nothing_and_refuses_writes() {
        let server = HostingServer::new("https://github.com", "GitHub", "github");
        let cred = UserCredential::new("alice", "tok");
        let api = OfflineConnector
            .connect(ProviderKind::GitHub, &server, &cred)
            .unwrap();

        assert_eq!(api.get_repository("alice", "app").unwrap(), None);
        assert!(api.list_organizations().unwrap().is_empty());
        assert!(matches!(
            api.create_repository("alice", "app", false),
            Err(Error::Unsupported { .. })
        ));
    }
}
