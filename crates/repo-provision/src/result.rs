//! The outcome of a successful resolution

use repo_auth::{HostingServer, UserCredential};
use repo_hosting::{HostingProvider, Repository};
use serde::Serialize;

/// Everything needed to create or look up the repository.
#[derive(Debug)]
pub struct ProvisioningResult {
    pub owner: String,
    pub repo_name: String,
    /// Identifier in the provider's convention, e.g. `owner/name`
    pub full_name: String,
    pub private: bool,
    pub server: HostingServer,
    pub credential: UserCredential,
    pub provider: Box<dyn HostingProvider>,
}

impl ProvisioningResult {
    /// Look up the resolved repository on the provider.
    pub fn get_repository(&self) -> repo_hosting::Result<Repository> {
        self.provider.get_repository(&self.owner, &self.repo_name)
    }

    /// Create the resolved repository on the provider.
    pub fn create_repository(&self) -> repo_hosting::Result<Repository> {
        self.provider
            .create_repository(&self.owner, &self.repo_name, self.private)
    }

    /// Serializable summary without the token or the provider handle.
    pub fn plan(&self) -> ProvisioningPlan {
        ProvisioningPlan {
            server_url: self.server.url.clone(),
            provider: self.provider.kind().to_string(),
            username: self.credential.username.clone(),
            owner: self.owner.clone(),
            repo_name: self.repo_name.clone(),
            full_name: self.full_name.clone(),
            private: self.private,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisioningPlan {
    pub server_url: String,
    pub provider: String,
    pub username: String,
    pub owner: String,
    pub repo_name: String,
    pub full_name: String,
    pub private: bool,
}
