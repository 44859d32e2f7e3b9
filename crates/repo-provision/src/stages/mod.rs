//! Resolution stages
//!
//! Each stage consumes the state produced by the previous one, so a stage
//! can only run once its inputs exist. All stages share [`Collaborators`].

pub mod assembly;
pub mod binding;
pub mod credential;
pub mod name;
pub mod owner;
pub mod server;

use repo_auth::{CredentialStore, HostingServer, UserCredential};
use repo_hosting::{Connector, HostingProvider};

use crate::options::ResolveRequest;
use crate::prompt::Prompter;
use crate::settings::ResolverSettings;

pub use credential::CredentialEdit;

/// Whether stages may ask questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Never prompt; apply defaults or fail
    Batch,
    Interactive,
}

impl Mode {
    pub fn is_batch(self) -> bool {
        self == Mode::Batch
    }
}

/// Services the stages call out to.
pub struct Collaborators<'c> {
    pub store: &'c mut dyn CredentialStore,
    pub connector: &'c dyn Connector,
    pub prompter: &'c dyn Prompter,
    pub settings: &'c ResolverSettings,
}

pub struct Start<'r> {
    pub request: &'r mut ResolveRequest,
}

impl<'r> Start<'r> {
    pub fn new(request: &'r mut ResolveRequest) -> Self {
        Self { request }
    }
}

pub struct ServerResolved<'r> {
    pub request: &'r ResolveRequest,
    pub server: HostingServer,
}

pub struct CredentialResolved<'r> {
    pub request: &'r ResolveRequest,
    pub server: HostingServer,
    pub credential: UserCredential,
}

pub struct ProviderBound<'r> {
    pub request: &'r ResolveRequest,
    pub server: HostingServer,
    pub credential: UserCredential,
    pub provider: Box<dyn HostingProvider>,
}

pub struct OwnerResolved<'r> {
    pub request: &'r ResolveRequest,
    pub server: HostingServer,
    pub credential: UserCredential,
    pub provider: Box<dyn HostingProvider>,
    pub owner: String,
}

pub struct NameResolved<'r> {
    pub request: &'r ResolveRequest,
    pub server: HostingServer,
    pub credential: UserCredential,
    pub provider: Box<dyn HostingProvider>,
    pub owner: String,
    pub repo_name: String,
}
