//! Resolution driver

use repo_auth::CredentialStore;
use repo_hosting::Connector;
use tracing::debug;

use crate::error::Result;
use crate::options::ResolveRequest;
use crate::prompt::Prompter;
use crate::result::ProvisioningResult;
use crate::settings::ResolverSettings;
use crate::stages::{self, Collaborators, Start};

/// Runs the stages in order and stops at the first failure.
///
/// The resolver itself holds no state between calls; everything it learns
/// is kept in the credential store it was given.
pub struct Resolver<'a> {
    store: &'a mut dyn CredentialStore,
    connector: &'a dyn Connector,
    prompter: &'a dyn Prompter,
    settings: ResolverSettings,
}

impl<'a> Resolver<'a> {
    pub fn new(
        store: &'a mut dyn CredentialStore,
        connector: &'a dyn Connector,
        prompter: &'a dyn Prompter,
    ) -> Self {
        Self {
            store,
            connector,
            prompter,
            settings: ResolverSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: ResolverSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Resolve everything needed to create or look up a repository.
    ///
    /// `request.options.server_url` is updated with the chosen server.
    pub fn resolve(&mut self, request: &mut ResolveRequest) -> Result<ProvisioningResult> {
        debug!(mode = ?request.mode(), "Resolving repository");
        let mut c = Collaborators {
            store: &mut *self.store,
            connector: self.connector,
            prompter: self.prompter,
            settings: &self.settings,
        };

        let state = stages::server::resolve(Start::new(request), &mut c)?;
        let state = stages::credential::resolve(state, &mut c)?;
        let state = stages::binding::bind(state, &mut c)?;
        let state = stages::owner::resolve(state, &mut c)?;
        let state = stages::name::resolve(state, &mut c)?;
        Ok(stages::assembly::assemble(state))
    }

    /// Resolve a repository that must not exist yet.
    pub fn resolve_new(&mut self, request: &mut ResolveRequest) -> Result<ProvisioningResult> {
        request.allow_existing_repository = false;
        self.resolve(request)
    }
}
