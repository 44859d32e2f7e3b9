//! Credential stage: decide which user talks to the server
//!
//! A credential without a token is not usable. When the options carry no
//! token either, the user edits the credential in a [`CredentialEdit`] scope
//! that either commits the result to the store or rolls it back.

use repo_auth::{AuthConfig, CredentialStore, HostingServer, UserCredential};
use repo_hosting::ProviderKind;
use tracing::{debug, info};

use super::{Collaborators, CredentialResolved, Mode, ServerResolved};
use crate::error::{ResolveError, Result};
use crate::options::{non_blank, present};
use crate::prompt::{self, Prompter};
use crate::settings::CredentialPersistence;

pub fn resolve<'r>(
    state: ServerResolved<'r>,
    c: &mut Collaborators<'_>,
) -> Result<CredentialResolved<'r>> {
    let ServerResolved { request, server } = state;
    let options = &request.options;

    let mut credential = match &request.credential {
        Some(credential) => credential.clone(),
        None => match non_blank(&options.username) {
            Some(username) => c
                .store
                .config_mut()
                .get_or_create_credential(&server.url, username.trim()),
            None if request.batch_mode => current_credential(c.store.config(), &server)?,
            None => pick_credential(&server, c)?,
        },
    };

    if credential.is_invalid()
        && let Some(token) = non_blank(&options.api_token)
    {
        debug!(username = %credential.username, "Using API token from options");
        credential.api_token = token.trim().to_string();
    }

    if credential.is_invalid() {
        credential = complete_credential(&server, credential, request.mode(), c)?;
    }

    let default_name = present(&options.repo_name).unwrap_or(&request.default_repo_name);
    info!(
        "About to create repository {} on server {} with user {}",
        default_name, server.url, credential.username
    );

    Ok(CredentialResolved {
        request,
        server,
        credential,
    })
}

/// Batch fallback: the server's current user, else its first one.
fn current_credential(config: &AuthConfig, server: &HostingServer) -> Result<UserCredential> {
    let no_credentials = || ResolveError::NoCredentialsConfigured {
        server_url: server.url.clone(),
    };
    if server.users.is_empty() {
        return Err(no_credentials());
    }
    if !server.current_user.is_empty() {
        if let Some(found) = config
            .find_credential(&server.url, &server.current_user)
            .or_else(|| server.find_user(&server.current_user).cloned())
        {
            return Ok(found);
        }
    }
    server.users.first().cloned().ok_or_else(no_credentials)
}

fn pick_credential(server: &HostingServer, c: &mut Collaborators<'_>) -> Result<UserCredential> {
    match server.users.as_slice() {
        [only] => Ok(only.clone()),
        [] => {
            let default_username = c.store.config().default_username.clone();
            let default = Some(default_username.as_str()).filter(|d| !d.is_empty());
            let username = c.prompter.input(
                "Git user name?",
                default,
                &prompt::required("Git user name is required"),
            )?;
            Ok(c
                .store
                .config_mut()
                .get_or_create_credential(&server.url, username.trim()))
        }
        users => {
            let items = server.usernames();
            let default = users
                .iter()
                .position(|u| u.username == server.current_user)
                .unwrap_or(0);
            let index = c.prompter.select("Git user name?", &items, default)?;
            users.get(index).cloned().ok_or_else(|| ResolveError::Prompt {
                message: format!("no user at position {index}"),
            })
        }
    }
}

/// Ask for the missing parts of `credential` and store the outcome.
///
/// Batch mode fails straight away and writes nothing.
fn complete_credential(
    server: &HostingServer,
    credential: UserCredential,
    mode: Mode,
    c: &mut Collaborators<'_>,
) -> Result<UserCredential> {
    let incomplete = || ResolveError::IncompleteAuthentication {
        server: server.url.clone(),
    };
    if mode.is_batch() {
        return Err(incomplete());
    }

    let default_username = c.store.config().default_username.clone();
    let mut edit = CredentialEdit::begin(server, credential);
    edit.prompt(c.prompter, &default_username)?;

    let keep = match c.settings.credential_persistence {
        CredentialPersistence::Always => true,
        CredentialPersistence::OnlyValid => edit.credential().is_valid(),
    };
    if !keep {
        let original = edit.rollback();
        debug!(username = %original.username, "Discarded incomplete credential edit");
        return Err(incomplete());
    }

    let credential = edit.commit(&mut *c.store)?;
    if credential.is_invalid() {
        return Err(incomplete());
    }
    Ok(credential)
}

/// Scoped edit of one credential.
///
/// Nothing reaches the store until [`commit`](Self::commit); dropping the
/// edit or calling [`rollback`](Self::rollback) leaves the store untouched.
#[derive(Debug)]
pub struct CredentialEdit<'s> {
    server: &'s HostingServer,
    original: UserCredential,
    working: UserCredential,
}

impl<'s> CredentialEdit<'s> {
    pub fn begin(server: &'s HostingServer, credential: UserCredential) -> Self {
        Self {
            server,
            working: credential.clone(),
            original: credential,
        }
    }

    /// The credential as edited so far.
    pub fn credential(&self) -> &UserCredential {
        &self.working
    }

    pub fn set_username(&mut self, username: &str) {
        self.working.username = username.trim().to_string();
    }

    pub fn set_token(&mut self, token: &str) {
        self.working.api_token = token.trim().to_string();
    }

    /// Ask for the username, then for the token.
    ///
    /// The username question is pre-filled with the current username, or
    /// with `default_username` when there is none. The token question
    /// accepts an empty answer; whether that is acceptable is decided when
    /// the edit ends.
    pub fn prompt(&mut self, prompter: &dyn Prompter, default_username: &str) -> Result<()> {
        let current = self.working.username.trim();
        let default = Some(current)
            .filter(|u| !u.is_empty())
            .or(Some(default_username).filter(|d| !d.trim().is_empty()));
        let username = prompter.input(
            "Git user name:",
            default,
            &prompt::required("Git user name is required"),
        )?;
        self.set_username(&username);

        prompter.notify(&self.token_hint());
        let token = prompter.password(
            &format!("API token for {} on {}:", self.working.username, self.server.label()),
            &prompt::any,
        )?;
        self.set_token(&token);
        Ok(())
    }

    fn token_hint(&self) -> String {
        let kind = self
            .server
            .kind
            .parse::<ProviderKind>()
            .ok()
            .or_else(|| ProviderKind::detect(&self.server.url));
        match kind {
            Some(kind) => kind.token_hint(&self.server.url, &self.working.username),
            None => format!(
                "To be able to create a repository on {} we need an API token",
                self.server.url
            ),
        }
    }

    /// Write the edited credential to the store and make it current.
    pub fn commit(self, store: &mut dyn CredentialStore) -> Result<UserCredential> {
        store
            .persist_credential(&self.server.url, &self.working)
            .map_err(|source| ResolveError::Persist {
                server_url: self.server.url.clone(),
                source,
            })?;
        info!(
            url = %self.server.url,
            username = %self.working.username,
            "Stored Git credential"
        );
        Ok(self.working)
    }

    /// Abandon the edit, returning the credential as it was.
    pub fn rollback(self) -> UserCredential {
        self.original
    }
}
