//! Name stage: the name of the new repository
//!
//! A name supplied in the options is used as given. Batch mode otherwise
//! falls back to the default name, then to [`PLACEHOLDER_REPO_NAME`].
//! Neither path talks to the provider. Interactive mode asks until the
//! provider accepts the answer.

use std::cell::RefCell;

use repo_hosting::HostingProvider;
use tracing::debug;

use super::{Collaborators, NameResolved, OwnerResolved};
use crate::error::{ResolveError, Result, is_rejection};
use crate::options::{PLACEHOLDER_REPO_NAME, present};
use crate::prompt::Prompter;

pub fn resolve<'r>(state: OwnerResolved<'r>, c: &mut Collaborators<'_>) -> Result<NameResolved<'r>> {
    let OwnerResolved {
        request,
        server,
        credential,
        provider,
        owner,
    } = state;
    let repo_name = match present(&request.options.repo_name) {
        Some(name) => name.to_string(),
        None if request.batch_mode => {
            if request.default_repo_name.trim().is_empty() {
                PLACEHOLDER_REPO_NAME.to_string()
            } else {
                request.default_repo_name.clone()
            }
        }
        None => ask_name(
            provider.as_ref(),
            &owner,
            &request.default_repo_name,
            request.allow_existing_repository,
            c.prompter,
        )?,
    };

    if repo_name.trim().is_empty() {
        return Err(ResolveError::RepositoryNameRequired);
    }
    debug!(%repo_name, "Resolved repository name");

    Ok(NameResolved {
        request,
        server,
        credential,
        provider,
        owner,
        repo_name,
    })
}

fn ask_name(
    provider: &dyn HostingProvider,
    owner: &str,
    default: &str,
    allow_existing: bool,
    prompter: &dyn Prompter,
) -> Result<String> {
    // A provider failure ends the question instead of asking again.
    let failure = RefCell::new(None);
    let validate = |value: &str| -> std::result::Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            return Err("Repository name is required".to_string());
        }
        if allow_existing {
            return Ok(());
        }
        match provider.validate_repository_name(owner, value) {
            Ok(()) => Ok(()),
            Err(err) if is_rejection(&err) => Err(err.to_string()),
            Err(err) => {
                *failure.borrow_mut() = Some(err);
                Ok(())
            }
        }
    };

    let default = Some(default).filter(|d| !d.trim().is_empty());
    let answer = prompter.input("Enter the new repository name:", default, &validate)?;
    if let Some(err) = failure.into_inner() {
        return Err(ResolveError::Hosting(err));
    }
    Ok(answer.trim().to_string())
}
