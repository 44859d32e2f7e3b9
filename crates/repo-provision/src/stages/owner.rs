//! Owner stage: user account or organisation that will own the repository

use repo_hosting::HostingProvider;
use tracing::debug;

use super::{Collaborators, OwnerResolved, ProviderBound};
use crate::error::{ResolveError, Result};
use crate::options::non_blank;
use crate::prompt::Prompter;

pub fn resolve<'r>(state: ProviderBound<'r>, c: &mut Collaborators<'_>) -> Result<OwnerResolved<'r>> {
    let ProviderBound {
        request,
        server,
        credential,
        provider,
    } = state;

    let owner = match non_blank(&request.options.owner) {
        Some(owner) => owner.trim().to_string(),
        None if request.batch_mode => credential.username.clone(),
        None => pick_owner(provider.as_ref(), &credential.username, c.prompter)?,
    };
    debug!(%owner, "Resolved repository owner");

    Ok(OwnerResolved {
        request,
        server,
        credential,
        provider,
        owner,
    })
}

/// Offer the user's own account first, then their organisations.
fn pick_owner(provider: &dyn HostingProvider, username: &str, prompter: &dyn Prompter) -> Result<String> {
    let mut orgs = provider.list_organizations()?;
    orgs.retain(|org| !org.trim().is_empty() && org != username);
    if orgs.is_empty() {
        return Ok(username.to_string());
    }
    orgs.sort();
    orgs.dedup();

    let mut items = Vec::with_capacity(orgs.len() + 1);
    items.push(username.to_string());
    items.extend(orgs);

    let index = prompter.select("Which organisation do you want to use?", &items, 0)?;
    items
        .into_iter()
        .nth(index)
        .ok_or_else(|| ResolveError::Prompt {
            message: format!("no organisation at position {index}"),
        })
}
