//! Assembly: turn the resolved parts into a [`ProvisioningResult`]

use tracing::info;

use super::NameResolved;
use crate::result::ProvisioningResult;

pub fn assemble(state: NameResolved<'_>) -> ProvisioningResult {
    let NameResolved {
        request,
        server,
        credential,
        provider,
        owner,
        repo_name,
    } = state;

    let full_name = provider.qualified_name(&owner, &repo_name);
    info!("Creating repository {full_name}");

    ProvisioningResult {
        owner,
        repo_name,
        full_name,
        private: request.options.private,
        server,
        credential,
        provider,
    }
}
