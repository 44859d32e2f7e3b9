//! Provider binding: construct the capability object for the server

use tracing::debug;

use super::{Collaborators, CredentialResolved, ProviderBound};
use crate::error::{ResolveError, Result};

pub fn bind<'r>(
    state: CredentialResolved<'r>,
    c: &mut Collaborators<'_>,
) -> Result<ProviderBound<'r>> {
    let CredentialResolved {
        request,
        server,
        credential,
    } = state;

    let provider = repo_hosting::bind_provider(&server, &credential, c.connector)
        .map_err(ResolveError::ProviderConstruction)?;
    debug!(kind = %provider.kind(), url = %server.url, "Provider bound");

    Ok(ProviderBound {
        request,
        server,
        credential,
        provider,
    })
}
