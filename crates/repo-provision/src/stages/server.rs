//! Server stage: decide which hosting server the repository goes to

use repo_auth::{AuthConfig, HostingServer};
use repo_hosting::ProviderKind;
use tracing::{debug, info, warn};

use super::{Collaborators, ServerResolved, Start};
use crate::error::{ResolveError, Result};
use crate::options::{RepositoryRequestOptions, non_blank};
use crate::prompt::Prompter;

/// Resolve the server, in order of preference:
///
/// 1. the server supplied with the request
/// 2. the URL in the options, registering it if unknown
/// 3. batch: the store's current server, else its first one
/// 4. interactive: the only server, or the user's pick
///
/// The chosen URL is written back into the request options.
pub fn resolve<'r>(state: Start<'r>, c: &mut Collaborators<'_>) -> Result<ServerResolved<'r>> {
    let request = state.request;

    let server = match request.server.clone() {
        Some(server) => {
            debug!(url = %server.url, "Using server supplied by caller");
            server
        }
        None => {
            let server = match non_blank(&request.options.server_url) {
                Some(url) => {
                    let kind = kind_hint(&request.options, url);
                    c.store.config_mut().get_or_create_server(url, kind.as_deref())
                }
                None if request.batch_mode => current_server(c.store.config())?,
                None => pick_server(c.store.config(), c.prompter)?,
            };
            request.options.server_url = Some(server.url.clone());
            server
        }
    };

    info!("Using Git provider {}", server.description());
    Ok(ServerResolved { request, server })
}

/// Kind to record for a newly registered server.
fn kind_hint(options: &RepositoryRequestOptions, url: &str) -> Option<String> {
    non_blank(&options.server_kind)
        .map(|kind| kind.trim().to_string())
        .or_else(|| ProviderKind::detect(url).map(|kind| kind.as_str().to_string()))
}

fn current_server(config: &AuthConfig) -> Result<HostingServer> {
    if let Some(current) = config.current_server() {
        match config.find_server_by_name_or_url(current) {
            Some(server) => return Ok(server.clone()),
            None => warn!(current, "Current server is not registered, using the first one"),
        }
    }
    config
        .servers()
        .first()
        .cloned()
        .ok_or(ResolveError::NoServersConfigured)
}

fn pick_server(config: &AuthConfig, prompter: &dyn Prompter) -> Result<HostingServer> {
    let servers = config.servers();
    match servers {
        [] => Err(ResolveError::NoServersConfigured),
        [only] => Ok(only.clone()),
        _ => {
            let items: Vec<String> = servers.iter().map(HostingServer::description).collect();
            let default = config
                .current_server()
                .and_then(|current| config.find_server_by_name_or_url(current))
                .and_then(|current| servers.iter().position(|s| s.url == current.url))
                .unwrap_or(0);
            let index = prompter.select("Which Git service?", &items, default)?;
            servers
                .get(index)
                .cloned()
                .ok_or_else(|| ResolveError::Prompt {
                    message: format!("no server at position {index}"),
                })
        }
    }
}
