//! Server commands

use std::path::Path;

use colored::Colorize;
use repo_auth::CredentialStore;
use repo_hosting::{ProviderKind, validate_server_url};
use serde_json::json;

use super::open_store;
use crate::error::Result;

/// Print registered servers, marking the current one.
pub fn run_server_list(store_path: &Path, json: bool) -> Result<()> {
    let store = open_store(store_path)?;
    let config = store.config();
    let current = config
        .current_server()
        .and_then(|key| config.find_server_by_name_or_url(key))
        .map(|s| s.url.clone());

    if json {
        let servers: Vec<_> = config
            .servers()
            .iter()
            .map(|s| {
                json!({
                    "url": s.url,
                    "name": s.name,
                    "kind": s.kind,
                    "current": current.as_deref() == Some(s.url.as_str()),
                    "current_user": s.current_user,
                    "users": s.usernames(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&servers)?);
        return Ok(());
    }

    if config.is_empty() {
        println!("{}", "No Git servers registered.".dimmed());
        println!(
            "Run {} to add one.",
            "repo-provision server add <url>".cyan()
        );
        return Ok(());
    }

    for server in config.servers() {
        let marker = if current.as_deref() == Some(server.url.as_str()) {
            "*".green().bold()
        } else {
            " ".normal()
        };
        let kind = if server.kind.is_empty() {
            "unknown".dimmed()
        } else {
            server.kind.as_str().cyan()
        };
        println!(
            "{} {} ({}) [{}]",
            marker,
            server.label().bold(),
            server.url,
            kind
        );
    }
    Ok(())
}

/// Register a server, detecting its kind from the URL when not given.
pub fn run_server_add(
    store_path: &Path,
    url: &str,
    name: Option<&str>,
    kind: Option<&str>,
) -> Result<()> {
    validate_server_url(url)?;
    let kind = match kind {
        Some(kind) => kind.parse::<ProviderKind>()?,
        None => ProviderKind::detect(url).ok_or_else(|| {
            crate::error::CliError::user(format!(
                "Could not detect the provider kind of {url}; pass --kind"
            ))
        })?,
    };

    let mut store = open_store(store_path)?;
    let server = store
        .config_mut()
        .add_server(url, name.unwrap_or_default(), kind.as_str())
        .clone();
    store.save()?;

    println!(
        "{} Registered {} ({}) as {}",
        "OK".green().bold(),
        server.label().bold(),
        server.url,
        kind.to_string().cyan()
    );
    Ok(())
}

/// Make a server the current one.
pub fn run_server_use(store_path: &Path, key: &str) -> Result<()> {
    let mut store = open_store(store_path)?;
    store.config_mut().use_server(key)?;
    store.save()?;
    println!("{} Now using {}", "OK".green().bold(), key.bold());
    Ok(())
}
