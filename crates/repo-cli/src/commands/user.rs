//! User credential commands

use std::path::Path;

use colored::Colorize;
use repo_auth::{CredentialStore, UserCredential};
use repo_hosting::ProviderKind;

use super::open_store;
use crate::error::{CliError, Result};

/// Store a credential and make it the server's current user.
///
/// Unknown servers are registered on the fly.
pub fn run_user_add(
    store_path: &Path,
    server_url: &str,
    username: &str,
    token: Option<&str>,
) -> Result<()> {
    if username.trim().is_empty() {
        return Err(CliError::user("Git user name is required"));
    }
    let mut store = open_store(store_path)?;
    let kind = ProviderKind::detect(server_url).map(|k| k.as_str());
    let server = store.config_mut().get_or_create_server(server_url, kind);

    let credential = UserCredential::new(username.trim(), token.unwrap_or_default().trim());
    store.persist_credential(&server.url, &credential)?;

    println!(
        "{} Stored user {} for {}",
        "OK".green().bold(),
        credential.username.bold(),
        server.url
    );
    if credential.is_invalid() {
        println!(
            "{} No API token given; you will be asked for one when it is needed.",
            "note:".yellow()
        );
    }
    Ok(())
}

/// Print the users of a server. Tokens are never shown.
pub fn run_user_list(store_path: &Path, server_url: &str) -> Result<()> {
    let store = open_store(store_path)?;
    let server = store
        .config()
        .find_server(server_url)
        .ok_or_else(|| repo_auth::Error::ServerNotFound {
            key: server_url.to_string(),
        })?;

    if server.users.is_empty() {
        println!("{}", "No users registered.".dimmed());
        return Ok(());
    }
    for user in &server.users {
        let marker = if user.username == server.current_user {
            "*".green().bold()
        } else {
            " ".normal()
        };
        let token = if user.is_valid() {
            "token set".green()
        } else {
            "no token".yellow()
        };
        println!("{} {} ({})", marker, user.username.bold(), token);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_user_add_registers_server_and_user() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("auth.toml");

        run_user_add(&path, "https://github.com", "alice", Some("tok")).unwrap();

        let store = open_store(&path).unwrap();
        let config = store.config();
        assert_eq!(config.current_server(), Some("https://github.com"));
        assert_eq!(config.default_username, "alice");
        let server = config.find_server("https://github.com").unwrap();
        assert_eq!(server.kind, "github");
        assert_eq!(server.current_user, "alice");
        assert_eq!(
            config.find_credential("https://github.com", "alice"),
            Some(UserCredential::new("alice", "tok"))
        );
    }

    #[test]
    fn test_user_add_requires_username() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("auth.toml");

        assert!(run_user_add(&path, "https://github.com", "  ", Some("tok")).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_user_list_unknown_server() {
        let temp = TempDir::new().unwrap();
        let err = run_user_list(&temp.path().join("auth.toml"), "https://github.com").unwrap_err();
        assert!(matches!(err, CliError::Auth(repo_auth::Error::ServerNotFound { .. })));
    }
}
