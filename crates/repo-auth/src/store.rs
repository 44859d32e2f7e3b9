//! Credential store trait and the TOML file implementation

use std::path::{Path, PathBuf};

use crate::config::AuthConfig;
use crate::error::{Error, Result};
use crate::io;
use crate::server::UserCredential;

/// File name of the credential store inside the config directory
pub const AUTH_FILE: &str = "auth.toml";

/// Directory name under the platform config directory
pub const APP_DIR: &str = "repo-provision";

/// A persistent home for an [`AuthConfig`] snapshot.
///
/// Readers work against [`config`](Self::config). Lookups that create
/// records go through [`config_mut`](Self::config_mut) and stay in memory.
/// Only [`persist_credential`](Self::persist_credential) writes.
pub trait CredentialStore {
    /// The current snapshot.
    fn config(&self) -> &AuthConfig;

    /// Mutable access to the snapshot. Changes are not persisted.
    fn config_mut(&mut self) -> &mut AuthConfig;

    /// Record `credential` for `server_url` in the snapshot and persist it.
    fn persist_credential(&mut self, server_url: &str, credential: &UserCredential) -> Result<()>;
}

/// Credential store backed by a TOML file.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    config: AuthConfig,
}

impl FileCredentialStore {
    /// Load the store at `path`. A missing file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let config = match io::read_optional(&path)? {
            Some(content) => toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.clone(),
                message: e.to_string(),
            })?,
            None => {
                tracing::debug!(?path, "No credential store found, starting empty");
                AuthConfig::default()
            }
        };
        Ok(Self { path, config })
    }

    /// Platform default location of the store.
    ///
    /// - Linux: `~/.config/repo-provision/auth.toml`
    /// - macOS: `~/Library/Application Support/repo-provision/auth.toml`
    /// - Windows: `%APPDATA%\repo-provision\auth.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join(AUTH_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the whole snapshot back to disk.
    pub fn save(&self) -> Result<()> {
        write_config(&self.path, &self.config)
    }
}

fn write_config(path: &Path, config: &AuthConfig) -> Result<()> {
    let content = toml::to_string_pretty(config).map_err(|e| Error::ConfigSerialize {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    io::write_atomic(path, content.as_bytes())?;
    tracing::debug!(?path, "Saved credential store");
    Ok(())
}

impl CredentialStore for FileCredentialStore {
    fn config(&self) -> &AuthConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut AuthConfig {
        &mut self.config
    }

    /// The snapshot only changes once the file has been written.
    fn persist_credential(&mut self, server_url: &str, credential: &UserCredential) -> Result<()> {
        let mut updated = self.config.clone();
        updated.set_credential(server_url, credential);
        write_config(&self.path, &updated)?;
        self.config = updated;
        Ok(())
    }
}
