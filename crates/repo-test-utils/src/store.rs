//! Credential store fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use repo_auth::{AuthConfig, CredentialStore, FileCredentialStore, HostingServer, UserCredential};
use tempfile::TempDir;

/// In-memory [`CredentialStore`] that records every write.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    config: AuthConfig,
    writes: Vec<(String, UserCredential)>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Make every `persist_credential` fail.
    pub fn failing(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Persisted `(server_url, credential)` pairs, in order.
    pub fn writes(&self) -> &[(String, UserCredential)] {
        &self.writes
    }

    pub fn write_count(&self) -> usize {
        self.writes.len()
    }
}

impl CredentialStore for MemoryStore {
    fn config(&self) -> &AuthConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut AuthConfig {
        &mut self.config
    }

    fn persist_credential(
        &mut self,
        server_url: &str,
        credential: &UserCredential,
    ) -> repo_auth::Result<()> {
        if self.fail_writes {
            return Err(repo_auth::Error::LockFailed {
                path: PathBuf::from("memory"),
            });
        }
        self.config.set_credential(server_url, credential);
        self.writes
            .push((server_url.to_string(), credential.clone()));
        Ok(())
    }
}

/// A server with the given `(username, token)` credentials.
///
/// The first user becomes the current user.
pub fn server(url: &str, kind: &str, users: &[(&str, &str)]) -> HostingServer {
    let mut server = HostingServer::new(url, "", kind);
    server.users = users
        .iter()
        .map(|(username, token)| UserCredential::new(*username, *token))
        .collect();
    if let Some((first, _)) = users.first() {
        server.current_user = first.to_string();
    }
    server
}

/// A store holding one server, which is also the current server.
pub fn store_with_server(url: &str, kind: &str, users: &[(&str, &str)]) -> MemoryStore {
    let mut config = AuthConfig::new();
    config.servers.push(server(url, kind, users));
    config.current_server = url.to_string();
    MemoryStore::new(config)
}

/// A credential file inside a temporary directory.
///
/// # Example
///
/// ```rust,no_run
/// use repo_test_utils::TempStore;
///
/// let temp = TempStore::new();
/// temp.write("current_server = \"https://github.com\"\n");
/// let store = temp.open();
/// ```
pub struct TempStore {
    temp_dir: TempDir,
}

impl Default for TempStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TempStore {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the credential file; it may not exist yet.
    pub fn path(&self) -> PathBuf {
        self.dir().join(repo_auth::store::AUTH_FILE)
    }

    pub fn write(&self, content: &str) {
        fs::write(self.path(), content).expect("TempStore::write: failed to write store");
    }

    pub fn read(&self) -> Option<String> {
        fs::read_to_string(self.path()).ok()
    }

    pub fn open(&self) -> FileCredentialStore {
        FileCredentialStore::open(self.path()).expect("TempStore::open: failed to open store")
    }
}
