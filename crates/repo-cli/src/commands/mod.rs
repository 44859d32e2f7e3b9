//! Command implementations

pub mod resolve;
pub mod server;
pub mod user;

use std::path::{Path, PathBuf};

use repo_auth::FileCredentialStore;
use repo_auth::io::read_optional;
use repo_provision::ResolverSettings;

use crate::error::{CliError, Result};

pub use resolve::run_resolve;
pub use server::{run_server_add, run_server_list, run_server_use};
pub use user::{run_user_add, run_user_list};

/// Settings file kept next to the credential store
pub const SETTINGS_FILE: &str = "config.toml";

/// The credential store path from `--config`, or the platform default.
pub fn store_path(config: Option<PathBuf>) -> Result<PathBuf> {
    config
        .or_else(FileCredentialStore::default_path)
        .ok_or_else(|| CliError::user("Could not determine the config directory; pass --config"))
}

pub fn open_store(path: &Path) -> Result<FileCredentialStore> {
    Ok(FileCredentialStore::open(path)?)
}

/// Load resolver settings stored next to the credential store.
///
/// A missing file yields the defaults.
pub fn load_settings(store_path: &Path) -> Result<ResolverSettings> {
    let path = store_path.with_file_name(SETTINGS_FILE);
    let Some(content) = read_optional(&path)? else {
        return Ok(ResolverSettings::default());
    };
    ResolverSettings::from_toml(&content).map_err(|e| CliError::Settings {
        path,
        message: e.to_string(),
    })
}
