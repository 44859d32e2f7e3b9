//! Hosting server and credential store for the repository provisioner
//!
//! Holds the known Git hosting servers and the user credentials registered
//! against each of them. The in-memory [`AuthConfig`] snapshot answers all
//! lookups; a [`CredentialStore`] owns a snapshot and knows how to persist
//! edits back to wherever it came from.

pub mod config;
pub mod error;
pub mod io;
pub mod server;
pub mod store;

pub use config::{AuthConfig, normalize_url};
pub use error::{Error, Result};
pub use server::{HostingServer, UserCredential};
pub use store::{CredentialStore, FileCredentialStore};
