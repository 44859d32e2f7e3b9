//! Git hosting provider capabilities
//!
//! Every hosting kind (GitHub, GitLab, Gitea, Bitbucket Cloud) implements the
//! single [`HostingProvider`] capability trait: repository lookup and
//! creation, name validation, organisation listing and the kind's
//! qualified-name convention. The wire protocol is behind [`HostingApi`],
//! produced by a [`Connector`]; [`bind_provider`] picks the implementation
//! for a resolved server and credential.

pub mod api;
pub mod bitbucket;
pub mod error;
pub mod gitea;
pub mod github;
pub mod gitlab;
pub mod kind;
pub mod provider;

pub use api::{Connector, HostingApi, OfflineConnector, Repository};
pub use error::{Error, Result};
pub use kind::ProviderKind;
pub use provider::{HostingProvider, bind_provider, validate_server_url};
