//! Repository provisioning resolver
//!
//! Turns partial input (a server URL, maybe a username, maybe a name) into a
//! fully resolved [`ProvisioningResult`]: the hosting server, a usable
//! credential, a bound [`HostingProvider`](repo_hosting::HostingProvider),
//! the owning namespace and the repository name.
//!
//! # Pipeline
//!
//! ```text
//! Start -> ServerResolved -> CredentialResolved -> ProviderBound
//!       -> OwnerResolved -> NameResolved -> ProvisioningResult
//! ```
//!
//! Every stage has a batch path (never prompts, applies defaults, fails when
//! data is missing) and an interactive path (asks through a [`Prompter`]).
//! Each stage lives in [`stages`] and can be driven on its own; [`Resolver`]
//! composes them.
//!
//! # Example
//!
//! ```ignore
//! use repo_provision::{RepositoryRequestOptions, ResolveRequest, Resolver};
//!
//! let options = RepositoryRequestOptions::default()
//!     .with_server_url("https://github.com")
//!     .with_repo_name("myapp");
//! let mut request = ResolveRequest::batch(options);
//! let result = Resolver::new(&mut store, &connector, &prompter).resolve(&mut request)?;
//! println!("{}", result.full_name);
//! ```

pub mod error;
pub mod options;
pub mod prompt;
pub mod resolver;
pub mod result;
pub mod settings;
pub mod stages;

pub use error::{ResolveError, Result};
pub use options::{PLACEHOLDER_REPO_NAME, RepositoryRequestOptions, ResolveRequest};
pub use prompt::{PromptError, Prompter, Validator};
pub use resolver::Resolver;
pub use result::{ProvisioningPlan, ProvisioningResult};
pub use settings::{CredentialPersistence, ResolverSettings};
pub use stages::Mode;
