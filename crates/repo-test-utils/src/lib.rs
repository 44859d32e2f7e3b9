//! Shared test utilities for the repository provisioner workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`prompt`]: [`ScriptedPrompter`] answers questions from a script
//! - [`store`]: [`MemoryStore`] credential store that counts writes, plus
//!   store fixtures
//! - [`hosting`]: [`FakeConnector`] in-memory hosting service

pub mod hosting;
pub mod prompt;
pub mod store;

pub use hosting::{FakeConnector, FakeService};
pub use prompt::{Answer, ScriptedPrompter};
pub use store::{MemoryStore, TempStore, server, store_with_server};
