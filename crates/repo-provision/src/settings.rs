//! Resolver behaviour settings

use serde::{Deserialize, Serialize};

/// What happens to a credential that is still incomplete after editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CredentialPersistence {
    /// Write the edited credential even when it is still incomplete
    #[default]
    Always,
    /// Write only credentials that passed validation
    OnlyValid,
}

impl std::fmt::Display for CredentialPersistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialPersistence::Always => write!(f, "always"),
            CredentialPersistence::OnlyValid => write!(f, "only-valid"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    pub credential_persistence: CredentialPersistence,
}

impl ResolverSettings {
    /// Parse settings from TOML. Missing keys keep their defaults.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn with_credential_persistence(mut self, persistence: CredentialPersistence) -> Self {
        self.credential_persistence = persistence;
        self
    }
}
