//! Hosting provider kinds

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The hosting services a server record can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// github.com or GitHub Enterprise
    GitHub,
    /// gitlab.com or a self-managed GitLab
    GitLab,
    /// Self-hosted Gitea (and Forgejo)
    Gitea,
    /// bitbucket.org
    Bitbucket,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::GitHub,
        ProviderKind::GitLab,
        ProviderKind::Gitea,
        ProviderKind::Bitbucket,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::GitHub => "github",
            ProviderKind::GitLab => "gitlab",
            ProviderKind::Gitea => "gitea",
            ProviderKind::Bitbucket => "bitbucket",
        }
    }

    /// Guess the kind of a SaaS or conventionally named server from its URL.
    pub fn detect(url: &str) -> Option<Self> {
        let lower = url.to_lowercase();
        let host = lower
            .split_once("://")
            .map_or(lower.as_str(), |(_, rest)| rest)
            .split('/')
            .next()
            .unwrap_or_default();

        if host.contains("github") {
            Some(ProviderKind::GitHub)
        } else if host.contains("gitlab") {
            Some(ProviderKind::GitLab)
        } else if host.contains("bitbucket.org") {
            Some(ProviderKind::Bitbucket)
        } else if host.contains("gitea") || host.contains("forgejo") || host.contains("codeberg") {
            Some(ProviderKind::Gitea)
        } else {
            None
        }
    }

    /// Page where a user can generate an access token for this kind of server.
    pub fn access_token_url(&self, server_url: &str, username: &str) -> String {
        let base = server_url.trim_end_matches('/');
        match self {
            ProviderKind::GitHub => format!(
                "{base}/settings/tokens/new?scopes=repo,read:user,read:org,user:email,write:repo_hook,delete_repo"
            ),
            ProviderKind::GitLab => format!(
                "{base}/-/user_settings/personal_access_tokens?name=repo-provision&scopes=api,write_repository"
            ),
            ProviderKind::Gitea => format!("{base}/user/settings/applications"),
            ProviderKind::Bitbucket if username.is_empty() => {
                "https://bitbucket.org/account/settings/app-passwords/new".to_string()
            }
            ProviderKind::Bitbucket => {
                format!("https://bitbucket.org/account/user/{username}/app-passwords/new")
            }
        }
    }

    /// Message shown to a user who still needs to create a token.
    pub fn token_hint(&self, server_url: &str, username: &str) -> String {
        format!(
            "To be able to create a repository on {server_url} we need an API token\n\
             Please click this URL and generate a token: {}\n\
             Then COPY the token and enter it below:",
            self.access_token_url(server_url, username)
        )
    }
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "github" | "ghe" => Ok(ProviderKind::GitHub),
            "gitlab" => Ok(ProviderKind::GitLab),
            "gitea" | "forgejo" => Ok(ProviderKind::Gitea),
            "bitbucket" | "bitbucketcloud" | "bitbucket-cloud" => Ok(ProviderKind::Bitbucket),
            _ => Err(Error::UnsupportedKind {
                kind: s.to_string(),
                url: String::new(),
            }),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
