//! Hosting server and user credential records

use std::fmt;

use serde::{Deserialize, Serialize};

/// A username and access token scoped to one hosting server.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserCredential {
    /// Login name on the hosting server
    pub username: String,

    /// Personal access token (or app password) for the API
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_token: String,
}

impl UserCredential {
    pub fn new(username: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_token: api_token.into(),
        }
    }

    /// A credential without a token, as created on the fly for a new username.
    pub fn without_token(username: impl Into<String>) -> Self {
        Self::new(username, "")
    }

    /// Both the username and the token must be present to talk to the API.
    pub fn is_valid(&self) -> bool {
        !self.username.trim().is_empty() && !self.api_token.trim().is_empty()
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }
}

// Tokens never end up in logs.
impl fmt::Debug for UserCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.api_token.is_empty() {
            "<none>"
        } else {
            "<redacted>"
        };
        f.debug_struct("UserCredential")
            .field("username", &self.username)
            .field("api_token", &token)
            .finish()
    }
}

/// Identity of a Git hosting endpoint and the credentials known for it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HostingServer {
    /// Base URL of the server, without a trailing slash
    pub url: String,

    /// Human readable name, e.g. "GitHub"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Provider kind such as "github" or "gitlab"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    /// Username of the credential used when none is requested explicitly
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub current_user: String,

    /// Credentials registered for this server
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<UserCredential>,
}

impl HostingServer {
    pub fn new(url: impl Into<String>, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            kind: kind.into(),
            current_user: String::new(),
            users: Vec::new(),
        }
    }

    /// Short label used in prompts: the name, or the URL when unnamed.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.url
        } else {
            &self.name
        }
    }

    /// Longer description used in log output.
    pub fn description(&self) -> String {
        if self.name.is_empty() {
            self.url.clone()
        } else {
            format!("{} at {}", self.name, self.url)
        }
    }

    pub fn find_user(&self, username: &str) -> Option<&UserCredential> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn find_user_mut(&mut self, username: &str) -> Option<&mut UserCredential> {
        self.users.iter_mut().find(|u| u.username == username)
    }

    pub fn usernames(&self) -> Vec<String> {
        self.users.iter().map(|u| u.username.clone()).collect()
    }

    /// Insert or replace the credential with the same username.
    pub fn upsert_user(&mut self, credential: UserCredential) {
        match self.find_user_mut(&credential.username) {
            Some(existing) => *existing = credential,
            None => self.users.push(credential),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_requires_username_and_token() {
        assert!(UserCredential::new("alice", "tok").is_valid());
        assert!(UserCredential::without_token("alice").is_invalid());
        assert!(UserCredential::new("", "tok").is_invalid());
        assert!(UserCredential::new("alice", "   ").is_invalid());
    }

    #[test]
    fn credential_debug_hides_token() {
        let cred = UserCredential::new("alice", "ghp_secret");
        let debug = format!("{:?}", cred);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("ghp_secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn label_falls_back_to_url() {
        let named = HostingServer::new("https://github.com", "GitHub", "github");
        assert_eq!(named.label(), "GitHub");
        assert_eq!(named.description(), "GitHub at https://github.com");

        let unnamed = HostingServer::new("https://git.example.com", "", "gitea");
        assert_eq!(unnamed.label(), "https://git.example.com");
        assert_eq!(unnamed.description(), "https://git.example.com");
    }

    #[test]
    fn upsert_replaces_existing_user() {
        let mut server = HostingServer::new("https://github.com", "GitHub", "github");
        server.upsert_user(UserCredential::without_token("alice"));
        server.upsert_user(UserCredential::new("alice", "tok"));
        server.upsert_user(UserCredential::new("bob", "tok2"));

        assert_eq!(server.users.len(), 2);
        assert_eq!(server.find_user("alice").unwrap().api_token, "tok");
        assert_eq!(server.usernames(), vec!["alice", "bob"]);
    }
}
