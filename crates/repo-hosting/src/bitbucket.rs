//! Bitbucket Cloud
//!
//! Repositories are addressed by slug: the name lowercased with runs of
//! spaces turned into a single dash. `My App` lives at `workspace/my-app`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::provider::{Connection, HostingProvider, check_length};

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._ -]+$").unwrap());

const MAX_NAME_LEN: usize = 62;

#[derive(Debug)]
pub struct BitbucketProvider {
    connection: Connection,
}

impl BitbucketProvider {
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }
}

/// Slug Bitbucket derives from a repository name.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

impl HostingProvider for BitbucketProvider {
    fn connection(&self) -> &Connection {
        &self.connection
    }

    fn check_name_syntax(&self, name: &str) -> Result<()> {
        check_length(name, MAX_NAME_LEN)?;
        if !NAME_PATTERN.is_match(name) {
            return Err(Error::invalid_name(
                name,
                "may only contain letters, digits, spaces, '.', '-' and '_'",
            ));
        }
        Ok(())
    }

    fn repository_slug(&self, name: &str) -> String {
        slugify(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("My App"), "my-app");
        assert_eq!(slugify("  spaced   out "), "spaced-out");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
    }
}
