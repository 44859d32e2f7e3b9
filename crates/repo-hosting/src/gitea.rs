//! Gitea and Forgejo

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::provider::{Connection, HostingProvider, check_length};

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").unwrap());

const MAX_NAME_LEN: usize = 100;

const RESERVED_NAMES: &[&str] = &[".", "..", "-"];
const RESERVED_SUFFIXES: &[&str] = &[".git", ".wiki", ".rss", ".atom"];

#[derive(Debug)]
pub struct GiteaProvider {
    connection: Connection,
}

impl GiteaProvider {
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }
}

impl HostingProvider for GiteaProvider {
    fn connection(&self) -> &Connection {
        &self.connection
    }

    fn check_name_syntax(&self, name: &str) -> Result<()> {
        check_length(name, MAX_NAME_LEN)?;
        if RESERVED_NAMES.contains(&name) {
            return Err(Error::invalid_name(name, "name is reserved"));
        }
        if let Some(suffix) = RESERVED_SUFFIXES
            .iter()
            .find(|s| name.to_lowercase().ends_with(*s))
        {
            return Err(Error::invalid_name(name, format!("cannot end in '{suffix}'")));
        }
        if !NAME_PATTERN.is_match(name) {
            return Err(Error::invalid_name(
                name,
                "may only contain letters, digits, '.', '-' and '_'",
            ));
        }
        Ok(())
    }
}
