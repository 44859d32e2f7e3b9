//! GitHub and GitHub Enterprise

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::provider::{Connection, HostingProvider, check_length};

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").unwrap());

const MAX_NAME_LEN: usize = 100;

#[derive(Debug)]
pub struct GitHubProvider {
    connection: Connection,
}

impl GitHubProvider {
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }
}

impl HostingProvider for GitHubProvider {
    fn connection(&self) -> &Connection {
        &self.connection
    }

    fn check_name_syntax(&self, name: &str) -> Result<()> {
        check_length(name, MAX_NAME_LEN)?;
        if name == "." || name == ".." {
            return Err(Error::invalid_name(name, "name is reserved"));
        }
        if !NAME_PATTERN.is_match(name) {
            return Err(Error::invalid_name(
                name,
                "may only contain ASCII letters, digits, '.', '-' and '_'",
            ));
        }
        Ok(())
    }
}
