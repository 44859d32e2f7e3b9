//! GitLab (SaaS and self-managed)
//!
//! Owners may be nested groups (`group/subgroup`), so the qualified name can
//! contain more than one slash.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::provider::{Connection, HostingProvider, check_length};

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.-]*$").unwrap());

const MAX_NAME_LEN: usize = 255;

const RESERVED_SUFFIXES: &[&str] = &[".git", ".atom"];

#[derive(Debug)]
pub struct GitLabProvider {
    connection: Connection,
}

impl GitLabProvider {
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }
}

impl HostingProvider for GitLabProvider {
    fn connection(&self) -> &Connection {
        &self.connection
    }

    fn check_name_syntax(&self, name: &str) -> Result<()> {
        check_length(name, MAX_NAME_LEN)?;
        if !NAME_PATTERN.is_match(name) {
            return Err(Error::invalid_name(
                name,
                "must start with a letter, digit or '_' and contain only letters, digits, '_', '-' and '.'",
            ));
        }
        if let Some(suffix) = RESERVED_SUFFIXES.iter().find(|s| name.ends_with(*s)) {
            return Err(Error::invalid_name(name, format!("cannot end in '{suffix}'")));
        }
        Ok(())
    }

    fn qualified_name(&self, owner: &str, name: &str) -> String {
        format!("{}/{name}", owner.trim_matches('/'))
    }
}
