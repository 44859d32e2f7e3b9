//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Repository provisioner - pick the server, account and name for a new repository
#[derive(Parser, Debug)]
#[command(name = "repo-provision")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Credential store to use instead of the platform default
    #[arg(long, global = true, env = "REPO_PROVISION_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Manage registered Git servers
    Server {
        #[command(subcommand)]
        action: ServerAction,
    },

    /// Manage user credentials
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Resolve server, user, owner and name for a new repository
    ///
    /// Examples:
    ///   repo-provision resolve                          # Ask for whatever is missing
    ///   repo-provision resolve --batch --name myapp     # Never ask; fail if data is missing
    ///   repo-provision resolve --server-url https://gitlab.com --owner acme
    Resolve(ResolveArgs),

    /// Generate shell completions
    ///
    /// Examples:
    ///   repo-provision completions bash > ~/.local/share/bash-completion/completions/repo-provision
    ///   repo-provision completions zsh > ~/.zfunc/_repo-provision
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Server actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ServerAction {
    /// List registered servers
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Register a server, or update its name and kind
    Add {
        /// Base URL, e.g. https://gitlab.example.com
        url: String,

        /// Display name (defaults to the host)
        #[arg(long)]
        name: Option<String>,

        /// Provider kind: github, gitlab, gitea or bitbucket (detected from the URL if omitted)
        #[arg(long)]
        kind: Option<String>,
    },

    /// Make a server the current one
    Use {
        /// Server name or URL
        server: String,
    },
}

/// User actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Store a credential and make it the current user of the server
    Add {
        /// Server URL
        server_url: String,

        /// Login name on the server
        username: String,

        /// API token
        #[arg(long, env = "REPO_PROVISION_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// List the users of a server
    List {
        /// Server URL
        server_url: String,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolveArgs {
    /// Never prompt; apply defaults or fail
    #[arg(long)]
    pub batch: bool,

    /// Git server URL
    #[arg(long)]
    pub server_url: Option<String>,

    /// Provider kind recorded for a new server
    #[arg(long)]
    pub kind: Option<String>,

    /// Git user name
    #[arg(long)]
    pub username: Option<String>,

    /// API token used when the stored credential has none
    #[arg(long, env = "REPO_PROVISION_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Owning user or organisation
    #[arg(long)]
    pub owner: Option<String>,

    /// Repository name
    #[arg(long)]
    pub name: Option<String>,

    /// Create the repository as private
    #[arg(long)]
    pub private: bool,

    /// Suggested repository name
    #[arg(long, default_value = "")]
    pub default_name: String,

    /// Accept the name of a repository that already exists
    #[arg(long)]
    pub allow_existing: bool,

    /// Output as JSON for scripting
    #[arg(long)]
    pub json: bool,
}
