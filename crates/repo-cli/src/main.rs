//! Repository provisioner CLI
//!
//! Manages the local credential store and resolves where and under which
//! name a new repository would be created.

mod cli;
mod commands;
mod error;
mod logging;
mod prompter;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use cli::{Cli, Commands, ServerAction, UserAction};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    tracing::debug!("Verbose mode enabled");

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            "repo-provision",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    let store_path = commands::store_path(cli.config)?;
    tracing::debug!(path = %store_path.display(), "Using credential store");
    execute_command(&store_path, cli.command)
}

fn execute_command(store_path: &std::path::Path, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Server { action } => match action {
            ServerAction::List { json } => commands::run_server_list(store_path, json),
            ServerAction::Add { url, name, kind } => {
                commands::run_server_add(store_path, &url, name.as_deref(), kind.as_deref())
            }
            ServerAction::Use { server } => commands::run_server_use(store_path, &server),
        },
        Commands::User { action } => match action {
            UserAction::Add {
                server_url,
                username,
                token,
            } => commands::run_user_add(store_path, &server_url, &username, token.as_deref()),
            UserAction::List { server_url } => commands::run_user_list(store_path, &server_url),
        },
        Commands::Resolve(args) => commands::run_resolve(store_path, &args),
        Commands::Completions { .. } => Ok(()),
    }
}
