//! The resolve command

use std::path::Path;

use colored::Colorize;
use repo_hosting::OfflineConnector;
use repo_provision::{ProvisioningPlan, RepositoryRequestOptions, ResolveRequest, Resolver};

use super::{load_settings, open_store};
use crate::cli::ResolveArgs;
use crate::error::Result;
use crate::prompter::DialoguerPrompter;

pub fn request_from_args(args: &ResolveArgs) -> ResolveRequest {
    let options = RepositoryRequestOptions {
        server_url: args.server_url.clone(),
        server_kind: args.kind.clone(),
        username: args.username.clone(),
        api_token: args.token.clone(),
        owner: args.owner.clone(),
        repo_name: args.name.clone(),
        private: args.private,
    };
    let request = if args.batch {
        ResolveRequest::batch(options)
    } else {
        ResolveRequest::interactive(options)
    };
    request
        .allow_existing(args.allow_existing)
        .with_default_repo_name(args.default_name.clone())
}

/// Resolve against the local store and print the plan.
///
/// No hosting service is contacted: organisations are not listed and every
/// name counts as free.
pub fn run_resolve(store_path: &Path, args: &ResolveArgs) -> Result<()> {
    let mut store = open_store(store_path)?;
    let settings = load_settings(store_path)?;
    let connector = OfflineConnector;
    let prompter = DialoguerPrompter::new();
    let mut request = request_from_args(args);

    let result = Resolver::new(&mut store, &connector, &prompter)
        .with_settings(settings)
        .resolve(&mut request)?;
    let plan = result.plan();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_plan(&plan);
    }
    Ok(())
}

fn print_plan(plan: &ProvisioningPlan) {
    println!("{}", "Resolved repository:".bold());
    println!("  {}: {}", "Repository".dimmed(), plan.full_name.cyan());
    println!("  {}: {} ({})", "Server".dimmed(), plan.server_url, plan.provider);
    println!("  {}: {}", "User".dimmed(), plan.username);
    println!("  {}: {}", "Owner".dimmed(), plan.owner);
    let visibility = if plan.private { "private" } else { "public" };
    println!("  {}: {}", "Visibility".dimmed(), visibility);
}

#[cfg(test)]
mod tests {
    use super::*;
    use repo_provision::Mode;

    #[test]
    fn test_request_from_args() {
        let args = ResolveArgs {
            batch: true,
            server_url: Some("https://github.com".to_string()),
            name: Some("myapp".to_string()),
            default_name: "fallback".to_string(),
            allow_existing: true,
            private: true,
            ..ResolveArgs::default()
        };

        let request = request_from_args(&args);

        assert_eq!(request.mode(), Mode::Batch);
        assert_eq!(request.options.server_url.as_deref(), Some("https://github.com"));
        assert_eq!(request.options.repo_name.as_deref(), Some("myapp"));
        assert!(request.options.private);
        assert!(request.allow_existing_repository);
        assert_eq!(request.default_repo_name, "fallback");
    }

    #[test]
    fn test_interactive_by_default() {
        let request = request_from_args(&ResolveArgs::default());
        assert_eq!(request.mode(), Mode::Interactive);
    }
}
