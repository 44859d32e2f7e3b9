//! End-to-end tests for the resolver

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use repo_auth::{AuthConfig, CredentialStore};
use repo_hosting::ProviderKind;
use repo_provision::{
    ProvisioningPlan, RepositoryRequestOptions, ResolveError, ResolveRequest, Resolver,
};
use repo_test_utils::{FakeConnector, MemoryStore, ScriptedPrompter, server, store_with_server};

const GITHUB: &str = "https://github.com";

// =============================================================================
// Batch
// =============================================================================

#[test]
fn test_batch_resolves_known_user() {
    let mut store = store_with_server(GITHUB, "github", &[("alice", "tok")]);
    let connector = FakeConnector::new();
    let prompter = ScriptedPrompter::new();
    let options = RepositoryRequestOptions::default()
        .with_server_url(GITHUB)
        .with_repo_name("myapp");
    let mut request = ResolveRequest::batch(options);

    let result = Resolver::new(&mut store, &connector, &prompter)
        .resolve(&mut request)
        .unwrap();

    assert_eq!(
        result.plan(),
        ProvisioningPlan {
            server_url: GITHUB.to_string(),
            provider: "github".to_string(),
            username: "alice".to_string(),
            owner: "alice".to_string(),
            repo_name: "myapp".to_string(),
            full_name: "alice/myapp".to_string(),
            private: false,
        }
    );
    assert_eq!(result.provider.kind(), ProviderKind::GitHub);
    assert_eq!(result.credential.api_token, "tok");
    assert_eq!(prompter.calls(), 0);
    assert_eq!(store.write_count(), 0);
}

#[test]
fn test_batch_without_servers_writes_nothing() {
    let mut store = MemoryStore::default();
    let connector = FakeConnector::new();
    let prompter = ScriptedPrompter::new();
    let mut request = ResolveRequest::batch(RepositoryRequestOptions::default());

    let err = Resolver::new(&mut store, &connector, &prompter)
        .resolve(&mut request)
        .unwrap_err();

    assert!(matches!(err, ResolveError::NoServersConfigured));
    assert_eq!(store.write_count(), 0);
    assert!(store.config().servers().is_empty());
}

#[test]
fn test_chosen_server_is_written_back_to_options() {
    let mut store = store_with_server(GITHUB, "github", &[("alice", "tok")]);
    let connector = FakeConnector::new();
    let prompter = ScriptedPrompter::new();
    let mut request = ResolveRequest::batch(RepositoryRequestOptions::default());

    Resolver::new(&mut store, &connector, &prompter)
        .resolve(&mut request)
        .unwrap();

    assert_eq!(request.options.server_url.as_deref(), Some(GITHUB));
}

#[test]
fn test_resolution_is_repeatable() {
    let mut store = store_with_server(GITHUB, "github", &[("alice", "tok")]);
    let connector = FakeConnector::new();
    let prompter = ScriptedPrompter::new();
    let options = RepositoryRequestOptions::default()
        .with_server_url(GITHUB)
        .with_repo_name("myapp");

    let first = Resolver::new(&mut store, &connector, &prompter)
        .resolve(&mut ResolveRequest::batch(options.clone()))
        .unwrap();
    let config_after_first: AuthConfig = store.config().clone();
    let second = Resolver::new(&mut store, &connector, &prompter)
        .resolve(&mut ResolveRequest::batch(options))
        .unwrap();

    assert_eq!(first.plan(), second.plan());
    assert_eq!(first.server, second.server);
    assert_eq!(first.credential, second.credential);
    assert_eq!(store.config(), &config_after_first);
}

#[test]
fn test_resolve_new_asks_again_for_existing_repository() {
    let mut store = store_with_server(GITHUB, "github", &[("alice", "tok")]);
    let connector = FakeConnector::new().with_repo("alice", "taken");
    let prompter = ScriptedPrompter::new().answer("taken").answer("fresh");
    let mut request =
        ResolveRequest::interactive(RepositoryRequestOptions::default()).allow_existing(true);

    let result = Resolver::new(&mut store, &connector, &prompter)
        .resolve_new(&mut request)
        .unwrap();

    assert_eq!(result.repo_name, "fresh");
    assert_eq!(prompter.rejections().len(), 1);
    assert!(!request.allow_existing_repository);
}

#[test]
fn test_result_creates_repository() {
    let mut store = store_with_server(GITHUB, "github", &[("alice", "tok")]);
    let connector = FakeConnector::new();
    let prompter = ScriptedPrompter::new();
    let options = RepositoryRequestOptions::default()
        .with_repo_name("myapp")
        .with_private(true);
    let mut request = ResolveRequest::batch(options);

    let result = Resolver::new(&mut store, &connector, &prompter)
        .resolve(&mut request)
        .unwrap();
    let created = result.create_repository().unwrap();

    assert_eq!(created.full_name, "alice/myapp");
    assert!(created.private);
    assert_eq!(result.get_repository().unwrap(), created);
    assert_eq!(connector.service().repos.len(), 1);
}

#[test]
fn test_supplied_server_and_credential_skip_the_store() {
    let mut store = MemoryStore::default();
    let connector = FakeConnector::new();
    let prompter = ScriptedPrompter::new();
    let options = RepositoryRequestOptions::default().with_repo_name("infra");
    let mut request = ResolveRequest::batch(options)
        .with_server(server("https://gitlab.example.com", "gitlab", &[]))
        .with_credential(repo_auth::UserCredential::new("bob", "t2"));

    let result = Resolver::new(&mut store, &connector, &prompter)
        .resolve(&mut request)
        .unwrap();

    assert_eq!(result.full_name, "bob/infra");
    assert_eq!(result.provider.kind(), ProviderKind::GitLab);
    assert!(store.config().servers().is_empty());
}

#[test]
fn test_batch_end_to_end_on_self_hosted_server() {
    let mut store = store_with_server("https://git.example.com", "gitea", &[("alice", "tok")]);
    let connector = FakeConnector::new();
    let prompter = ScriptedPrompter::new();
    let options = RepositoryRequestOptions::default()
        .with_server_url("https://git.example.com")
        .with_username("alice")
        .with_repo_name("myapp");
    let mut request = ResolveRequest::batch(options);

    let result = Resolver::new(&mut store, &connector, &prompter)
        .resolve(&mut request)
        .unwrap();

    assert_eq!(result.owner, "alice");
    assert_eq!(result.repo_name, "myapp");
    assert_eq!(result.full_name, "alice/myapp");
    assert!(!result.private);
    assert_eq!(result.provider.kind(), ProviderKind::Gitea);
    assert_eq!(prompter.calls(), 0);
}

// =============================================================================
// Interactive
// =============================================================================

#[test]
fn test_interactive_first_run() {
    let mut store = store_with_server(GITHUB, "github", &[]);
    let connector = FakeConnector::new();
    let prompter = ScriptedPrompter::new()
        .answer("alice")
        .answer("")
        .answer("tok")
        .answer("myapp");
    let mut request = ResolveRequest::interactive(RepositoryRequestOptions::default());

    let result = Resolver::new(&mut store, &connector, &prompter)
        .resolve(&mut request)
        .unwrap();

    assert_eq!(result.full_name, "alice/myapp");
    assert_eq!(prompter.calls(), 4);
    assert_eq!(prompter.remaining(), 0);
    assert_eq!(store.write_count(), 1);
    assert_eq!(
        store.config().find_credential(GITHUB, "alice"),
        Some(repo_auth::UserCredential::new("alice", "tok"))
    );
}

#[test]
fn test_interactive_second_run_asks_only_for_name() {
    let mut store = store_with_server(GITHUB, "github", &[("alice", "tok")]);
    let connector = FakeConnector::new();
    let prompter = ScriptedPrompter::new().answer("myapp");
    let mut request = ResolveRequest::interactive(RepositoryRequestOptions::default());

    let result = Resolver::new(&mut store, &connector, &prompter)
        .resolve(&mut request)
        .unwrap();

    assert_eq!(result.full_name, "alice/myapp");
    assert_eq!(prompter.questions(), vec!["Enter the new repository name:"]);
    assert_eq!(store.write_count(), 0);
}

// =============================================================================
// Properties
// =============================================================================

fn arb_options() -> impl Strategy<Value = RepositoryRequestOptions> {
    (
        proptest::option::of(prop_oneof![
            Just(GITHUB.to_string()),
            Just("https://gitlab.example.com".to_string()),
            Just("https://git.example.com".to_string()),
        ]),
        proptest::option::of(prop_oneof![
            Just("alice".to_string()),
            Just("bob".to_string()),
            Just(String::new()),
        ]),
        proptest::option::of("[a-z]{1,8}"),
        proptest::option::of("[a-z][a-z0-9-]{0,12}"),
        proptest::option::of(Just("tok".to_string())),
    )
        .prop_map(|(server_url, username, owner, repo_name, api_token)| {
            RepositoryRequestOptions {
                server_url,
                username,
                owner,
                repo_name,
                api_token,
                ..RepositoryRequestOptions::default()
            }
        })
}

fn arb_store() -> impl Strategy<Value = MemoryStore> {
    prop_oneof![
        Just(MemoryStore::default()),
        Just(store_with_server(GITHUB, "github", &[])),
        Just(store_with_server(GITHUB, "github", &[("alice", "tok")])),
        Just(store_with_server(GITHUB, "github", &[("alice", "")])),
        Just(store_with_server(
            "https://gitlab.example.com",
            "gitlab",
            &[("alice", "tok"), ("bob", "")]
        )),
    ]
}

proptest! {
    #[test]
    fn prop_batch_never_prompts(
        options in arb_options(),
        store in arb_store(),
        default_name in "[a-z]{0,6}",
    ) {
        let mut store = store;
        let connector = FakeConnector::new().with_orgs(&["acme"]);
        let prompter = ScriptedPrompter::new();
        let mut request = ResolveRequest::batch(options).with_default_repo_name(default_name);

        let _ = Resolver::new(&mut store, &connector, &prompter).resolve(&mut request);

        prop_assert_eq!(prompter.calls(), 0);
        prop_assert!(prompter.notes().is_empty());
        prop_assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn prop_supplied_name_is_kept(
        name in "[a-z][a-z0-9-]{0,20}",
    ) {
        let mut store = store_with_server(GITHUB, "github", &[("alice", "tok")]);
        let connector = FakeConnector::new();
        let prompter = ScriptedPrompter::new();
        let options = RepositoryRequestOptions::default().with_repo_name(name.clone());
        let mut request = ResolveRequest::batch(options);

        let result = Resolver::new(&mut store, &connector, &prompter)
            .resolve(&mut request)
            .unwrap();

        prop_assert_eq!(result.repo_name, name.clone());
        prop_assert_eq!(result.full_name, format!("alice/{name}"));
    }
}
