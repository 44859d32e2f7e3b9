//! Tests for the TOML-backed credential store

use pretty_assertions::assert_eq;
use repo_auth::{CredentialStore, Error, FileCredentialStore, UserCredential};
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = r#"
current_server = "https://github.com"
default_username = "alice"

[[servers]]
url = "https://github.com"
name = "GitHub"
kind = "github"
current_user = "alice"

[[servers.users]]
username = "alice"
api_token = "ghp_alice"

[[servers.users]]
username = "bob"

[[servers]]
url = "https://gitlab.example.com"
kind = "gitlab"
"#;

fn write_sample(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("auth.toml");
    fs::write(&path, SAMPLE).unwrap();
    path
}

#[test]
fn test_open_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileCredentialStore::open(dir.path().join("auth.toml")).unwrap();

    assert!(store.config().is_empty());
    assert_eq!(store.config().current_server(), None);
}

#[test]
fn test_open_parses_servers_and_users() {
    let dir = TempDir::new().unwrap();
    let store = FileCredentialStore::open(write_sample(&dir)).unwrap();
    let config = store.config();

    assert_eq!(config.servers().len(), 2);
    assert_eq!(config.current_server(), Some("https://github.com"));

    let github = config.find_server("https://github.com").unwrap();
    assert_eq!(github.label(), "GitHub");
    assert_eq!(github.current_user, "alice");
    assert_eq!(github.usernames(), vec!["alice", "bob"]);
    assert!(github.find_user("alice").unwrap().is_valid());
    assert!(github.find_user("bob").unwrap().is_invalid());

    let gitlab = config.find_server("https://gitlab.example.com/").unwrap();
    assert_eq!(gitlab.kind, "gitlab");
    assert!(gitlab.users.is_empty());
}

#[test]
fn test_open_rejects_invalid_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("auth.toml");
    fs::write(&path, "[[servers]\nurl = ").unwrap();

    let err = FileCredentialStore::open(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigParse { .. }), "got {err:?}");
}

#[test]
fn test_persist_credential_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    let mut store = FileCredentialStore::open(&path).unwrap();
    store
        .persist_credential("https://gitlab.example.com", &UserCredential::new("carol", "glpat"))
        .unwrap();

    let reloaded = FileCredentialStore::open(&path).unwrap();
    let config = reloaded.config();
    assert_eq!(config.current_server(), Some("https://gitlab.example.com"));
    assert_eq!(config.default_username, "carol");
    assert_eq!(
        config.find_credential("https://gitlab.example.com", "carol"),
        Some(UserCredential::new("carol", "glpat"))
    );
    // Untouched entries survive the rewrite
    assert_eq!(
        config.find_credential("https://github.com", "alice"),
        Some(UserCredential::new("alice", "ghp_alice"))
    );
}

#[test]
fn test_snapshot_edits_are_not_written_until_persisted() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    let mut store = FileCredentialStore::open(&path).unwrap();
    store
        .config_mut()
        .get_or_create_server("https://git.example.com", Some("gitea"));
    assert_eq!(store.config().servers().len(), 3);

    assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE);
}

#[rstest]
#[case("https://github.com", "alice")]
#[case("https://github.com/", "alice")]
#[case("  https://github.com ", "alice")]
fn test_find_credential_normalizes_url(#[case] url: &str, #[case] username: &str) {
    let dir = TempDir::new().unwrap();
    let store = FileCredentialStore::open(write_sample(&dir)).unwrap();

    assert!(store.config().find_credential(url, username).is_some());
}

#[test]
fn test_save_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("repo-provision").join("auth.toml");

    let mut store = FileCredentialStore::open(&path).unwrap();
    store
        .persist_credential("https://github.com", &UserCredential::new("alice", "tok"))
        .unwrap();

    assert!(path.is_file());
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("https://github.com"));
    assert!(content.contains("alice"));
}

#[test]
fn test_failed_persist_leaves_snapshot_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("auth.toml");
    let mut store = FileCredentialStore::open(&path).unwrap();

    // A non-empty directory in place of the file makes the final rename fail
    fs::create_dir(&path).unwrap();
    fs::write(path.join("occupied"), "x").unwrap();

    let result =
        store.persist_credential("https://github.com", &UserCredential::new("alice", "tok"));

    assert!(matches!(result, Err(Error::Io { .. })));
    assert!(store.config().servers().is_empty());
    assert_eq!(store.config().current_server(), None);
    assert_eq!(store.config().default_username, "");
}

#[cfg(unix)]
#[test]
fn test_persisted_store_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("auth.toml");
    let mut store = FileCredentialStore::open(&path).unwrap();
    store
        .persist_credential("https://github.com", &UserCredential::new("alice", "tok"))
        .unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
