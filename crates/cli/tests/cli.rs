//! Binary-level tests for `bookshelf-cli`
//!
//! None of these need a running backend. Listings point at a closed local
//! port to exercise the fail-and-log path.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Nothing listens here
const UNREACHABLE: &str = "http://127.0.0.1:9/api";

fn cli(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bookshelf-cli").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("BOOKSHELF_API_URL")
        .env_remove("BOOKSHELF_TIMEOUT_SECS")
        .env("NO_COLOR", "1")
        .env("BOOKSHELF_CONFIG", dir.path().join("bookshelf.toml"));
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("books"))
        .stdout(predicate::str::contains("edit-user"))
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn test_invalid_user_is_rejected_before_any_request() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["--api-url", UNREACHABLE, "add", "user"])
        .args(["--username", "ana", "--email", "ana-at-example"])
        .args(["--join-date", "2024-01-01", "--bio", "Reader"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Email must look like name@domain.tld"))
        .stderr(predicate::str::contains("was not saved").not());
}

#[test]
fn test_unknown_collection_is_an_argument_error() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["list", "shelves"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("shelves"));
}

#[test]
fn test_unreachable_backend_warns_and_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["--api-url", UNREACHABLE, "list", "genres"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Could not load Genres"));
}

#[test]
fn test_config_file_supplies_base_url() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("bookshelf.toml"),
        format!("api_base_url = \"{UNREACHABLE}\"\n"),
    )
    .unwrap();

    cli(&dir)
        .args(["books", "--genre", "Horror"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Could not load Books"));
}

#[test]
fn test_failed_mutation_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["--api-url", UNREACHABLE, "add", "genre", "Horror"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Genre 'Horror' was not saved"));
}
