//! Command-line surface of the smartaihub binary

use std::net::TcpListener;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

/// Run the binary with logs and config lookups inside `home`
fn smartaihub(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("smartaihub").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_CACHE_HOME", home.join("cache"));
    cmd
}

/// A loopback address with nothing listening on it
fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[test]
fn test_help_lists_recommend_subcommand() {
    let home = tempfile::tempdir().unwrap();
    smartaihub(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("recommend"))
        .stdout(predicate::str::contains("--api-url"));
}

#[test]
fn test_version_flag() {
    let home = tempfile::tempdir().unwrap();
    smartaihub(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("smartaihub"));
}

#[test]
fn test_recommend_reports_unreachable_backend() {
    let home = tempfile::tempdir().unwrap();
    smartaihub(home.path())
        .args(["recommend", "Inception", "--api-url", &dead_url()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not reach the recommendation engine"));
}

#[test]
fn test_recommend_rejects_blank_title() {
    let home = tempfile::tempdir().unwrap();
    smartaihub(home.path())
        .args(["recommend", "   ", "--api-url", &dead_url()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Title must not be empty"));
}

#[test]
fn test_explicit_missing_config_is_an_error() {
    let home = tempfile::tempdir().unwrap();
    smartaihub(home.path())
        .args(["recommend", "Inception", "--config"])
        .arg(home.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_invalid_api_url_is_rejected_before_any_request() {
    let home = tempfile::tempdir().unwrap();
    smartaihub(home.path())
        .args(["recommend", "Inception", "--api-url", "localhost:5000/api"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid base URL"));
}
