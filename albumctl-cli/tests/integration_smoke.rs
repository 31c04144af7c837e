//! Smoke tests that need no database: help output and fail-fast startup

use assert_cmd::Command;
use predicates::prelude::*;

fn albumctl() -> Command {
    let mut cmd = Command::cargo_bin("albumctl").unwrap();
    // keep the caller's environment from leaking into the test
    cmd.env_remove("DBUSER")
        .env_remove("DBPASS")
        .env_remove("DBHOST")
        .env_remove("DBPORT")
        .env_remove("DBNAME")
        .env_remove("RUST_LOG");
    cmd
}

// === Help ===

#[test]
fn test_help_lists_subcommands() {
    albumctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("by-artist"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("add"));
}

#[test]
fn test_add_help() {
    albumctl()
        .args(["add", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--price"));
}

// === Fail fast ===

#[test]
fn test_missing_user_fails_before_connecting() {
    albumctl()
        .env("DBPASS", "secret")
        .arg("ping")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing environment variable DBUSER"));
}

#[test]
fn test_missing_password_fails_before_connecting() {
    albumctl()
        .env("DBUSER", "root")
        .args(["by-artist", "John Coltrane"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing environment variable DBPASS"));
}

#[test]
fn test_invalid_port_is_rejected() {
    albumctl()
        .env("DBUSER", "root")
        .env("DBPASS", "secret")
        .args(["--port", "0", "ping"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("port must be non-zero"));
}

#[test]
fn test_unreachable_server_fails_startup() {
    albumctl()
        .env("DBUSER", "root")
        .env("DBPASS", "secret")
        .args(["--port", "1", "--connect-timeout", "2", "get", "2"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Album found").not())
        .stderr(predicate::str::contains("failed to connect"))
        .stderr(predicate::str::contains("secret").not());
}
