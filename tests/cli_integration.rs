//! Integration tests for the salt CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Secrets are supplied through the `SALT_*` environment variables so no
//! interactive prompt is ever shown.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: get a Command pointing at the salt binary with a clean environment.
fn salt(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("salt").expect("binary should exist");
    cmd.current_dir(dir.path())
        .env_remove("SALT_PASSWORD")
        .env_remove("SALT_KEY")
        .env_remove("SALT_SALT")
        .env_remove("SALT_LOG");
    cmd
}

/// Pull the printed key or salt out of an encrypt command's stdout.
fn printed_secret(stdout: &[u8]) -> String {
    let text = String::from_utf8(stdout.to_vec()).expect("stdout is utf-8");
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.contains(' '))
        .expect("a secret line")
        .to_string()
}

#[test]
fn help_flag_shows_usage() {
    let tmp = TempDir::new().unwrap();
    salt(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Encrypt text files one at a time"))
        .stdout(predicate::str::contains("encrypt-key"))
        .stdout(predicate::str::contains("encrypt-passalt"))
        .stdout(predicate::str::contains("encrypt-pass"))
        .stdout(predicate::str::contains("decrypt-key"))
        .stdout(predicate::str::contains("decrypt-passalt"))
        .stdout(predicate::str::contains("decrypt-pass"));
}

#[test]
fn version_flag_shows_version() {
    let tmp = TempDir::new().unwrap();
    salt(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("salt"));
}

#[test]
fn no_args_shows_help() {
    let tmp = TempDir::new().unwrap();
    salt(&tmp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn random_key_roundtrip_in_place() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.child("notes.txt");
    file.write_str("hello world").unwrap();

    let out = salt(&tmp)
        .args(["encrypt-key", "notes.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your key is:"))
        .get_output()
        .stdout
        .clone();
    let key = printed_secret(&out);
    assert_eq!(key.len(), 44);

    let encrypted = std::fs::read_to_string(file.path()).unwrap();
    assert_ne!(encrypted, "hello world");
    assert!(!encrypted.contains("hello"));

    salt(&tmp)
        .args(["decrypt-key", "notes.txt"])
        .env("SALT_KEY", &key)
        .assert()
        .success();

    file.assert("hello world");
}

#[test]
fn wrong_key_leaves_file_untouched() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.child("notes.txt");
    file.write_str("hello world").unwrap();

    salt(&tmp).args(["ek", "notes.txt"]).assert().success();
    let encrypted = std::fs::read_to_string(file.path()).unwrap();

    let wrong = "A".repeat(43) + "=";
    salt(&tmp)
        .args(["dk", "notes.txt"])
        .env("SALT_KEY", wrong)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Integrity check failed"));

    file.assert(encrypted.as_str());
}

#[test]
fn password_salt_roundtrip() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.child("diary.txt");
    file.write_str("dear diary\n").unwrap();

    let out = salt(&tmp)
        .args(["eps", "diary.txt"])
        .env("SALT_PASSWORD", "hunter22")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your salt is:"))
        .get_output()
        .stdout
        .clone();
    let salt_value = printed_secret(&out);
    assert_eq!(salt_value.len(), 24);

    salt(&tmp)
        .args(["dps", "diary.txt"])
        .env("SALT_PASSWORD", "hunter22")
        .env("SALT_SALT", &salt_value)
        .assert()
        .success();

    file.assert("dear diary\n");
}

#[test]
fn password_only_roundtrip_warns() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.child("todo.txt");
    file.write_str("buy milk").unwrap();

    salt(&tmp)
        .args(["encrypt-pass", "todo.txt"])
        .env("SALT_PASSWORD", "abc")
        .assert()
        .success()
        .stderr(predicate::str::contains("Password-only mode"));

    salt(&tmp)
        .args(["decrypt-pass", "todo.txt"])
        .env("SALT_PASSWORD", "abc")
        .assert()
        .success();

    file.assert("buy milk");
}

#[test]
fn password_only_rejects_long_password() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.child("todo.txt");
    file.write_str("buy milk").unwrap();

    salt(&tmp)
        .args(["ep", "todo.txt"])
        .env("SALT_PASSWORD", "x".repeat(33))
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 32"));

    file.assert("buy milk");
}

#[test]
fn password_only_can_be_disabled_by_config() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".salt.toml")
        .write_str("allow_password_only = false\n")
        .unwrap();
    let file = tmp.child("todo.txt");
    file.write_str("buy milk").unwrap();

    salt(&tmp)
        .args(["ep", "todo.txt"])
        .env("SALT_PASSWORD", "abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("disabled"));

    file.assert("buy milk");
}

#[test]
fn output_flag_keeps_original() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.child("plain.txt");
    file.write_str("keep me").unwrap();

    salt(&tmp)
        .args(["ek", "plain.txt", "--output", "sealed.txt"])
        .assert()
        .success();

    file.assert("keep me");
    tmp.child("sealed.txt").assert(predicate::path::exists());
}

#[test]
fn missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    salt(&tmp)
        .args(["ek", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn decrypting_plaintext_is_malformed() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.child("plain.txt");
    file.write_str("this was never encrypted").unwrap();

    salt(&tmp)
        .args(["dp", "plain.txt"])
        .env("SALT_PASSWORD", "abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed input"));

    file.assert("this was never encrypted");
}

#[test]
fn completions_for_bash() {
    let tmp = TempDir::new().unwrap();
    salt(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("salt"));
}
