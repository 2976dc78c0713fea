//! Integration tests for the Safebox CLI.
//!
//! These exercise the binary end-to-end using `assert_cmd`.  The password
//! is always pre-supplied through `SAFEBOX_PASSWORD`, and each test runs
//! in a temp dir whose `.safebox.toml` lowers the Argon2 cost.

use std::fs;

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

const FAST_CONFIG: &str = "argon2_memory_kib = 8192\nargon2_iterations = 1\nargon2_parallelism = 1\n";

/// Helper: get a Command pointing at the safebox binary.
fn safebox() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("safebox").expect("binary should exist")
}

/// Helper: a temp project dir with fast KDF settings.
fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    tmp.child(".safebox.toml").write_str(FAST_CONFIG).unwrap();
    tmp
}

/// Helper: safebox in `dir` with the given password.
fn run_in(dir: &TempDir, password: &str) -> Command {
    let mut cmd = safebox();
    cmd.current_dir(dir.path())
        .env("SAFEBOX_PASSWORD", password)
        .env_remove("SAFEBOX_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_flag_shows_usage() {
    safebox()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("--file"));
}

#[test]
fn version_flag_shows_version() {
    safebox()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("safebox"));
}

#[test]
fn no_args_shows_help_and_fails() {
    safebox()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_command_fails() {
    safebox()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("frobnicate"));
}

#[test]
fn list_on_missing_vault_prints_nothing_and_creates_nothing() {
    let dir = project();

    run_in(&dir, "pw")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    dir.child("safe.box").assert(predicate::path::missing());
}

#[test]
fn set_then_list_preserves_order() {
    let dir = project();

    run_in(&dir, "pw").args(["set", "zeta=1", "alpha=2"]).assert().success();
    run_in(&dir, "pw").args(["set", "zeta=3", "mid=x=y"]).assert().success();

    dir.child("safe.box").assert(predicate::path::exists());
    run_in(&dir, "pw")
        .arg("list")
        .assert()
        .success()
        .stdout("zeta=3\nalpha=2\nmid=x=y\n");
}

#[test]
fn get_prints_value_without_newline_when_piped() {
    let dir = project();
    run_in(&dir, "pw").args(["set", "k=a=b"]).assert().success();

    run_in(&dir, "pw").args(["get", "k"]).assert().success().stdout("a=b");
}

#[test]
fn get_missing_key_prints_nothing_and_succeeds() {
    let dir = project();
    run_in(&dir, "pw").args(["set", "k=v"]).assert().success();

    run_in(&dir, "pw")
        .args(["get", "missing"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn delete_missing_key_leaves_file_untouched() {
    let dir = project();
    run_in(&dir, "pw").args(["set", "k=v"]).assert().success();
    let before = fs::read(dir.path().join("safe.box")).unwrap();

    run_in(&dir, "pw").args(["delete", "nope"]).assert().success();
    run_in(&dir, "pw").arg("delete").assert().success();

    assert_eq!(fs::read(dir.path().join("safe.box")).unwrap(), before);
}

#[test]
fn delete_removes_key() {
    let dir = project();
    run_in(&dir, "pw").args(["set", "a=1", "b=2"]).assert().success();
    run_in(&dir, "pw").args(["delete", "a"]).assert().success();

    run_in(&dir, "pw").arg("list").assert().success().stdout("b=2\n");
}

#[test]
fn wrong_password_fails_with_message() {
    let dir = project();
    run_in(&dir, "right").args(["set", "k=v"]).assert().success();

    run_in(&dir, "wrong")
        .arg("list")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("wrong password"));
}

#[test]
fn file_flag_overrides_default_path() {
    let dir = project();
    run_in(&dir, "pw")
        .args(["--file", "team.box", "set", "k=v"])
        .assert()
        .success();

    dir.child("team.box").assert(predicate::path::exists());
    dir.child("safe.box").assert(predicate::path::missing());

    run_in(&dir, "pw")
        .args(["get", "k", "-f", "team.box"])
        .assert()
        .success()
        .stdout("v");
}

#[test]
fn file_env_var_sets_path() {
    let dir = project();
    run_in(&dir, "pw")
        .env("SAFEBOX_FILE", "from-env.box")
        .args(["set", "k=v"])
        .assert()
        .success();

    dir.child("from-env.box").assert(predicate::path::exists());
}

#[test]
fn config_file_sets_path() {
    let dir = TempDir::new().unwrap();
    dir.child(".safebox.toml")
        .write_str(&format!("file = \"configured.box\"\n{FAST_CONFIG}"))
        .unwrap();

    run_in(&dir, "pw").args(["set", "k=v"]).assert().success();
    dir.child("configured.box").assert(predicate::path::exists());
}

#[test]
fn set_without_equals_fails() {
    let dir = project();

    run_in(&dir, "pw")
        .args(["set", "novalue"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("KEY=VALUE"));

    dir.child("safe.box").assert(predicate::path::missing());
}

#[test]
fn garbage_vault_file_is_reported() {
    let dir = project();
    dir.child("safe.box").write_binary(b"definitely not a vault").unwrap();

    run_in(&dir, "pw")
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid ciphertext"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let dir = project();

    run_in(&dir, "pw")
        .args(["--verbose", "set", "k=v"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("writing vault"));
}

#[test]
fn verbose_set_reports_unchanged_values() {
    let dir = project();
    run_in(&dir, "pw")
        .args(["--verbose", "set", "k=v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote 1 key(s)"));
    let before = fs::read(dir.path().join("safe.box")).unwrap();

    run_in(&dir, "pw")
        .args(["--verbose", "set", "k=v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Values unchanged"))
        .stderr(predicate::str::contains("Wrote").not());

    assert_eq!(fs::read(dir.path().join("safe.box")).unwrap(), before);
}

#[test]
fn empty_preset_password_works_without_terminal() {
    let dir = project();
    run_in(&dir, "").args(["set", "k=v"]).assert().success();

    run_in(&dir, "").args(["get", "k"]).assert().success().stdout("v");
    run_in(&dir, "x")
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("wrong password"));
}

#[test]
fn completions_reject_unknown_shell() {
    safebox()
        .args(["completions", "csh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("csh"));
}

#[test]
fn completions_generate_script() {
    safebox()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("safebox"));
}
