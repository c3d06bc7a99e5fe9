use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("flapboard")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("flip"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--text"));
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("flapboard")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("flapboard")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0"));
}

#[test]
fn test_board_refuses_without_terminal() {
    // stdin/stderr are pipes under assert_cmd, so the TUI must bail
    // instead of writing escape sequences into the pipe.
    cargo_bin_cmd!("flapboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("terminal"));
}
