//! CLI integration tests for the one-shot subcommands.
//!
//! Uses `assert_cmd` to spawn the `roster` binary and verify exit codes,
//! stdout content, and stderr content. Every command points at a port with
//! nothing listening, so the upstream is always unreachable.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

const DEAD_UPSTREAM: &str = "http://127.0.0.1:1/api/v1/employee";

/// Helper: create a Command for the `roster` binary with a clean upstream
/// environment.
fn roster() -> Command {
    let mut cmd = cargo_bin_cmd!("roster");
    cmd.env_remove("ROSTER_UPSTREAM_URL")
        .env_remove("ROSTER_UPSTREAM_TIMEOUT_SECS")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper: a command against the dead upstream with a short timeout.
fn offline(args: &[&str]) -> Command {
    let mut cmd = roster();
    cmd.args(["--upstream-url", DEAD_UPSTREAM, "--timeout-secs", "1"])
        .args(args);
    cmd
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    roster()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Roster employee REST façade"));
}

#[test]
fn version_exits_0() {
    roster()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("roster"));
}

#[test]
fn serve_help_lists_port_and_in_memory() {
    roster()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--in-memory"));
}

#[test]
fn help_lists_every_subcommand() {
    let assert = roster().arg("--help").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    for command in [
        "serve",
        "list",
        "search",
        "get",
        "highest-salary",
        "top-earners",
        "create",
        "delete",
    ] {
        assert!(stdout.contains(command), "missing {command} in:\n{stdout}");
    }
}

#[test]
fn missing_subcommand_is_usage_error() {
    roster().assert().failure().code(2);
}

// ──────────────────────────────────────────────
// 2. Configuration
// ──────────────────────────────────────────────

#[test]
fn zero_timeout_is_rejected() {
    roster()
        .args(["--timeout-secs", "0", "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("timeout"));
}

#[test]
fn delete_of_dot_segment_id_fails_without_touching_the_collection() {
    offline(&["delete", ".."])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Failed to delete employee."))
        .stderr(predicate::str::contains("invalid employee id"));
}

#[test]
fn malformed_upstream_url_is_rejected() {
    roster()
        .args(["--upstream-url", "not a url", "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not a url"));
}

#[test]
fn upstream_url_from_environment_is_used() {
    roster()
        .env("ROSTER_UPSTREAM_URL", DEAD_UPSTREAM)
        .env("ROSTER_UPSTREAM_TIMEOUT_SECS", "1")
        .args(["--output", "json", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

// ──────────────────────────────────────────────
// 3. Degraded answers from an unreachable upstream
// ──────────────────────────────────────────────

#[test]
fn list_prints_empty_json_array() {
    offline(&["--output", "json", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn search_prints_nothing_in_text_mode() {
    offline(&["search", "ali"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn highest_salary_prints_zero() {
    offline(&["highest-salary"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0\n"));
}

#[test]
fn top_earners_prints_empty_json_array() {
    offline(&["--output", "json", "top-earners"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn get_exits_1_when_absent() {
    offline(&["get", "123"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("employee '123' not found"));
}

#[test]
fn create_exits_1_when_upstream_fails() {
    offline(&["create", "--name", "Dana", "--salary", "90000"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("employee creation failed"));
}

#[test]
fn delete_reports_failure_message() {
    offline(&["delete", "7"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Failed to delete employee."));
}

#[test]
fn quiet_keeps_upstream_warnings() {
    offline(&["--quiet", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("WARN"));
}

#[test]
fn delete_logs_the_request_at_info() {
    offline(&["delete", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("employee delete requested"));
}

#[test]
fn quiet_drops_info_logs() {
    offline(&["--quiet", "delete", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("employee delete requested").not());
}
