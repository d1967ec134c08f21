//! End-to-end tests that run the binary against a stand-in `git` on `PATH`.
//!
//! The stand-in records each invocation's argument vector, one `[arg]` per
//! argument, to the file named by `FAKE_GIT_LOG`.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;
use serial_test::serial;

const FAKE_GIT: &str = r#"#!/bin/sh
for arg in "$@"; do printf '[%s]' "$arg" >> "$FAKE_GIT_LOG"; done
printf '\n' >> "$FAKE_GIT_LOG"
case "$1" in
  config)
    if [ -n "$FAKE_GIT_CONFIG_STDERR" ]; then
      echo "$FAKE_GIT_CONFIG_STDERR" >&2
      exit 1
    fi
    ;;
  clone)
    exit "${FAKE_GIT_CLONE_EXIT:-0}"
    ;;
esac
exit 0
"#;

struct Workspace {
    temp: assert_fs::TempDir,
}

impl Workspace {
    fn new(email: &str) -> Self {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("conf/accountswitcherconfig.json")
            .write_str(&format!(
                r#"{{"work": {{"email": "{email}", "prefix": "git@github-work"}}}}"#
            ))
            .unwrap();

        let git = temp.child("bin/git");
        git.write_str(FAKE_GIT).unwrap();
        std::fs::set_permissions(git.path(), std::fs::Permissions::from_mode(0o755)).unwrap();

        Self { temp }
    }

    fn command(&self) -> assert_cmd::Command {
        let mut cmd = cargo_bin_cmd!("accountswitcher");
        cmd.current_dir(self.temp.path())
            .env("ACCOUNTSWITCHER_DIR", self.temp.child("conf").path())
            .env("PATH", self.temp.child("bin").path())
            .env("FAKE_GIT_LOG", self.temp.child("git.log").path())
            .env_remove("FAKE_GIT_CONFIG_STDERR")
            .env_remove("FAKE_GIT_CLONE_EXIT")
            .env_remove("RUST_LOG");
        cmd
    }

    fn git_log(&self) -> String {
        std::fs::read_to_string(self.temp.child("git.log").path()).unwrap_or_default()
    }

    fn session(&self) -> String {
        std::fs::read_to_string(self.temp.child("conf/accountswitcherconfig.txt").path()).unwrap()
    }
}

#[test]
#[serial]
fn switch_and_clone_runs_config_then_clone() {
    let ws = Workspace::new("a@b.com");

    ws.command()
        .args(["work", "ybgirgin3/repo-url-account-dedicator"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "git@github-work:ybgirgin3/repo-url-account-dedicator.git",
        ));

    assert_eq!(
        ws.git_log(),
        "[config][--global][user.email][a@b.com]\n\
         [clone][git@github-work:ybgirgin3/repo-url-account-dedicator.git]\n"
    );
    assert_eq!(ws.session(), "work");
}

#[test]
#[serial]
fn failing_identity_update_reports_git_stderr() {
    let ws = Workspace::new("a@b.com");

    ws.command()
        .env("FAKE_GIT_CONFIG_STDERR", "boom")
        .args(["work", "o/n"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("external command failed"))
        .stderr(predicate::str::contains("boom"));

    assert!(!ws.git_log().contains("[clone]"));
}

#[test]
#[serial]
fn failing_clone_keeps_session_switched() {
    let ws = Workspace::new("a@b.com");

    ws.command()
        .env("FAKE_GIT_CLONE_EXIT", "128")
        .args(["work", "o/n"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("external command failed"))
        .stderr(predicate::str::contains("128"));

    assert_eq!(ws.session(), "work");
}

#[test]
#[serial]
fn email_reaches_git_as_one_argument() {
    let ws = Workspace::new("a;b@c.com");

    ws.command().arg("work").assert().success();

    assert_eq!(ws.git_log(), "[config][--global][user.email][a;b@c.com]\n");
}

#[test]
#[serial]
fn missing_git_binary_is_external_command_error() {
    let ws = Workspace::new("a@b.com");
    let empty = ws.temp.child("empty");
    empty.create_dir_all().unwrap();

    ws.command()
        .env("PATH", empty.path())
        .arg("work")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("external command failed: `git config"));
}
