//! CLI smoke tests for gobuilder.
//!
//! These run the real binary and check the output channel and exit codes
//! that the surrounding pipeline relies on.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const GO: &str = "/usr/local/go/bin/go";

/// Get a Command for the gobuilder binary, isolated from the CI output file.
fn gobuilder_cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("gobuilder");
    cmd.env_remove("GITHUB_OUTPUT").env_remove("RUST_LOG");
    cmd
}

fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name)
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_works() {
    gobuilder_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
    gobuilder_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gobuilder"));
}

// =============================================================================
// Dry run
// =============================================================================

#[test]
fn dry_run_prints_three_outputs() {
    let expected = format!(
        "::set-output name=go-binary-name::binary-linux-amd64\n\
         ::set-output name=go-command::{GO},build,-mod=vendor,-trimpath,-tags=netgo,-ldflags=bla something-else,-o,binary-linux-amd64\n\
         ::set-output name=go-env::GOOS=linux,GOARCH=amd64,GO111MODULE=on,CGO_ENABLED=0\n"
    );

    gobuilder_cmd()
        .arg("build")
        .arg(testdata("two-ldflags-noenv.yml"))
        .args(["--envs", "VERSION_LDFLAGS:bla, ELSE:else", "--dry", "--compiler", GO])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn dry_run_writes_to_github_output_file() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("output");

    gobuilder_cmd()
        .env("GITHUB_OUTPUT", &out)
        .arg("build")
        .arg(testdata("emptyldflags.yml"))
        .args(["--dry", "--compiler", GO])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        content,
        format!(
            "go-binary-name=binary-linux-amd64\n\
             go-command={GO},build,-mod=vendor,-trimpath,-tags=netgo,-o,binary-linux-amd64\n\
             go-env=GOOS=linux,GOARCH=amd64,GO111MODULE=on,CGO_ENABLED=0\n"
        )
    );
}

#[test]
fn verbose_logs_go_to_stderr() {
    gobuilder_cmd()
        .args(["--verbose", "build"])
        .arg(testdata("two-ldflags.yml"))
        .args(["--dry", "--compiler", GO])
        .assert()
        .success()
        .stdout(predicate::str::contains("assembled build command").not())
        .stderr(predicate::str::contains("assembled build command"));
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn missing_binary_fails_without_output() {
    gobuilder_cmd()
        .arg("build")
        .arg(testdata("missing-binary.yml"))
        .args(["--dry", "--compiler", GO])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: build config is missing the required 'binary' field",
        ));
}

#[test]
fn malformed_substitution_fails_without_output() {
    gobuilder_cmd()
        .arg("build")
        .arg(testdata("two-ldflags.yml"))
        .args(["--envs", "VERSION_LDFLAGS=bla", "--dry", "--compiler", GO])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("malformed substitution string"));
}

#[test]
fn unreadable_config_is_io_failure() {
    gobuilder_cmd()
        .arg("build")
        .arg(testdata("no-such-config.yml"))
        .args(["--dry", "--compiler", GO])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_compiler_is_toolchain_failure() {
    gobuilder_cmd()
        .arg("build")
        .arg(testdata("two-ldflags.yml"))
        .args(["--compiler", "/nonexistent/gobuilder/go"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("compiler '/nonexistent/gobuilder/go' not found"));
}
