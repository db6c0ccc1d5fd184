//! End-to-end tests for the `stdver` binary.
//!
//! Each test spawns the compiled binary and checks its exit status and
//! output streams.

use std::process::{Command, Output};

fn stdver(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_stdver"))
        .args(args)
        .env_remove("STDVER_LEVEL")
        .env_remove("STDVER_DATE")
        .env_remove("STDVER_FORMAT")
        .env_remove("STDVER_MARKUP")
        .output()
        .expect("failed to run stdver")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// Success paths
// ---------------------------------------------------------------------------

#[test]
fn bump_minor_prints_next_identifier() {
    let out = stdver(&["bump", "-p", "N", "1.2.3"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "1.3a0\n");
    assert!(stderr(&out).is_empty());
}

#[test]
fn version_prints_copyright_and_license() {
    let out = stdver(&["version"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.starts_with(&format!("stdver {}\n", env!("CARGO_PKG_VERSION"))));
    assert!(
        text.contains(&format!("Copyright (c) 2023 {}", env!("CARGO_PKG_AUTHORS"))),
        "missing copyright line in {text:?}"
    );
    assert!(text.contains("Licensed under MIT"));
}

// ---------------------------------------------------------------------------
// Failure paths: exit status 1 and a `stdver: ERROR:` line on stderr
// ---------------------------------------------------------------------------

#[test]
fn bump_invalid_identifier_exits_with_error() {
    let out = stdver(&["bump", "1.2x3"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    let err = stderr(&out);
    assert!(err.starts_with("stdver: ERROR: "), "unexpected stderr {err:?}");
    assert!(err.contains("1.2x3"));
}

#[test]
fn explain_unsupported_mode_exits_with_error() {
    let out = stdver(&["explain", "-f", "json", "-m", "html", "1.0a0"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).starts_with("stdver: ERROR: "));
}

#[test]
fn hash_missing_file_exits_with_error() {
    let out = stdver(&["hash", "does/not/exist.txt"]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.starts_with("stdver: ERROR: failed to read does/not/exist.txt"));
}
