// unescape/tests/cli_integration_tests.rs
//! Command-line integration tests for the `unescape` binary.
//!
//! These tests invoke the real executable with `assert_cmd`, drive it
//! against tempfile-backed fixtures, and assert on exit status, stderr
//! logging, and the on-disk content after the run. All data I/O goes
//! through the named file; the tool has no stdin/stdout data flow.

use anyhow::Result;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

use assert_cmd::Command;

/// Helper to run the `unescape` binary against the given arguments.
///
/// `RUST_LOG` is set for the spawned process so the tool's own info/debug
/// logs are visible on stderr and can be asserted on.
fn run_unescape_command(args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("unescape").unwrap();
    cmd.env("RUST_LOG", "debug");
    cmd.args(args);
    cmd.assert()
}

/// Helper to create a temp file seeded with the given bytes.
fn fixture(content: &[u8]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content)?;
    Ok(file)
}

#[test]
fn test_expands_escapes_in_place() -> Result<()> {
    let file = fixture(b"a\\tb\\nc")?;
    let path = file.path().to_str().unwrap().to_string();

    run_unescape_command(&[&path])
        .success()
        .stderr(predicate::str::contains("Starting unescape operation"))
        .stderr(predicate::str::contains(
            "1 tab escape(s) and 1 newline escape(s) expanded",
        ));

    assert_eq!(fs::read_to_string(file.path())?, "a\tb\nc");
    Ok(())
}

#[test]
fn test_content_without_escapes_is_left_byte_identical() -> Result<()> {
    let content = "already expanded:\ttab and\nnewline stay as they are\n";
    let file = fixture(content.as_bytes())?;
    let path = file.path().to_str().unwrap().to_string();

    run_unescape_command(&[&path]).success();

    assert_eq!(fs::read_to_string(file.path())?, content);
    Ok(())
}

#[test]
fn test_escaped_backslash_edge_case() -> Result<()> {
    // Input `\\t` (backslash, backslash, t): the literal left-to-right
    // scan matches `\t` at the second/third character, yielding `\<TAB>`.
    let file = fixture(b"\\\\t")?;
    let path = file.path().to_str().unwrap().to_string();

    run_unescape_command(&[&path]).success();

    assert_eq!(fs::read_to_string(file.path())?, "\\\t");
    Ok(())
}

#[test]
fn test_empty_file_stays_empty() -> Result<()> {
    let file = fixture(b"")?;
    let path = file.path().to_str().unwrap().to_string();

    run_unescape_command(&[&path]).success();

    assert_eq!(fs::read_to_string(file.path())?, "");
    Ok(())
}

#[test]
fn test_second_run_is_a_no_op() -> Result<()> {
    let file = fixture(b"one\\ttwo\\nthree")?;
    let path = file.path().to_str().unwrap().to_string();

    run_unescape_command(&[&path]).success();
    let after_first = fs::read_to_string(file.path())?;
    assert_eq!(after_first, "one\ttwo\nthree");

    run_unescape_command(&[&path])
        .success()
        .stderr(predicate::str::contains(
            "0 tab escape(s) and 0 newline escape(s) expanded",
        ));
    assert_eq!(fs::read_to_string(file.path())?, after_first);
    Ok(())
}

#[test]
fn test_missing_path_argument_is_a_usage_error() {
    run_unescape_command(&[])
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_nonexistent_path_fails_without_creating_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_such_file.txt");
    let path_str = path.to_str().unwrap().to_string();

    run_unescape_command(&[&path_str])
        .failure()
        .stderr(predicate::str::contains("Failed to unescape file"));

    assert!(!path.exists());
}

#[test]
fn test_directory_path_fails() {
    let dir = tempdir().unwrap();
    let path_str = dir.path().to_str().unwrap().to_string();

    run_unescape_command(&[&path_str])
        .failure()
        .stderr(predicate::str::contains("Failed to unescape file"));
}

#[test]
fn test_invalid_utf8_fails_and_leaves_file_unchanged() -> Result<()> {
    let bytes: &[u8] = b"prefix \xff\xfe suffix";
    let file = fixture(bytes)?;
    let path = file.path().to_str().unwrap().to_string();

    run_unescape_command(&[&path])
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));

    assert_eq!(fs::read(file.path())?, bytes);
    Ok(())
}

#[test]
fn test_quiet_flag_suppresses_tool_logging() -> Result<()> {
    let file = fixture(b"a\\tb")?;
    let path = file.path().to_str().unwrap().to_string();

    run_unescape_command(&["--quiet", &path])
        .success()
        .stderr(predicate::str::contains("Starting unescape operation").not());

    assert_eq!(fs::read_to_string(file.path())?, "a\tb");
    Ok(())
}
