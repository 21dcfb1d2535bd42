// unescape-core/tests/fileio_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

use unescape_core::{unescape_file_in_place, UnescapeError};

#[test_log::test]
fn test_in_place_run_expands_escapes() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"a\\tb\\nc")?;

    let report = unescape_file_in_place(file.path())?;

    assert_eq!(std::fs::read_to_string(file.path())?, "a\tb\nc");
    assert_eq!(report.bytes_read, 7);
    assert_eq!(report.bytes_written, 5);
    assert_eq!(report.tabs_expanded, 1);
    assert_eq!(report.newlines_expanded, 1);
    Ok(())
}

#[test]
fn test_content_without_escapes_round_trips() -> Result<()> {
    let content = "three plain lines\nwith a real tab\there\n";
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;

    let report = unescape_file_in_place(file.path())?;

    assert_eq!(std::fs::read_to_string(file.path())?, content);
    assert_eq!(report.tabs_expanded, 0);
    assert_eq!(report.newlines_expanded, 0);
    assert_eq!(report.bytes_read, report.bytes_written);
    Ok(())
}

#[test]
fn test_empty_file_stays_empty() -> Result<()> {
    let file = NamedTempFile::new()?;

    let report = unescape_file_in_place(file.path())?;

    assert_eq!(std::fs::read_to_string(file.path())?, "");
    assert_eq!(report.bytes_written, 0);
    Ok(())
}

#[test_log::test]
fn test_second_run_is_a_no_op() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"x\\ty\\nz")?;

    unescape_file_in_place(file.path())?;
    let after_first = std::fs::read_to_string(file.path())?;

    let report = unescape_file_in_place(file.path())?;
    assert_eq!(std::fs::read_to_string(file.path())?, after_first);
    assert_eq!(report.tabs_expanded, 0);
    assert_eq!(report.newlines_expanded, 0);
    Ok(())
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does_not_exist.txt");

    let err = unescape_file_in_place(&path).unwrap_err();
    assert!(matches!(err, UnescapeError::Io(_)));
    // The failed run must not create the file.
    assert!(!path.exists());
}

#[test]
fn test_directory_path_is_an_io_error() {
    let dir = tempdir().unwrap();

    let err = unescape_file_in_place(dir.path()).unwrap_err();
    assert!(matches!(err, UnescapeError::Io(_)));
}

#[test]
fn test_invalid_utf8_is_a_decode_error_and_leaves_file_unchanged() -> Result<()> {
    let bytes: &[u8] = b"ok so far \xff\xfe not utf-8";
    let mut file = NamedTempFile::new()?;
    file.write_all(bytes)?;

    let err = unescape_file_in_place(file.path()).unwrap_err();
    assert!(matches!(err, UnescapeError::Decode(_)));
    assert_eq!(std::fs::read(file.path())?, bytes);
    Ok(())
}

#[test]
fn test_escaped_backslash_edge_case_on_disk() -> Result<()> {
    // `\\t` holds one literal `\t` match starting at its second character.
    let mut file = NamedTempFile::new()?;
    file.write_all(b"\\\\t")?;

    unescape_file_in_place(file.path())?;

    assert_eq!(std::fs::read_to_string(file.path())?, "\\\t");
    Ok(())
}
