// unescape-core/src/fileio.rs

//! `fileio.rs`
//! Whole-file read and truncating write helpers.
//!
//! Each helper acquires its file handle inside the function scope, so the
//! handle is released on every exit path, including early failure. Reads
//! go through raw bytes first so that a UTF-8 decoding failure is reported
//! as [`UnescapeError::Decode`] rather than an I/O error.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::debug;

use crate::errors::UnescapeError;

/// Opens the file at `path` for reading, reads its entire content, and
/// decodes it as UTF-8. The read handle is closed before decoding begins.
pub fn read_file(path: &Path) -> Result<String, UnescapeError> {
    let mut bytes = Vec::new();
    let mut file = File::open(path)?;
    file.read_to_end(&mut bytes)?;
    drop(file);

    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(String::from_utf8(bytes)?)
}

/// Opens the file at `path` for writing, truncating any existing content,
/// and writes `content` in full.
pub fn write_file(path: &Path, content: &str) -> Result<(), UnescapeError> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;

    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
