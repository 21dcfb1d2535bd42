// unescape-core/src/lib.rs
//! # Unescape Core Library
//!
//! `unescape-core` provides the platform-independent logic for expanding
//! literal escape sequences back into control characters. It defines the
//! two replacement passes (`\t` → TAB, `\n` → LF), the whole-file read and
//! truncating-write helpers, and the one-shot in-place operation the CLI
//! builds on.
//!
//! The transformation is deliberately narrow: the needles are the exact
//! two-character sequences backslash+`t` and backslash+`n` as they appear
//! when real whitespace has been textually escaped for display or storage.
//! No other escape forms are recognized, and replacement is literal
//! substring substitution, never pattern matching.
//!
//! ## Modules
//!
//! * `engine`: the sequential literal replacement passes.
//! * `fileio`: scoped read-fully / write-fully helpers.
//! * `errors`: the structured [`UnescapeError`] type.
//!
//! ## Usage Example
//!
//! ```no_run
//! use std::path::Path;
//! use unescape_core::unescape_file_in_place;
//!
//! fn main() -> Result<(), unescape_core::UnescapeError> {
//!     let report = unescape_file_in_place(Path::new("listing.ws"))?;
//!     println!(
//!         "expanded {} tabs and {} newlines",
//!         report.tabs_expanded, report.newlines_expanded
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`UnescapeError`]: `Io` for failures at
//! the filesystem boundary and `Decode` when the file is not valid UTF-8.
//! Nothing is retried or recovered locally; a failure before the write
//! step leaves the original file untouched.
//!
//! License: MIT OR Apache-2.0

pub mod engine;
pub mod errors;
pub mod fileio;

/// Re-exports the replacement passes and their needle constants.
pub use engine::{unescape, unescape_newlines, unescape_tabs, ESCAPED_NEWLINE, ESCAPED_TAB};

/// Re-exports the custom error type for clear error reporting.
pub use errors::UnescapeError;

/// Re-exports the whole-file I/O helpers.
pub use fileio::{read_file, write_file};

use std::path::Path;

use log::debug;

/// What a single in-place run did, for logging and diagnostics.
///
/// The on-disk side effect is the real result; this report only describes
/// it and never influences the transformation itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnescapeReport {
    /// Size of the file content before transformation, in bytes.
    pub bytes_read: usize,
    /// Size of the content written back, in bytes.
    pub bytes_written: usize,
    /// Number of literal `\t` sequences expanded by the first pass.
    pub tabs_expanded: usize,
    /// Number of literal `\n` sequences expanded by the second pass.
    pub newlines_expanded: usize,
}

/// Reads the file at `path` fully into memory, runs the two replacement
/// passes in their fixed order, and writes the result back to the same
/// path, truncating the previous content.
///
/// The read handle is released before the transformation and the write
/// handle is only acquired once the transformed buffer is complete, so a
/// read or decode failure never touches the file, and a write-open failure
/// (e.g. the file became read-only) leaves the original content in place.
pub fn unescape_file_in_place(path: &Path) -> Result<UnescapeReport, UnescapeError> {
    let content = fileio::read_file(path)?;

    let tabs_expanded = content.matches(ESCAPED_TAB).count();
    let after_tabs = engine::unescape_tabs(&content);
    let newlines_expanded = after_tabs.matches(ESCAPED_NEWLINE).count();
    let output = engine::unescape_newlines(&after_tabs);

    debug!(
        "Transformed {}: {} tab escape(s), {} newline escape(s)",
        path.display(),
        tabs_expanded,
        newlines_expanded
    );

    fileio::write_file(path, &output)?;

    Ok(UnescapeReport {
        bytes_read: content.len(),
        bytes_written: output.len(),
        tabs_expanded,
        newlines_expanded,
    })
}
