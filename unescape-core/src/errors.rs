//! errors.rs - Custom error types for the unescape-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// This enum represents all possible error types in the `unescape-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum UnescapeError {
    /// A filesystem-boundary failure: the target could not be opened, read,
    /// or written. Carries the underlying reason and is never retried.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file's bytes are not valid UTF-8, so there is no text to
    /// transform. Surfaced as-is, never retried.
    #[error("file is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}
