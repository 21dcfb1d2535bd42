// unescape/src/lib.rs
//! # Unescape CLI Application
//!
//! This crate provides the command-line shell around `unescape-core`:
//! argument parsing, logger setup, and the operation runner that rewrites
//! the named file in place.
//!
//! License: MIT OR Apache-2.0

pub mod cli;
pub mod commands;
pub mod logger;

// Re-export the operation runner for programmatic use.
pub use commands::unescape::run_unescape;
