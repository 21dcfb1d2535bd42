// whitespace/src/lib.rs
//! # Whitespace CLI Application
//!
//! This crate provides the command-line shell around `whitespace-core`:
//! argument parsing, logger setup, and the operation runner that loads
//! and executes a program file.
//!
//! License: MIT OR Apache-2.0

pub mod cli;
pub mod commands;
pub mod logger;

// Re-export the operation runner for programmatic use.
pub use commands::interpret::run_interpret;
