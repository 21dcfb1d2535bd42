// unescape/src/commands/mod.rs
//! Command implementations for the unescape CLI.

pub mod unescape;
