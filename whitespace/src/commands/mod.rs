// whitespace/src/commands/mod.rs
//! Command implementations for the whitespace CLI.

pub mod interpret;
