// unescape/src/cli.rs
//! This file defines the command-line interface (CLI) for the unescape
//! application: one required positional path plus logging controls.
//!
//! License: MIT OR Apache-2.0

use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "unescape",
    version = env!("CARGO_PKG_VERSION"),
    about = "Expand literal \\t and \\n escape sequences in a file, in place",
    long_about = "Unescape is a command-line utility that rewrites a text file in place, replacing every literal two-character escape sequence \\t (backslash + t) with a real tab character and every literal \\n (backslash + n) with a real newline character. The file is read fully, transformed in memory, and written back over the original content. No backup is kept.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Path to the file to transform in place.
    #[arg(value_name = "PATH", help = "Filesystem path to the file to transform in place.")]
    pub path: PathBuf,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for 'unescape' crates to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,
}
