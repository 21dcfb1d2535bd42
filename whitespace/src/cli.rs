// whitespace/src/cli.rs
//! This file defines the command-line interface (CLI) for the whitespace
//! interpreter: the program file, optional input lines, and logging
//! controls.
//!
//! License: MIT OR Apache-2.0

use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "whitespace",
    version = env!("CARGO_PKG_VERSION"),
    about = "Run a whitespace program",
    long_about = "Whitespace is a command-line interpreter for the whitespace esoteric language. It reads a program file in which only space, tab, and linefeed characters are meaningful, executes it on a stack machine, and prints the program's output to stdout. Any further arguments become the program's input, one line each.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Path to the program file to run.
    #[arg(value_name = "FILE", help = "Filesystem path to the whitespace program to run.")]
    pub path: PathBuf,

    /// Input fed to the running program, one line per argument.
    #[arg(value_name = "INPUT", help = "Input lines fed to the running program, in order.")]
    pub input: Vec<String>,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for 'whitespace' crates to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,
}
