// unescape/src/main.rs
//! Unescape entry point.
//!
//! Parses the CLI, initializes logging, and runs the in-place
//! escape-expansion on the named file.

use anyhow::Result;
use clap::Parser;

use unescape::cli::Cli;
use unescape::logger;
use unescape::run_unescape;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    run_unescape(&args.path)
}
