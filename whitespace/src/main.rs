// whitespace/src/main.rs
//! Whitespace entry point.
//!
//! Parses the CLI, initializes logging, and runs the named program file
//! with any remaining arguments as its input lines.

use anyhow::Result;
use clap::Parser;

use whitespace::cli::Cli;
use whitespace::logger;
use whitespace::run_interpret;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    run_interpret(&args.path, &args.input)
}
