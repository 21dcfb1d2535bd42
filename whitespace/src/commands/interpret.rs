//! Interpret command implementation: load a program file, run it, and
//! print its output.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;

use whitespace_core::run_program;

/// The main operation runner for the whitespace CLI.
///
/// Each element of `input_lines` is handed to the program as one line of
/// input. The program's output goes to stdout; compile and runtime
/// failures carry the offending path as context and abort the run.
pub fn run_interpret(path: &Path, input_lines: &[String]) -> Result<()> {
    info!("Running whitespace program {}.", path.display());

    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read program file: {}", path.display()))?;

    let mut input = String::new();
    for line in input_lines {
        input.push_str(line);
        input.push('\n');
    }
    debug!(
        "Program is {} byte(s), input is {} byte(s)",
        source.len(),
        input.len()
    );

    let output = run_program(&source, &input)
        .with_context(|| format!("Program {} failed", path.display()))?;

    println!("{}", output);

    info!("Whitespace program completed.");
    Ok(())
}
