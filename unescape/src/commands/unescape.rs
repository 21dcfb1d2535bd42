//! Unescape command implementation for rewriting a file in place.

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;

use unescape_core::unescape_file_in_place;

/// The main operation runner for the unescape CLI.
///
/// Delegates to the core read → transform → write sequence and logs what
/// it did. Any failure carries the offending path as context and aborts
/// the whole run; there is no partial-success state to report.
pub fn run_unescape(path: &Path) -> Result<()> {
    info!("Starting unescape operation on {}.", path.display());

    let report = unescape_file_in_place(path)
        .with_context(|| format!("Failed to unescape file: {}", path.display()))?;

    debug!(
        "Content transformed. Original length: {}, transformed length: {}",
        report.bytes_read, report.bytes_written
    );
    info!(
        "Unescape operation completed: {} tab escape(s) and {} newline escape(s) expanded.",
        report.tabs_expanded, report.newlines_expanded
    );

    Ok(())
}
