// unescape-core/src/engine.rs

//! `engine.rs`
//! The literal replacement passes that turn escaped whitespace back into
//! control characters.
//!
//! Replacement is textual, not pattern-based: the needles are the exact
//! two-character sequences backslash+`t` and backslash+`n`, scanned
//! left-to-right and non-overlapping (`str::replace` semantics). A regex
//! engine is deliberately not used here, since its handling of adjacent
//! escape markers could diverge from plain substring replacement.
//!
//! License: MIT OR Apache-2.0

/// The two-character source form of an escaped tab: `\` followed by `t`.
pub const ESCAPED_TAB: &str = "\\t";

/// The two-character source form of an escaped newline: `\` followed by `n`.
pub const ESCAPED_NEWLINE: &str = "\\n";

/// Replaces every non-overlapping literal occurrence of `\t` (backslash +
/// letter t) with a single TAB character (0x09).
pub fn unescape_tabs(input: &str) -> String {
    input.replace(ESCAPED_TAB, "\t")
}

/// Replaces every non-overlapping literal occurrence of `\n` (backslash +
/// letter n) with a single LF character (0x0A).
pub fn unescape_newlines(input: &str) -> String {
    input.replace(ESCAPED_NEWLINE, "\n")
}

/// Runs both passes in their fixed order: tabs first, then newlines.
///
/// The second pass scans the buffer produced by the first. For this pair
/// the order is observationally immaterial (expanding an escape cannot
/// create a new escape), but the two discrete sequential passes are part
/// of the contract and are kept as such.
pub fn unescape(input: &str) -> String {
    unescape_newlines(&unescape_tabs(input))
}
