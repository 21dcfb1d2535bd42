// whitespace-core/src/lib.rs
//! # Whitespace Core Library
//!
//! `whitespace-core` provides the platform-independent logic for running
//! whitespace programs: tokenizing source text into the three meaningful
//! symbols (space, tab, linefeed), parsing the token stream into an
//! instruction list with resolved mark addresses, and executing that list
//! on a stack machine with a sparse heap and label-based flow control.
//!
//! Program input is an in-memory string (one line per numeric read, one
//! character per character read) and program output is returned as a
//! string; the library performs no I/O of its own.
//!
//! ## Modules
//!
//! * `tokenizer`: source text to [`Token`] stream; everything that is not
//!   a space, tab, or linefeed is a comment.
//! * `parser`: token stream to [`Program`] (instructions + mark table).
//! * `interpreter`: [`Program`] execution against an input buffer.
//! * `errors`: the [`CompileError`] / [`RuntimeError`] split and the
//!   umbrella [`WhitespaceError`].
//!
//! ## Usage Example
//!
//! ```
//! use whitespace_core::run_program;
//!
//! // push 2, push 3, add, print the number, exit
//! let source = "   \t \n   \t\t\n\t   \t\n \t\n\n\n";
//! let output = run_program(source, "").unwrap();
//! assert_eq!(output, "5");
//! ```
//!
//! ## Error Handling
//!
//! Parsing failures ([`CompileError`]) and execution failures
//! ([`RuntimeError`]) are distinct types; [`run_program`] folds both into
//! [`WhitespaceError`]. Nothing is retried or recovered locally, and
//! output produced before a runtime fault is discarded.
//!
//! License: MIT OR Apache-2.0

pub mod errors;
pub mod interpreter;
pub mod parser;
pub mod tokenizer;

/// Re-exports the error types for clear error reporting.
pub use errors::{CompileError, RuntimeError, WhitespaceError};

/// Re-exports the execution entry point and machine state.
pub use interpreter::{interpret, Context};

/// Re-exports the parsed-program types and the parser entry point.
pub use parser::{parse_tokens, Instruction, Label, Program};

/// Re-exports the token types and the tokenizer entry point.
pub use tokenizer::{tokenize, Token, TokenKind};

use log::debug;

/// Tokenizes, parses, and runs `source` in one call, feeding the program
/// `input` and returning everything it printed.
pub fn run_program(source: &str, input: &str) -> Result<String, WhitespaceError> {
    let tokens = tokenizer::tokenize(source);
    debug!("tokenized {} byte(s) into {} token(s)", source.len(), tokens.len());

    let program = parser::parse_tokens(&tokens)?;
    debug!(
        "parsed {} instruction(s), {} label(s)",
        program.instructions.len(),
        program.labels.len()
    );

    Ok(interpreter::interpret(&program, input)?)
}
