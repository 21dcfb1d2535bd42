//! errors.rs - Custom error types for the whitespace-core library.
//!
//! Failures split into two families, mirroring the two phases of a run:
//! `CompileError` for anything the parser rejects, `RuntimeError` for
//! anything the executing program does wrong. `WhitespaceError` is the
//! umbrella the one-shot entry point returns.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

use crate::parser::Label;
use crate::tokenizer::Token;

/// Errors raised while parsing the token stream into instructions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CompileError {
    #[error("unexpected {0} token")]
    UnexpectedToken(Token),

    #[error("malformed number at {0}: {1}")]
    NumberFormat(Token, String),

    #[error("label {0} already exists")]
    DuplicateLabel(Label),

    #[error("unexpected end of program at token {0}")]
    UnexpectedEof(usize),
}

/// Errors raised while executing a parsed program.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RuntimeError {
    #[error("'{0}' is not a valid number")]
    NumberFormat(String),

    #[error("division by zero")]
    DivideByZero,

    #[error("value stack is empty")]
    ValueStackEmpty,

    #[error("call stack is empty")]
    CallStackEmpty,

    #[error("expected the value stack to hold at least {expected} values, but it holds {actual}")]
    ValueStackTooSmall { expected: usize, actual: usize },

    #[error("label {0} doesn't exist")]
    UndefinedLabel(Label),

    #[error("heap address {0} is undefined")]
    UndefinedHeapAccess(i64),

    #[error("value {0} is not a printable character")]
    InvalidCharacter(i64),

    #[error("instruction pointer [{0}] ran past the last instruction")]
    MissingExit(usize),

    #[error("sudden end of input")]
    EndOfInput,
}

/// This enum represents all possible error types in the `whitespace-core`
/// library, one variant per phase.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WhitespaceError {
    #[error("compilation failed: {0}")]
    Compile(#[from] CompileError),

    #[error("runtime failure: {0}")]
    Runtime(#[from] RuntimeError),
}
