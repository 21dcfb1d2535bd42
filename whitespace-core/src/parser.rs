// whitespace-core/src/parser.rs

//! `parser.rs`
//! Recursive-descent parser from the token stream to instructions.
//!
//! The grammar is a prefix code over the three symbols: the first token
//! selects the instruction family (SPACE stack, TAB arithmetic/heap/IO,
//! NEWLINE flow control), subsequent tokens select the operation, and
//! number and label arguments follow where the operation takes one.
//! Numbers are sign-then-binary (SPACE positive, TAB negative, SPACE=0
//! and TAB=1 digits) terminated by NEWLINE; labels are any run of
//! SPACE/TAB terminated by NEWLINE.
//!
//! Parsing also records the address of every `Mark`, so jumps can be
//! resolved at run time, and guarantees the instruction list ends with a
//! terminator: a program that does not finish with an explicit `Exit`
//! gets an `ImplicitExit` appended, which faults if execution reaches it.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashMap;
use std::fmt;

use log::trace;

use crate::errors::CompileError;
use crate::tokenizer::{Token, TokenKind};

/// A jump target: the run of SPACE/TAB tokens naming it, rendered as a
/// string of `S`/`T` letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(String);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One executable instruction, argument included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Push a literal number.
    Push(i64),
    /// Duplicate the n-th value from the top (0 is the top itself).
    Copy(i64),
    /// Discard n values below the top, keeping the top.
    Slide(i64),
    /// Duplicate the top value.
    Dup,
    /// Swap the two topmost values.
    Swap,
    /// Discard the top value.
    Discard,

    Add,
    Sub,
    Mul,
    Div,
    Mod,

    /// Pop value then address; store value at address in the heap.
    Store,
    /// Pop an address; push the heap value stored there.
    Retrieve,

    /// Pop a value and append it to the output as a character.
    PrintChar,
    /// Pop a value and append its decimal form to the output.
    PrintNum,
    /// Read one character of input, store its code at a popped address.
    ReadChar,
    /// Read one line of input as a number, store it at a popped address.
    ReadNum,

    /// Define a jump target. A no-op when executed.
    Mark(Label),
    /// Jump to a label, remembering the return address.
    Call(Label),
    Jump(Label),
    /// Pop a value; jump if it is zero.
    JumpZero(Label),
    /// Pop a value; jump if it is negative.
    JumpNegative(Label),
    /// Jump back to the instruction after the most recent `Call`.
    Return,

    /// End the program cleanly.
    Exit,
    /// Appended by the parser when the program has no trailing `Exit`;
    /// executing it is a runtime fault.
    ImplicitExit,
}

/// A parsed program: the instruction list plus the address of every mark.
#[derive(Debug, Clone)]
pub struct Program {
    pub instructions: Vec<Instruction>,
    pub labels: HashMap<Label, usize>,
}

/// Read position over the token stream. Every consuming read reports a
/// truncated program as `UnexpectedEof` carrying the token index.
struct Cursor<'a> {
    tokens: &'a [Token],
    index: usize,
}

impl<'a> Cursor<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, index: 0 }
    }

    fn is_done(&self) -> bool {
        self.index >= self.tokens.len()
    }

    fn next(&mut self) -> Result<Token, CompileError> {
        let token = self
            .tokens
            .get(self.index)
            .copied()
            .ok_or(CompileError::UnexpectedEof(self.index))?;
        self.index += 1;
        Ok(token)
    }
}

/// Parses the whole token stream into a [`Program`].
pub fn parse_tokens(tokens: &[Token]) -> Result<Program, CompileError> {
    let mut cursor = Cursor::new(tokens);
    let mut instructions = Vec::new();
    let mut labels: HashMap<Label, usize> = HashMap::new();

    while !cursor.is_done() {
        let instruction = parse_instruction(&mut cursor)?;
        if let Instruction::Mark(label) = &instruction {
            if labels.contains_key(label) {
                return Err(CompileError::DuplicateLabel(label.clone()));
            }
            labels.insert(label.clone(), instructions.len());
        }
        trace!("parsed {:?}", instruction);
        instructions.push(instruction);
    }

    if !matches!(instructions.last(), Some(Instruction::Exit)) {
        instructions.push(Instruction::ImplicitExit);
    }

    Ok(Program { instructions, labels })
}

fn parse_instruction(cursor: &mut Cursor) -> Result<Instruction, CompileError> {
    match cursor.next()?.kind {
        TokenKind::Space => parse_stack(cursor),
        TokenKind::Tab => parse_middle(cursor),
        TokenKind::Newline => parse_flow(cursor),
    }
}

fn parse_stack(cursor: &mut Cursor) -> Result<Instruction, CompileError> {
    match cursor.next()?.kind {
        TokenKind::Space => Ok(Instruction::Push(parse_number(cursor)?)),
        TokenKind::Tab => {
            let selector = cursor.next()?;
            match selector.kind {
                TokenKind::Space => {
                    let start = cursor.index;
                    let n = parse_number(cursor)?;
                    if n < 0 {
                        return Err(CompileError::NumberFormat(
                            cursor.tokens[start],
                            "copy depth must not be negative".to_string(),
                        ));
                    }
                    Ok(Instruction::Copy(n))
                }
                TokenKind::Newline => Ok(Instruction::Slide(parse_number(cursor)?)),
                TokenKind::Tab => Err(CompileError::UnexpectedToken(selector)),
            }
        }
        TokenKind::Newline => match cursor.next()?.kind {
            TokenKind::Space => Ok(Instruction::Dup),
            TokenKind::Tab => Ok(Instruction::Swap),
            TokenKind::Newline => Ok(Instruction::Discard),
        },
    }
}

fn parse_middle(cursor: &mut Cursor) -> Result<Instruction, CompileError> {
    let selector = cursor.next()?;
    match selector.kind {
        TokenKind::Space => parse_arithmetic(cursor),
        TokenKind::Tab => parse_heap(cursor),
        TokenKind::Newline => parse_io(cursor),
    }
}

fn parse_arithmetic(cursor: &mut Cursor) -> Result<Instruction, CompileError> {
    let selector = cursor.next()?;
    match selector.kind {
        TokenKind::Space => match cursor.next()?.kind {
            TokenKind::Space => Ok(Instruction::Add),
            TokenKind::Tab => Ok(Instruction::Sub),
            TokenKind::Newline => Ok(Instruction::Mul),
        },
        TokenKind::Tab => {
            let inner = cursor.next()?;
            match inner.kind {
                TokenKind::Space => Ok(Instruction::Div),
                TokenKind::Tab => Ok(Instruction::Mod),
                TokenKind::Newline => Err(CompileError::UnexpectedToken(inner)),
            }
        }
        TokenKind::Newline => Err(CompileError::UnexpectedToken(selector)),
    }
}

fn parse_heap(cursor: &mut Cursor) -> Result<Instruction, CompileError> {
    let selector = cursor.next()?;
    match selector.kind {
        TokenKind::Space => Ok(Instruction::Store),
        TokenKind::Tab => Ok(Instruction::Retrieve),
        TokenKind::Newline => Err(CompileError::UnexpectedToken(selector)),
    }
}

fn parse_io(cursor: &mut Cursor) -> Result<Instruction, CompileError> {
    let selector = cursor.next()?;
    match selector.kind {
        TokenKind::Space => {
            let inner = cursor.next()?;
            match inner.kind {
                TokenKind::Space => Ok(Instruction::PrintChar),
                TokenKind::Tab => Ok(Instruction::PrintNum),
                TokenKind::Newline => Err(CompileError::UnexpectedToken(inner)),
            }
        }
        TokenKind::Tab => {
            let inner = cursor.next()?;
            match inner.kind {
                TokenKind::Space => Ok(Instruction::ReadChar),
                TokenKind::Tab => Ok(Instruction::ReadNum),
                TokenKind::Newline => Err(CompileError::UnexpectedToken(inner)),
            }
        }
        TokenKind::Newline => Err(CompileError::UnexpectedToken(selector)),
    }
}

fn parse_flow(cursor: &mut Cursor) -> Result<Instruction, CompileError> {
    match cursor.next()?.kind {
        TokenKind::Space => {
            let selector = cursor.next()?;
            let label = parse_label(cursor)?;
            match selector.kind {
                TokenKind::Space => Ok(Instruction::Mark(label)),
                TokenKind::Tab => Ok(Instruction::Call(label)),
                TokenKind::Newline => Ok(Instruction::Jump(label)),
            }
        }
        TokenKind::Tab => match cursor.next()?.kind {
            TokenKind::Space => Ok(Instruction::JumpZero(parse_label(cursor)?)),
            TokenKind::Tab => Ok(Instruction::JumpNegative(parse_label(cursor)?)),
            TokenKind::Newline => Ok(Instruction::Return),
        },
        TokenKind::Newline => {
            let terminator = cursor.next()?;
            match terminator.kind {
                TokenKind::Newline => Ok(Instruction::Exit),
                TokenKind::Space | TokenKind::Tab => {
                    Err(CompileError::UnexpectedToken(terminator))
                }
            }
        }
    }
}

/// Sign-then-binary number literal, NEWLINE-terminated. A literal with no
/// digit tokens is zero. Bits accumulate with wrapping shifts, matching
/// two's-complement overflow.
fn parse_number(cursor: &mut Cursor) -> Result<i64, CompileError> {
    let sign_token = cursor.next()?;
    let is_negative = match sign_token.kind {
        TokenKind::Space => false,
        TokenKind::Tab => true,
        TokenKind::Newline => {
            return Err(CompileError::NumberFormat(
                sign_token,
                "number can't start with a NEWLINE".to_string(),
            ))
        }
    };

    let mut result: i64 = 0;
    loop {
        match cursor.next()?.kind {
            TokenKind::Space => result = result.wrapping_shl(1),
            TokenKind::Tab => result = result.wrapping_shl(1) | 1,
            TokenKind::Newline => break,
        }
    }

    Ok(if is_negative { -result } else { result })
}

/// Any run of SPACE/TAB tokens, NEWLINE-terminated (terminator consumed).
fn parse_label(cursor: &mut Cursor) -> Result<Label, CompileError> {
    let mut name = String::new();
    loop {
        let token = cursor.next()?;
        match token.kind {
            TokenKind::Newline => break,
            kind => name.push(kind.letter()),
        }
    }
    Ok(Label(name))
}
