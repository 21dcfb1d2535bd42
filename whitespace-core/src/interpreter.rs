// whitespace-core/src/interpreter.rs

//! `interpreter.rs`
//! Executes a parsed [`Program`] against an in-memory input buffer and
//! collects the program's output into a string.
//!
//! The machine state is a value stack, a call stack of return addresses,
//! and a sparse heap keyed by signed addresses. Division and modulo use
//! floor semantics, so the remainder takes the sign of the divisor.
//! Numeric input accepts decimal, `0x` hex, `0b` binary, and `0`-prefixed
//! octal, one line per read.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashMap;

use log::{debug, trace};

use crate::errors::RuntimeError;
use crate::parser::{Instruction, Label, Program};

/// The mutable machine state of a running program.
#[derive(Debug, Default)]
pub struct Context {
    value_stack: Vec<i64>,
    call_stack: Vec<usize>,
    heap: HashMap<i64, i64>,
}

impl Context {
    fn require_stack(&self, size: usize) -> Result<(), RuntimeError> {
        if self.value_stack.len() < size {
            return Err(RuntimeError::ValueStackTooSmall {
                expected: size,
                actual: self.value_stack.len(),
            });
        }
        Ok(())
    }

    fn push(&mut self, value: i64) {
        self.value_stack.push(value);
    }

    fn pop(&mut self) -> Result<i64, RuntimeError> {
        self.value_stack.pop().ok_or(RuntimeError::ValueStackEmpty)
    }

    /// Duplicates the value `depth` entries below the top.
    fn copy(&mut self, depth: usize) -> Result<(), RuntimeError> {
        self.require_stack(depth + 1)?;
        let value = self.value_stack[self.value_stack.len() - 1 - depth];
        self.value_stack.push(value);
        Ok(())
    }

    /// Discards `n` values below the top, keeping the top. A negative `n`
    /// discards everything below the top. A no-op on an empty stack.
    fn slide(&mut self, n: i64) {
        if let Some(top) = self.value_stack.pop() {
            let keep = if n < 0 {
                0
            } else {
                self.value_stack.len().saturating_sub(n as usize)
            };
            self.value_stack.truncate(keep);
            self.value_stack.push(top);
        }
    }

    fn swap(&mut self) -> Result<(), RuntimeError> {
        self.require_stack(2)?;
        let len = self.value_stack.len();
        self.value_stack.swap(len - 1, len - 2);
        Ok(())
    }

    /// Pops value then address and stores value at address.
    fn store(&mut self) -> Result<(), RuntimeError> {
        self.require_stack(2)?;
        let value = self.pop()?;
        let address = self.pop()?;
        self.heap.insert(address, value);
        Ok(())
    }

    /// Pops an address and pushes the heap value stored there.
    fn retrieve(&mut self) -> Result<(), RuntimeError> {
        let address = self.pop()?;
        let value = *self
            .heap
            .get(&address)
            .ok_or(RuntimeError::UndefinedHeapAccess(address))?;
        self.value_stack.push(value);
        Ok(())
    }

    /// Pops an address and stores an input value there.
    fn store_input(&mut self, value: i64) -> Result<(), RuntimeError> {
        let address = self.pop()?;
        self.heap.insert(address, value);
        Ok(())
    }

    fn call(&mut self, return_address: usize) {
        self.call_stack.push(return_address);
    }

    fn ret(&mut self) -> Result<usize, RuntimeError> {
        self.call_stack.pop().ok_or(RuntimeError::CallStackEmpty)
    }
}

/// Read cursor over the program's input buffer.
struct Input<'a> {
    remaining: &'a str,
}

impl<'a> Input<'a> {
    fn new(input: &'a str) -> Self {
        Input { remaining: input }
    }

    fn read_char(&mut self) -> Result<char, RuntimeError> {
        let mut chars = self.remaining.chars();
        let c = chars.next().ok_or(RuntimeError::EndOfInput)?;
        self.remaining = chars.as_str();
        Ok(c)
    }

    /// One line per numeric read; an empty line counts as end of input.
    fn read_number(&mut self) -> Result<i64, RuntimeError> {
        let line = match self.remaining.find('\n') {
            Some(at) => {
                let line = &self.remaining[..at];
                self.remaining = &self.remaining[at + 1..];
                line
            }
            None => {
                let line = self.remaining;
                self.remaining = "";
                line
            }
        };
        if line.is_empty() {
            return Err(RuntimeError::EndOfInput);
        }
        parse_input_number(line)
    }
}

/// Decimal by default; a leading `0` selects octal, `0x` hex, `0b` binary.
fn parse_input_number(text: &str) -> Result<i64, RuntimeError> {
    let number_format = |_| RuntimeError::NumberFormat(text.to_string());

    if let Some(rest) = text.strip_prefix("0x") {
        return i64::from_str_radix(rest, 16).map_err(number_format);
    }
    if let Some(rest) = text.strip_prefix("0b") {
        return i64::from_str_radix(rest, 2).map_err(number_format);
    }
    if let Some(rest) = text.strip_prefix('0') {
        if rest.is_empty() {
            return Ok(0);
        }
        return i64::from_str_radix(rest, 8).map_err(number_format);
    }
    text.parse::<i64>().map_err(number_format)
}

/// Floor division, matching the sign convention of `Mod`.
fn floor_div(lhs: i64, rhs: i64) -> i64 {
    let quotient = lhs.wrapping_div(rhs);
    let remainder = lhs.wrapping_rem(rhs);
    if remainder != 0 && (remainder < 0) != (rhs < 0) {
        quotient - 1
    } else {
        quotient
    }
}

fn floor_mod(lhs: i64, rhs: i64) -> i64 {
    lhs.wrapping_sub(rhs.wrapping_mul(floor_div(lhs, rhs)))
}

fn as_char(value: i64) -> Result<char, RuntimeError> {
    u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .ok_or(RuntimeError::InvalidCharacter(value))
}

fn lookup(program: &Program, label: &Label) -> Result<usize, RuntimeError> {
    program
        .labels
        .get(label)
        .copied()
        .ok_or_else(|| RuntimeError::UndefinedLabel(label.clone()))
}

/// Runs `program` to completion and returns everything it printed.
///
/// Execution starts at instruction 0 and ends at an `Exit`. Reaching the
/// parser's `ImplicitExit` terminator is a fault, as is any stack, heap,
/// label, or input violation along the way; the output produced so far is
/// discarded on error.
pub fn interpret(program: &Program, input: &str) -> Result<String, RuntimeError> {
    let mut input = Input::new(input);
    let mut ctx = Context::default();
    let mut output = String::new();
    let mut ptr: usize = 0;

    loop {
        let instruction = program
            .instructions
            .get(ptr)
            .ok_or(RuntimeError::MissingExit(ptr))?;
        trace!("[{}] {:?}", ptr, instruction);

        match instruction {
            Instruction::Push(n) => ctx.push(*n),
            Instruction::Copy(depth) => ctx.copy(*depth as usize)?,
            Instruction::Slide(n) => ctx.slide(*n),
            Instruction::Dup => ctx.copy(0)?,
            Instruction::Swap => ctx.swap()?,
            Instruction::Discard => {
                ctx.pop()?;
            }

            Instruction::Add => {
                let rhs = ctx.pop()?;
                let lhs = ctx.pop()?;
                ctx.push(lhs.wrapping_add(rhs));
            }
            Instruction::Sub => {
                let rhs = ctx.pop()?;
                let lhs = ctx.pop()?;
                ctx.push(lhs.wrapping_sub(rhs));
            }
            Instruction::Mul => {
                let rhs = ctx.pop()?;
                let lhs = ctx.pop()?;
                ctx.push(lhs.wrapping_mul(rhs));
            }
            Instruction::Div => {
                let rhs = ctx.pop()?;
                if rhs == 0 {
                    return Err(RuntimeError::DivideByZero);
                }
                let lhs = ctx.pop()?;
                ctx.push(floor_div(lhs, rhs));
            }
            Instruction::Mod => {
                let rhs = ctx.pop()?;
                if rhs == 0 {
                    return Err(RuntimeError::DivideByZero);
                }
                let lhs = ctx.pop()?;
                ctx.push(floor_mod(lhs, rhs));
            }

            Instruction::Store => ctx.store()?,
            Instruction::Retrieve => ctx.retrieve()?,

            Instruction::PrintChar => output.push(as_char(ctx.pop()?)?),
            Instruction::PrintNum => output.push_str(&ctx.pop()?.to_string()),
            Instruction::ReadChar => {
                let c = input.read_char()?;
                ctx.store_input(c as i64)?;
            }
            Instruction::ReadNum => {
                let n = input.read_number()?;
                ctx.store_input(n)?;
            }

            Instruction::Mark(_) => {}
            Instruction::Call(label) => {
                let target = lookup(program, label)?;
                ctx.call(ptr);
                ptr = target;
            }
            Instruction::Jump(label) => ptr = lookup(program, label)?,
            Instruction::JumpZero(label) => {
                if ctx.pop()? == 0 {
                    ptr = lookup(program, label)?;
                }
            }
            Instruction::JumpNegative(label) => {
                if ctx.pop()? < 0 {
                    ptr = lookup(program, label)?;
                }
            }
            Instruction::Return => ptr = ctx.ret()?,

            Instruction::Exit => break,
            Instruction::ImplicitExit => return Err(RuntimeError::MissingExit(ptr)),
        }
        ptr += 1;
    }

    debug!("program finished after producing {} byte(s) of output", output.len());
    Ok(output)
}
