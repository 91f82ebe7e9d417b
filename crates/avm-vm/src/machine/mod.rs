//! Stack machine implementation

use crate::error::VmError;
use crate::operand::Operand;
use avm_parser::Instruction;
use std::io::{self, Write};
use tracing::trace;

// Module structure
mod arithmetic;
mod result;
mod stack_ops;

pub use result::Flow;

/// Stack machine.
///
/// Owns the operand stack and the output channel that `dump` and `print`
/// write to. The stack starts empty and lives until `exit` or the first
/// error.
pub struct StackMachine<W: Write = io::Stdout> {
    /// Operand stack, top at the end
    pub(crate) stack: Vec<Operand>,

    /// Output channel for `dump` and `print`
    pub(crate) out: W,
}

impl StackMachine<io::Stdout> {
    /// Create a machine writing to stdout
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for StackMachine<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StackMachine<W> {
    /// Create a machine writing to `out`
    pub fn with_output(out: W) -> Self {
        Self {
            stack: Vec::with_capacity(64),
            out,
        }
    }

    /// Execute a single instruction
    pub fn execute(&mut self, instruction: &Instruction) -> Result<Flow, VmError> {
        trace!(%instruction, depth = self.stack.len(), "execute");

        match instruction {
            Instruction::Push { ty, literal } => self.push(*ty, literal)?,
            Instruction::Pop => {
                self.pop()?;
            }
            Instruction::Dump => self.dump()?,
            Instruction::Assert { ty, literal } => self.assert(*ty, literal)?,
            Instruction::Add => self.add()?,
            Instruction::Sub => self.sub()?,
            Instruction::Mul => self.mul()?,
            Instruction::Div => self.div()?,
            Instruction::Mod => self.rem()?,
            Instruction::Print => self.print()?,
            Instruction::Exit => return Ok(self.exit()),
        }

        Ok(Flow::Continue)
    }

    /// Run instructions in order until `exit` or the first error.
    ///
    /// Returns `Flow::Continue` if the instructions ran out without an
    /// `exit`.
    pub fn run<'a, I>(&mut self, program: I) -> Result<Flow, VmError>
    where
        I: IntoIterator<Item = &'a Instruction>,
    {
        for instruction in program {
            if self.execute(instruction)? == Flow::Exit {
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Operands from bottom to top
    pub fn stack(&self) -> &[Operand] {
        &self.stack
    }

    /// Top of the stack, if any
    pub fn peek(&self) -> Option<&Operand> {
        self.stack.last()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub(crate) fn top(&self) -> Result<&Operand, VmError> {
        self.stack.last().ok_or(VmError::EmptyStack)
    }
}
