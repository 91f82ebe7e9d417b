//! Stack and I/O instruction execution

use super::{Flow, StackMachine};
use crate::error::VmError;
use crate::operand::{parse_integer, Operand};
use avm_parser::OperandType;
use std::io::Write;
use tracing::debug;

impl<W: Write> StackMachine<W> {
    /// Build an operand from `literal` and push it
    pub fn push(&mut self, ty: OperandType, literal: &str) -> Result<(), VmError> {
        let operand = Operand::create(ty, literal)?;
        self.stack.push(operand);
        Ok(())
    }

    /// Remove and return the top operand
    pub fn pop(&mut self) -> Result<Operand, VmError> {
        self.stack.pop().ok_or(VmError::EmptyStack)
    }

    /// Write every operand's text, top first, one per line.
    pub fn dump(&mut self) -> Result<(), VmError> {
        for operand in self.stack.iter().rev() {
            writeln!(self.out, "{}", operand)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Check the top operand against a type and literal.
    ///
    /// Fails only when both the text and the type differ; a match on either
    /// one passes.
    pub fn assert(&self, ty: OperandType, literal: &str) -> Result<(), VmError> {
        let top = self.top()?;

        if top.text() != literal && top.operand_type() != ty {
            return Err(VmError::AssertError {
                expected: format!("{}({})", ty, literal),
                found: format!("{}({})", top.operand_type(), top.text()),
            });
        }
        Ok(())
    }

    /// Write the top operand as a single character.
    ///
    /// The text is read as an `i32` and its low 8 bits are written as one
    /// raw byte followed by a newline. Values outside the `i8` range are not
    /// rejected; they wrap.
    pub fn print(&mut self) -> Result<(), VmError> {
        let text = self.top()?.text();
        let value = i32::try_from(parse_integer(text)?).map_err(|_| VmError::Overflow)?;

        let byte = value as i8 as u8;
        self.out.write_all(&[byte, b'\n'])?;
        self.out.flush()?;
        Ok(())
    }

    /// Stop the run, discarding whatever is left on the stack
    pub fn exit(&mut self) -> Flow {
        debug!(discarded = self.stack.len(), "exit");
        self.stack.clear();
        Flow::Exit
    }
}
