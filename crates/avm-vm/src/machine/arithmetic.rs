//! Arithmetic instruction execution

use super::StackMachine;
use crate::error::VmError;
use crate::operand::BinaryOp;
use crate::promotion;
use std::io::Write;
use tracing::debug;

impl<W: Write> StackMachine<W> {
    pub fn add(&mut self) -> Result<(), VmError> {
        self.binary(BinaryOp::Add)
    }

    pub fn sub(&mut self) -> Result<(), VmError> {
        self.binary(BinaryOp::Sub)
    }

    pub fn mul(&mut self) -> Result<(), VmError> {
        self.binary(BinaryOp::Mul)
    }

    pub fn div(&mut self) -> Result<(), VmError> {
        self.binary(BinaryOp::Div)
    }

    pub fn rem(&mut self) -> Result<(), VmError> {
        self.binary(BinaryOp::Mod)
    }

    /// Pop two operands, combine them and push the result.
    ///
    /// Fewer than two operands leaves the stack untouched. Once popped, the
    /// operands are gone whether or not the operation succeeds.
    pub fn binary(&mut self, op: BinaryOp) -> Result<(), VmError> {
        if self.stack.len() < 2 {
            return Err(VmError::LessThanTwoValues);
        }

        let operand2 = self.stack.pop().ok_or(VmError::LessThanTwoValues)?;
        let operand1 = self.stack.pop().ok_or(VmError::LessThanTwoValues)?;

        let result = promotion::evaluate(op, &operand1, &operand2)?;
        debug!(
            lhs = operand1.text(),
            rhs = operand2.text(),
            %op,
            result = result.text(),
            ty = %result.operand_type(),
            "arithmetic"
        );

        self.stack.push(result);
        Ok(())
    }
}
