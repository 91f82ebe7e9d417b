//! Precision promotion for binary arithmetic
//!
//! The machine hands this module `operand1` (pushed earlier) and `operand2`
//! (pushed later, the top of the stack). The result is always
//! `operand1 <op> operand2`, computed in the higher-ranked of the two types.

use crate::error::VmError;
use crate::operand::{BinaryOp, Operand};
use avm_parser::OperandType;
use tracing::debug;

/// Evaluate `operand1 <op> operand2`.
///
/// Zero rules run first and look at operand text only:
/// - `div` fails with `DivisionByZero` if either operand is `"0"`
/// - `mod` fails with `DivisionByZero` if `operand2` is `"0"`
/// - `mul` yields a zero of the higher-ranked type if either operand is `"0"`
///
/// Otherwise operands of equal rank are combined directly. With different
/// ranks the lower one is rebuilt from its text as the higher type, then the
/// operation runs in that type.
pub fn evaluate(op: BinaryOp, operand1: &Operand, operand2: &Operand) -> Result<Operand, VmError> {
    match op {
        BinaryOp::Div if operand1.is_zero_literal() || operand2.is_zero_literal() => {
            return Err(VmError::DivisionByZero);
        }
        BinaryOp::Mod if operand2.is_zero_literal() => {
            return Err(VmError::DivisionByZero);
        }
        BinaryOp::Mul if operand1.is_zero_literal() || operand2.is_zero_literal() => {
            return Ok(Operand::zero(higher_type(operand1, operand2)));
        }
        _ => {}
    }

    if operand1.precision() == operand2.precision() {
        return operand1.apply(op, operand2);
    }

    let target = higher_type(operand1, operand2);
    if operand1.operand_type() == target {
        let converted = promote(operand2, target)?;
        operand1.apply(op, &converted)
    } else {
        let converted = promote(operand1, target)?;
        converted.apply(op, operand2)
    }
}

/// Type of the operand with the higher precision rank
pub fn higher_type(operand1: &Operand, operand2: &Operand) -> OperandType {
    operand1.operand_type().max(operand2.operand_type())
}

fn promote(operand: &Operand, target: OperandType) -> Result<Operand, VmError> {
    debug!(
        from = %operand.operand_type(),
        to = %target,
        text = operand.text(),
        "promoting operand"
    );
    Operand::create(target, operand.text())
}
