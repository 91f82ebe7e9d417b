//! Error types for the machine

use std::io;
use thiserror::Error;

/// Runtime errors. Any of these aborts the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    /// Division or modulo by a zero operand
    #[error("Division by zero")]
    DivisionByZero,

    /// Value above the type's maximum, or any out-of-range arithmetic result
    #[error("Overflow occurred")]
    Overflow,

    /// Integer literal below the type's minimum
    #[error("Underflow occurred")]
    Underflow,

    /// Instruction needs a value but the stack is empty
    #[error("Attempted to use the top of an empty stack")]
    EmptyStack,

    /// Arithmetic instruction with fewer than two values on the stack
    #[error("Less than two values on the stack for arithmetic operation")]
    LessThanTwoValues,

    /// `assert` did not match the top of the stack
    #[error("Assertion failed: expected {expected}, found {found}")]
    AssertError { expected: String, found: String },

    /// Literal text the factory cannot read as a number
    #[error("Invalid numeric literal: {0}")]
    InvalidLiteral(String),

    /// Writing to the output channel failed
    #[error("Failed to write output: {0}")]
    Output(String),
}

impl From<io::Error> for VmError {
    fn from(err: io::Error) -> Self {
        VmError::Output(err.to_string())
    }
}
