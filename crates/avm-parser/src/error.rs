//! Parse errors

use thiserror::Error;

/// Errors raised while turning a source line into an instruction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Unknown mnemonic, or an operand where none is allowed
    #[error("Invalid Instruction Type encountered: {0}")]
    InvalidInstruction(String),

    /// Unknown type keyword or malformed `type(literal)` operand
    #[error("Invalid Operand Type encountered: {0}")]
    InvalidOperandType(String),
}
