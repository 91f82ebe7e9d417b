//! avm Virtual Machine
//!
//! This crate implements the typed-operand arithmetic engine and the stack
//! machine that executes avm instructions. It never reads source text: the
//! `avm-parser` crate hands it validated [`Instruction`]s.
//!
//! # Architecture
//!
//! - Five operand precisions, ranked `int8 < int16 < int32 < float < double`
//! - Immutable operands that keep the text they were built from
//! - Mixed-precision arithmetic promotes the lower-ranked operand by
//!   re-parsing its text as the higher type
//! - Every error aborts the run; nothing is recovered internally
//!
//! # Modules
//!
//! - `operand`: the operand value type, its factory and native arithmetic
//! - `promotion`: precision unification and the zero rules for mul/div/mod
//! - `machine`: the operand stack and per-opcode execution
//! - `error`: runtime error kinds

pub mod error;
pub mod machine;
pub mod operand;
pub mod promotion;

// Re-export main types
pub use avm_parser::{Instruction, OpCode, OperandType};
pub use error::VmError;
pub use machine::{Flow, StackMachine};
pub use operand::{BinaryOp, Operand};

#[cfg(test)]
mod tests;
