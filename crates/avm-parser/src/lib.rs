//! Instruction model and line parser for the avm stack machine.
//!
//! The machine itself never sees source text: this crate turns each line of a
//! program into an [`Instruction`] whose operand type is known and whose
//! literal has already passed the numeric syntax check.
//!
//! # Modules
//!
//! - `ast`: operand types, opcodes and instructions
//! - `table`: the static mnemonic table
//! - `pest_parser`: the line grammar and program-level helpers
//! - `error`: parse errors

pub mod ast;
pub mod error;
pub mod pest_parser;
pub mod table;

// Re-export commonly used items
pub use ast::{Instruction, OpCode, OperandType};
pub use error::ParseError;
pub use pest_parser::{contains_exit, is_valid_literal, parse_line, parse_program};
pub use table::lookup_opcode;
