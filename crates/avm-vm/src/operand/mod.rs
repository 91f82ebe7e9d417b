//! Operand value type
//!
//! An [`Operand`] is an immutable number of one of the five precisions. Each
//! variant keeps both the decoded value and the text it was built from; the
//! text is what `dump` shows, what `assert` compares, and what promotion
//! re-parses.

use avm_parser::OperandType;
use std::fmt;

mod arithmetic;
mod factory;

pub use arithmetic::BinaryOp;
pub(crate) use factory::parse_integer;

/// Typed numeric value with its canonical text
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Int8 { value: i8, text: String },
    Int16 { value: i16, text: String },
    Int32 { value: i32, text: String },
    Float { value: f32, text: String },
    Double { value: f64, text: String },
}

impl Operand {
    /// Zero of the given type, with text `"0"`
    pub fn zero(ty: OperandType) -> Self {
        let text = "0".to_string();
        match ty {
            OperandType::Int8 => Operand::Int8 { value: 0, text },
            OperandType::Int16 => Operand::Int16 { value: 0, text },
            OperandType::Int32 => Operand::Int32 { value: 0, text },
            OperandType::Float => Operand::Float { value: 0.0, text },
            OperandType::Double => Operand::Double { value: 0.0, text },
        }
    }

    pub fn operand_type(&self) -> OperandType {
        match self {
            Operand::Int8 { .. } => OperandType::Int8,
            Operand::Int16 { .. } => OperandType::Int16,
            Operand::Int32 { .. } => OperandType::Int32,
            Operand::Float { .. } => OperandType::Float,
            Operand::Double { .. } => OperandType::Double,
        }
    }

    /// Precision rank of the operand's type
    pub fn precision(&self) -> u8 {
        self.operand_type().precision()
    }

    /// Canonical text: the pushed literal, or the re-stringified result of
    /// the operation that produced this operand
    pub fn text(&self) -> &str {
        match self {
            Operand::Int8 { text, .. }
            | Operand::Int16 { text, .. }
            | Operand::Int32 { text, .. }
            | Operand::Float { text, .. }
            | Operand::Double { text, .. } => text,
        }
    }

    /// Whether the text is exactly `"0"`.
    ///
    /// The zero rules for mul, div and mod look at the text only, so `"0.0"`
    /// or `"-0"` do not count.
    pub fn is_zero_literal(&self) -> bool {
        self.text() == "0"
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
