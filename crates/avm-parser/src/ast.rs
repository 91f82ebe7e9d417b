//! Instruction model shared by the parser and the machine

use crate::error::ParseError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Numeric operand type.
///
/// The declaration order is the precision rank used for promotion:
/// `Int8 < Int16 < Int32 < Float < Double`. It is an ordinal, not a
/// statement about value range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperandType {
    Int8,
    Int16,
    Int32,
    Float,
    Double,
}

impl OperandType {
    /// All types, lowest precision first
    pub const ALL: [OperandType; 5] = [
        OperandType::Int8,
        OperandType::Int16,
        OperandType::Int32,
        OperandType::Float,
        OperandType::Double,
    ];

    /// Precision rank (0 for int8 up to 4 for double)
    pub fn precision(self) -> u8 {
        self as u8
    }

    /// Keyword used in source text
    pub fn name(self) -> &'static str {
        match self {
            OperandType::Int8 => "int8",
            OperandType::Int16 => "int16",
            OperandType::Int32 => "int32",
            OperandType::Float => "float",
            OperandType::Double => "double",
        }
    }
}

impl fmt::Display for OperandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for OperandType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int8" => Ok(OperandType::Int8),
            "int16" => Ok(OperandType::Int16),
            "int32" => Ok(OperandType::Int32),
            "float" => Ok(OperandType::Float),
            "double" => Ok(OperandType::Double),
            other => Err(ParseError::InvalidOperandType(other.to_string())),
        }
    }
}

/// Instruction opcode, without operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpCode {
    Push,
    Pop,
    Dump,
    Assert,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Print,
    Exit,
}

impl OpCode {
    /// Get the source mnemonic
    pub fn name(self) -> &'static str {
        match self {
            OpCode::Push => "push",
            OpCode::Pop => "pop",
            OpCode::Dump => "dump",
            OpCode::Assert => "assert",
            OpCode::Add => "add",
            OpCode::Sub => "sub",
            OpCode::Mul => "mul",
            OpCode::Div => "div",
            OpCode::Mod => "mod",
            OpCode::Print => "print",
            OpCode::Exit => "exit",
        }
    }

    /// Whether the opcode requires a `type(literal)` operand
    pub fn takes_operand(self) -> bool {
        matches!(self, OpCode::Push | OpCode::Assert)
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A validated instruction, ready for the machine.
///
/// Literals carried by `Push` and `Assert` have passed
/// [`is_valid_literal`](crate::is_valid_literal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Instruction {
    Push {
        #[serde(rename = "type")]
        ty: OperandType,
        literal: String,
    },
    Pop,
    Dump,
    Assert {
        #[serde(rename = "type")]
        ty: OperandType,
        literal: String,
    },
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Print,
    Exit,
}

impl Instruction {
    pub fn opcode(&self) -> OpCode {
        match self {
            Instruction::Push { .. } => OpCode::Push,
            Instruction::Pop => OpCode::Pop,
            Instruction::Dump => OpCode::Dump,
            Instruction::Assert { .. } => OpCode::Assert,
            Instruction::Add => OpCode::Add,
            Instruction::Sub => OpCode::Sub,
            Instruction::Mul => OpCode::Mul,
            Instruction::Div => OpCode::Div,
            Instruction::Mod => OpCode::Mod,
            Instruction::Print => OpCode::Print,
            Instruction::Exit => OpCode::Exit,
        }
    }

    /// Build an instruction from an opcode and its optional operand.
    ///
    /// Fails with `InvalidInstruction` when the operand's presence does not
    /// match what the opcode expects.
    pub fn from_parts(
        opcode: OpCode,
        operand: Option<(OperandType, String)>,
    ) -> Result<Self, ParseError> {
        let instruction = match (opcode, operand) {
            (OpCode::Push, Some((ty, literal))) => Instruction::Push { ty, literal },
            (OpCode::Assert, Some((ty, literal))) => Instruction::Assert { ty, literal },
            (op, None) if op.takes_operand() => {
                return Err(ParseError::InvalidInstruction(format!(
                    "'{}' requires an operand",
                    op
                )))
            }
            (op, Some(_)) if !op.takes_operand() => {
                return Err(ParseError::InvalidInstruction(format!(
                    "'{}' takes no operand",
                    op
                )))
            }
            (OpCode::Pop, _) => Instruction::Pop,
            (OpCode::Dump, _) => Instruction::Dump,
            (OpCode::Add, _) => Instruction::Add,
            (OpCode::Sub, _) => Instruction::Sub,
            (OpCode::Mul, _) => Instruction::Mul,
            (OpCode::Div, _) => Instruction::Div,
            (OpCode::Mod, _) => Instruction::Mod,
            (OpCode::Print, _) => Instruction::Print,
            (OpCode::Exit, _) => Instruction::Exit,
            (OpCode::Push | OpCode::Assert, _) => unreachable!("operand presence checked above"),
        };
        Ok(instruction)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Push { ty, literal } | Instruction::Assert { ty, literal } => {
                write!(f, "{} {}({})", self.opcode(), ty, literal)
            }
            other => write!(f, "{}", other.opcode()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_follows_declaration_order() {
        let ranks: Vec<u8> = OperandType::ALL.iter().map(|t| t.precision()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
        assert!(OperandType::Float < OperandType::Double);
        assert!(OperandType::Int32 < OperandType::Float);
    }

    #[test]
    fn test_operand_type_round_trips_through_name() {
        for ty in OperandType::ALL {
            assert_eq!(ty.name().parse::<OperandType>(), Ok(ty));
        }
        assert!(matches!(
            "int64".parse::<OperandType>(),
            Err(ParseError::InvalidOperandType(_))
        ));
    }

    #[test]
    fn test_from_parts_rejects_operand_mismatch() {
        assert!(matches!(
            Instruction::from_parts(OpCode::Push, None),
            Err(ParseError::InvalidInstruction(_))
        ));
        assert!(matches!(
            Instruction::from_parts(OpCode::Pop, Some((OperandType::Int8, "1".into()))),
            Err(ParseError::InvalidInstruction(_))
        ));
    }

    #[test]
    fn test_display_matches_source_form() {
        let push = Instruction::Push {
            ty: OperandType::Double,
            literal: "2.5".into(),
        };
        assert_eq!(push.to_string(), "push double(2.5)");
        assert_eq!(Instruction::Mod.to_string(), "mod");
    }
}
