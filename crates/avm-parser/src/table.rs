//! Mnemonic to opcode table

use crate::ast::OpCode;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Every recognized mnemonic, built once on first use and never mutated.
pub static INSTRUCTION_TABLE: Lazy<HashMap<&'static str, OpCode>> = Lazy::new(|| {
    [
        OpCode::Push,
        OpCode::Pop,
        OpCode::Dump,
        OpCode::Assert,
        OpCode::Add,
        OpCode::Sub,
        OpCode::Mul,
        OpCode::Div,
        OpCode::Mod,
        OpCode::Print,
        OpCode::Exit,
    ]
    .into_iter()
    .map(|op| (op.name(), op))
    .collect()
});

/// Look up the opcode for a mnemonic. Matching is case-sensitive.
pub fn lookup_opcode(mnemonic: &str) -> Option<OpCode> {
    INSTRUCTION_TABLE.get(mnemonic).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_opcode() {
        assert_eq!(INSTRUCTION_TABLE.len(), 11);
        assert_eq!(lookup_opcode("mod"), Some(OpCode::Mod));
        assert_eq!(lookup_opcode("exit"), Some(OpCode::Exit));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(lookup_opcode("PUSH"), None);
        assert_eq!(lookup_opcode("pow"), None);
    }
}
