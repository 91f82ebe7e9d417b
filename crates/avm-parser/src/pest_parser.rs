//! Line grammar and program-level parsing

use crate::ast::{Instruction, OpCode, OperandType};
use crate::error::ParseError;
use crate::table::lookup_opcode;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct AvmParser;

/// Check the numeric literal syntax: optional leading `-`, digits, at most
/// one `.`.
pub fn is_valid_literal(text: &str) -> bool {
    AvmParser::parse(Rule::number, text).is_ok()
}

/// Parse one source line.
///
/// Returns `Ok(None)` for blank lines and comments. A line starting with
/// `;;` marks the end of input and parses as [`Instruction::Exit`].
pub fn parse_line(line: &str) -> Result<Option<Instruction>, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);

    let mut pairs = match AvmParser::parse(Rule::line, line) {
        Ok(pairs) => pairs,
        Err(_) => return Err(classify_malformed(line)),
    };

    let root = pairs
        .next()
        .ok_or_else(|| ParseError::InvalidInstruction(line.to_string()))?;

    for pair in root.into_inner() {
        match pair.as_rule() {
            Rule::end_marker => return Ok(Some(Instruction::Exit)),
            Rule::instruction => return build_instruction(pair).map(Some),
            _ => {}
        }
    }

    Ok(None)
}

/// Parse a whole program, dropping comments.
///
/// Instructions are paired with their 1-based line number; the first failing
/// line is reported with its number.
pub fn parse_program(source: &str) -> Result<Vec<(usize, Instruction)>, (usize, ParseError)> {
    let mut program = Vec::new();
    for (index, line) in source.lines().enumerate() {
        match parse_line(line) {
            Ok(Some(instruction)) => program.push((index + 1, instruction)),
            Ok(None) => {}
            Err(err) => return Err((index + 1, err)),
        }
    }
    Ok(program)
}

/// Whether any line of `source` is an exit instruction.
///
/// This is a text scan, not a parse: it runs before anything executes and
/// must not fail on lines the parser would reject later.
pub fn contains_exit(source: &str) -> bool {
    source.lines().any(|line| {
        let line = line.trim_start();
        if line.starts_with(";;") {
            return true;
        }
        let code = line.split(';').next().unwrap_or_default();
        code.split_whitespace().next() == Some(OpCode::Exit.name())
    })
}

fn build_instruction(pair: Pair<Rule>) -> Result<Instruction, ParseError> {
    let mut inner = pair.into_inner();

    let mnemonic = inner
        .next()
        .ok_or_else(|| ParseError::InvalidInstruction("empty instruction".to_string()))?;
    let opcode = lookup_opcode(mnemonic.as_str())
        .ok_or_else(|| ParseError::InvalidInstruction(mnemonic.as_str().to_string()))?;

    let operand = inner.next().map(build_operand).transpose()?;

    Instruction::from_parts(opcode, operand)
}

fn build_operand(pair: Pair<Rule>) -> Result<(OperandType, String), ParseError> {
    let text = pair.as_str().to_string();
    let mut inner = pair.into_inner();

    let ty = inner
        .next()
        .ok_or_else(|| ParseError::InvalidOperandType(text.clone()))?
        .as_str()
        .parse::<OperandType>()?;

    // Structure: operand = { type_name ~ "(" ~ literal ~ ")" }
    let literal = inner.next().map(|p| p.as_str()).unwrap_or_default();
    if !is_valid_literal(literal) {
        return Err(ParseError::InvalidOperandType(text));
    }

    Ok((ty, literal.to_string()))
}

/// Pick the error kind for a line the grammar rejected.
///
/// A known mnemonic that expects an operand points at the operand; anything
/// else is an instruction error.
fn classify_malformed(line: &str) -> ParseError {
    let word: String = line
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();

    match lookup_opcode(&word) {
        Some(opcode) if opcode.takes_operand() => {
            ParseError::InvalidOperandType(line.trim().to_string())
        }
        _ => ParseError::InvalidInstruction(line.trim().to_string()),
    }
}
