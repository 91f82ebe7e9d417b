//! Program loading and execution

use avm_parser::{contains_exit, parse_line, ParseError};
use avm_vm::{Flow, StackMachine, VmError};
use std::fs;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::debug;

/// Errors that end a run
#[derive(Debug, Error)]
pub enum RunError {
    /// The program file could not be read
    #[error("Invalid file '{path}': {reason}")]
    InvalidFile { path: String, reason: String },

    /// The program has no `exit` instruction anywhere
    #[error("Missing 'exit' instruction")]
    NoExitInstruction,

    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("line {line}: {source}")]
    Runtime {
        line: usize,
        #[source]
        source: VmError,
    },
}

/// Read a program file
pub fn read_file(path: &str) -> Result<String, RunError> {
    fs::read_to_string(path).map_err(|err| RunError::InvalidFile {
        path: path.to_string(),
        reason: err.to_string(),
    })
}

/// Read a program from an interactive stream.
///
/// Lines are collected up to and including the first line starting with
/// `;;`, or until end of input.
pub fn read_stream<R: BufRead>(reader: R) -> Result<String, RunError> {
    let mut source = String::new();
    for line in reader.lines() {
        let line = line.map_err(|err| RunError::InvalidFile {
            path: "<stdin>".to_string(),
            reason: err.to_string(),
        })?;
        let end = line.trim_start().starts_with(";;");
        source.push_str(&line);
        source.push('\n');
        if end {
            break;
        }
    }
    Ok(source)
}

/// Run a program, writing its output to `out`.
///
/// The program is rejected before anything executes if it has no `exit`.
/// Lines are then parsed and executed one at a time, so output produced
/// before a failing line has already been written. Returns the output sink.
pub fn run_source<W: Write>(source: &str, out: W) -> Result<W, RunError> {
    if !contains_exit(source) {
        return Err(RunError::NoExitInstruction);
    }

    let mut vm = StackMachine::with_output(out);
    for (index, text) in source.lines().enumerate() {
        let line = index + 1;
        let instruction = match parse_line(text) {
            Ok(Some(instruction)) => instruction,
            Ok(None) => continue,
            Err(source) => return Err(RunError::Parse { line, source }),
        };

        match vm.execute(&instruction) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => {
                debug!(line, "program exited");
                break;
            }
            Err(source) => return Err(RunError::Runtime { line, source }),
        }
    }

    Ok(vm.into_output())
}
