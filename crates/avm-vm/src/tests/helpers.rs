//! Helper functions and common imports for machine tests.

use crate::error::VmError;
use crate::machine::{Flow, StackMachine};
use crate::operand::Operand;
use avm_parser::OperandType;

/// Outcome of running a program: how it ended, what it printed, and the
/// stack left behind
pub struct Run {
    pub result: Result<Flow, VmError>,
    pub output: String,
    pub stack: Vec<String>,
}

/// Parse and execute source text against a fresh machine
pub fn execute(source: &str) -> Run {
    let program = avm_parser::parse_program(source)
        .unwrap_or_else(|(line, e)| panic!("Parse error on line {}: {}", line, e));

    let mut vm = StackMachine::with_output(Vec::<u8>::new());
    let result = vm.run(program.iter().map(|(_, instruction)| instruction));
    let stack = vm.stack().iter().map(|op| op.text().to_string()).collect();
    let output = String::from_utf8_lossy(&vm.into_output()).into_owned();

    Run {
        result,
        output,
        stack,
    }
}

/// Machine with the given operands already pushed, bottom first
pub fn machine_with(operands: &[(OperandType, &str)]) -> StackMachine<Vec<u8>> {
    let mut vm = StackMachine::with_output(Vec::<u8>::new());
    for (ty, literal) in operands {
        vm.push(*ty, literal).unwrap();
    }
    vm
}

pub fn operand(ty: OperandType, literal: &str) -> Operand {
    Operand::create(ty, literal).unwrap()
}

pub fn output_of(vm: &StackMachine<Vec<u8>>) -> String {
    String::from_utf8_lossy(vm.output()).into_owned()
}
