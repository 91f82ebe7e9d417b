use super::helpers::{execute, machine_with, output_of};
use crate::error::VmError;
use crate::machine::StackMachine;
use avm_parser::{Instruction, OperandType};

#[test]
fn test_push_builds_typed_operand() {
    let vm = machine_with(&[(OperandType::Int16, "300")]);
    let top = vm.peek().unwrap();
    assert_eq!(top.operand_type(), OperandType::Int16);
    assert_eq!(top.text(), "300");
}

#[test]
fn test_push_out_of_range_leaves_stack_unchanged() {
    let mut vm = machine_with(&[(OperandType::Int8, "1")]);
    assert_eq!(vm.push(OperandType::Int8, "200"), Err(VmError::Overflow));
    assert_eq!(vm.push(OperandType::Int8, "-200"), Err(VmError::Underflow));
    assert_eq!(vm.len(), 1);
}

#[test]
fn test_pop_removes_top() {
    let mut vm = machine_with(&[(OperandType::Int8, "1"), (OperandType::Int8, "2")]);
    let popped = vm.pop().unwrap();
    assert_eq!(popped.text(), "2");
    assert_eq!(vm.len(), 1);
}

#[test]
fn test_pop_empty_stack() {
    let mut vm = StackMachine::with_output(Vec::<u8>::new());
    assert_eq!(vm.pop(), Err(VmError::EmptyStack));
    assert!(vm.is_empty());
}

#[test]
fn test_dump_is_read_only() {
    let mut vm = machine_with(&[(OperandType::Int8, "1"), (OperandType::Int8, "2")]);
    vm.dump().unwrap();
    vm.dump().unwrap();
    assert_eq!(output_of(&vm), "2\n1\n2\n1\n");

    let popped = vm.pop().unwrap();
    assert_eq!(popped.text(), "2");
}

#[test]
fn test_dump_empty_stack_prints_nothing() {
    let mut vm = StackMachine::with_output(Vec::<u8>::new());
    vm.dump().unwrap();
    assert_eq!(output_of(&vm), "");
}

#[test]
fn test_assert_exact_match() {
    let vm = machine_with(&[(OperandType::Double, "42.42")]);
    assert!(vm.assert(OperandType::Double, "42.42").is_ok());
}

#[test]
fn test_assert_fails_only_when_text_and_type_both_differ() {
    let vm = machine_with(&[(OperandType::Int32, "42")]);

    // Same text, different type: passes
    assert!(vm.assert(OperandType::Double, "42").is_ok());
    // Same type, different text: passes
    assert!(vm.assert(OperandType::Int32, "43").is_ok());
    // Both differ: fails
    assert_eq!(
        vm.assert(OperandType::Double, "43"),
        Err(VmError::AssertError {
            expected: "double(43)".to_string(),
            found: "int32(42)".to_string(),
        })
    );
}

#[test]
fn test_assert_compares_text_not_value() {
    let vm = machine_with(&[(OperandType::Float, "1.50")]);
    assert!(vm.assert(OperandType::Double, "1.5").is_err());
}

#[test]
fn test_assert_empty_stack() {
    let vm = StackMachine::with_output(Vec::<u8>::new());
    assert_eq!(
        vm.assert(OperandType::Int8, "0"),
        Err(VmError::EmptyStack)
    );
}

#[test]
fn test_print_writes_low_byte() {
    let mut vm = machine_with(&[(OperandType::Int8, "65")]);
    vm.print().unwrap();
    assert_eq!(output_of(&vm), "A\n");
    assert_eq!(vm.len(), 1);
}

#[test]
fn test_print_reads_whole_part_of_text() {
    let mut vm = machine_with(&[(OperandType::Double, "97.9")]);
    vm.print().unwrap();
    assert_eq!(output_of(&vm), "a\n");
}

#[test]
fn test_print_wraps_out_of_range_values() {
    // 321 = 0x141, low byte 0x41
    let mut vm = machine_with(&[(OperandType::Int16, "321")]);
    vm.print().unwrap();
    assert_eq!(vm.output().as_slice(), b"A\n");

    let mut vm = machine_with(&[(OperandType::Int8, "-1")]);
    vm.print().unwrap();
    assert_eq!(vm.output().as_slice(), &[0xff, b'\n']);
}

#[test]
fn test_print_beyond_i32_overflows() {
    let mut vm = machine_with(&[(OperandType::Double, "3000000000")]);
    assert_eq!(vm.print(), Err(VmError::Overflow));
}

#[test]
fn test_print_empty_stack() {
    let mut vm = StackMachine::with_output(Vec::<u8>::new());
    assert_eq!(vm.print(), Err(VmError::EmptyStack));
}

#[test]
fn test_execute_dispatches_push() {
    let mut vm = StackMachine::with_output(Vec::<u8>::new());
    let instruction = Instruction::Push {
        ty: OperandType::Float,
        literal: "1.25".to_string(),
    };
    vm.execute(&instruction).unwrap();
    assert_eq!(vm.peek().unwrap().operand_type(), OperandType::Float);
}

#[test]
fn test_assert_failure_in_program() {
    let run = execute("push int8(1)\nassert double(2)\nexit\n");
    assert!(matches!(run.result, Err(VmError::AssertError { .. })));
}
