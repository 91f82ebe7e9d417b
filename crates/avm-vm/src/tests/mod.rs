pub mod helpers;

pub mod stack_operations;
