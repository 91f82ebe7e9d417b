//! Execution result types

/// What the caller should do after an instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Continue to next instruction
    Continue,
    /// `exit` ran; stop reading instructions
    Exit,
}
