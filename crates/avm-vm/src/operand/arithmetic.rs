//! Native arithmetic on same-typed operands

use super::factory::narrow;
use super::Operand;
use crate::error::VmError;
use num_traits::Float;
use std::borrow::Cow;
use std::fmt;

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    /// Remainder. Floating-point remainder for floats and doubles.
    Mod,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Mod,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Operand {
    pub fn add(&self, rhs: &Operand) -> Result<Operand, VmError> {
        self.apply(BinaryOp::Add, rhs)
    }

    pub fn sub(&self, rhs: &Operand) -> Result<Operand, VmError> {
        self.apply(BinaryOp::Sub, rhs)
    }

    pub fn mul(&self, rhs: &Operand) -> Result<Operand, VmError> {
        self.apply(BinaryOp::Mul, rhs)
    }

    pub fn div(&self, rhs: &Operand) -> Result<Operand, VmError> {
        self.apply(BinaryOp::Div, rhs)
    }

    pub fn rem(&self, rhs: &Operand) -> Result<Operand, VmError> {
        self.apply(BinaryOp::Mod, rhs)
    }

    /// Apply `op` in this operand's type.
    ///
    /// `rhs` is re-read from its text as `self`'s type, whatever its own
    /// variant. The raw result must fit the type or the operation fails with
    /// `Overflow`; computed results never report `Underflow`.
    pub fn apply(&self, op: BinaryOp, rhs: &Operand) -> Result<Operand, VmError> {
        let ty = self.operand_type();
        let rhs = if rhs.operand_type() == ty {
            Cow::Borrowed(rhs)
        } else {
            Cow::Owned(Operand::create(ty, rhs.text())?)
        };

        match (self, &*rhs) {
            (Operand::Int8 { value: a, .. }, Operand::Int8 { value: b, .. }) => {
                let value = integer_op(op, i64::from(*a), i64::from(*b))?;
                Ok(Operand::Int8 {
                    value: narrow(value).map_err(|_| VmError::Overflow)?,
                    text: value.to_string(),
                })
            }
            (Operand::Int16 { value: a, .. }, Operand::Int16 { value: b, .. }) => {
                let value = integer_op(op, i64::from(*a), i64::from(*b))?;
                Ok(Operand::Int16 {
                    value: narrow(value).map_err(|_| VmError::Overflow)?,
                    text: value.to_string(),
                })
            }
            (Operand::Int32 { value: a, .. }, Operand::Int32 { value: b, .. }) => {
                let value = integer_op(op, i64::from(*a), i64::from(*b))?;
                Ok(Operand::Int32 {
                    value: narrow(value).map_err(|_| VmError::Overflow)?,
                    text: value.to_string(),
                })
            }
            (Operand::Float { value: a, .. }, Operand::Float { value: b, .. }) => {
                let value = float_op(op, *a, *b)?;
                Ok(Operand::Float {
                    value,
                    text: value.to_string(),
                })
            }
            (Operand::Double { value: a, .. }, Operand::Double { value: b, .. }) => {
                let value = float_op(op, *a, *b)?;
                Ok(Operand::Double {
                    value,
                    text: value.to_string(),
                })
            }
            _ => unreachable!("right-hand operand was re-read as {}", ty),
        }
    }
}

/// Integer arithmetic widened to `i64`; the caller narrows the result.
fn integer_op(op: BinaryOp, a: i64, b: i64) -> Result<i64, VmError> {
    let result = match op {
        BinaryOp::Add => a.checked_add(b),
        BinaryOp::Sub => a.checked_sub(b),
        BinaryOp::Mul => a.checked_mul(b),
        BinaryOp::Div | BinaryOp::Mod if b == 0 => return Err(VmError::DivisionByZero),
        // Truncating division and a remainder with the dividend's sign
        BinaryOp::Div => a.checked_div(b),
        BinaryOp::Mod => a.checked_rem(b),
    };
    result.ok_or(VmError::Overflow)
}

fn float_op<F: Float>(op: BinaryOp, a: F, b: F) -> Result<F, VmError> {
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div | BinaryOp::Mod if b.is_zero() => return Err(VmError::DivisionByZero),
        BinaryOp::Div => a / b,
        BinaryOp::Mod => a % b,
    };

    // Same range as literals: finite, and either zero or normal
    if !result.is_finite() || (!result.is_zero() && !result.is_normal()) {
        return Err(VmError::Overflow);
    }
    Ok(result)
}
