//! Operand construction from literal text

use super::Operand;
use crate::error::VmError;
use avm_parser::OperandType;
use num_traits::{Bounded, Float};
use std::num::IntErrorKind;
use std::str::FromStr;

impl Operand {
    /// Build an operand of type `ty` from `literal`.
    ///
    /// Integers read the literal's whole-number part and must fit the type
    /// (`Overflow` above the maximum, `Underflow` below the minimum). Floats
    /// and doubles fail with `Overflow` when the literal is out of the type's
    /// range in either direction. The literal is kept verbatim as the
    /// operand's text.
    pub fn create(ty: OperandType, literal: &str) -> Result<Self, VmError> {
        let text = literal.to_string();
        let operand = match ty {
            OperandType::Int8 => Operand::Int8 {
                value: narrow(parse_integer(literal)?)?,
                text,
            },
            OperandType::Int16 => Operand::Int16 {
                value: narrow(parse_integer(literal)?)?,
                text,
            },
            OperandType::Int32 => Operand::Int32 {
                value: narrow(parse_integer(literal)?)?,
                text,
            },
            OperandType::Float => Operand::Float {
                value: parse_float(literal)?,
                text,
            },
            OperandType::Double => Operand::Double {
                value: parse_float(literal)?,
                text,
            },
        };
        Ok(operand)
    }
}

/// Read the whole-number part of a literal as `i64`.
///
/// A fractional tail is accepted and ignored, so `"4.9"` reads as 4 and
/// `"-0.5"` as 0. Values beyond `i64` in either direction are `Overflow`.
pub(crate) fn parse_integer(literal: &str) -> Result<i64, VmError> {
    let invalid = || VmError::InvalidLiteral(literal.to_string());

    let unsigned = literal.strip_prefix('-').unwrap_or(literal);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };

    if whole.is_empty()
        || !whole.bytes().all(|b| b.is_ascii_digit())
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    // Keep the sign attached so i64::MIN parses
    let digits = &literal[..literal.len() - unsigned.len() + whole.len()];
    digits.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => VmError::Overflow,
        _ => invalid(),
    })
}

/// Narrow an `i64` into an integer type, distinguishing the direction.
pub(crate) fn narrow<T>(value: i64) -> Result<T, VmError>
where
    T: Bounded + Into<i64> + TryFrom<i64>,
{
    if value > T::max_value().into() {
        return Err(VmError::Overflow);
    }
    if value < T::min_value().into() {
        return Err(VmError::Underflow);
    }
    T::try_from(value).map_err(|_| VmError::Overflow)
}

/// Parse a float literal, rejecting values the type cannot represent.
///
/// Infinite results and non-zero literals that collapse to zero or to a
/// subnormal are both out of range.
pub(crate) fn parse_float<F>(literal: &str) -> Result<F, VmError>
where
    F: Float + FromStr,
{
    let value = literal
        .parse::<F>()
        .map_err(|_| VmError::InvalidLiteral(literal.to_string()))?;

    if value.is_infinite() || value.is_nan() {
        return Err(VmError::Overflow);
    }

    let nonzero_literal = literal.bytes().any(|b| matches!(b, b'1'..=b'9'));
    if nonzero_literal && !value.is_normal() {
        return Err(VmError::Overflow);
    }

    Ok(value)
}
