//! Exact-decimal parsing and evaluation.
//!
//! Operands travel through the calculator as strings; this module is the
//! only place they are turned into numbers, and results are turned back
//! into canonical operand strings before they leave.

use crate::core::BinaryOp;
use crate::number::error::{CalcError, Result};
use bigdecimal::{BigDecimal, Zero};
use std::str::FromStr;

/// Check the operand grammar: optional `-`, digits, optional `.` and more
/// digits, with at least one digit somewhere.
fn is_operand_shaped(operand: &str) -> bool {
    let unsigned = operand.strip_prefix('-').unwrap_or(operand);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && all_digits(fraction) && !(whole.is_empty() && fraction.is_empty())
}

/// Parse an operand string into an exact decimal.
///
/// Accepts the forms produced while typing, including a trailing bare
/// point (`"12."`) and negative zero (`"-0"`). Grouping separators are
/// not accepted; strip them first.
///
/// # Example
///
/// ```rust
/// use bicalc::number::parse_operand;
/// use bigdecimal::BigDecimal;
///
/// assert_eq!(parse_operand("12.").unwrap(), BigDecimal::from(12));
/// assert!(parse_operand("1,234").is_err());
/// ```
pub fn parse_operand(operand: &str) -> Result<BigDecimal> {
    if !is_operand_shaped(operand) {
        return Err(CalcError::ParseFailure(operand.to_string()));
    }

    let trimmed = operand.strip_suffix('.').unwrap_or(operand);
    let normalized = match trimmed.strip_prefix('-') {
        Some(rest) if rest.starts_with('.') => format!("-0{rest}"),
        _ if trimmed.starts_with('.') => format!("0{trimmed}"),
        _ => trimmed.to_string(),
    };

    BigDecimal::from_str(&normalized).map_err(|_| CalcError::ParseFailure(operand.to_string()))
}

/// Serialize a decimal into canonical operand form.
///
/// Always plain positional notation, never an exponent. Trailing
/// fractional zeros are dropped and negative zero folds to `"0"`.
pub fn to_canonical(value: &BigDecimal) -> String {
    if value.is_zero() {
        return "0".to_string();
    }

    let (mantissa, scale) = value.normalized().into_bigint_and_exponent();
    let signed = mantissa.to_string();
    let (sign, digits) = match signed.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", signed.as_str()),
    };

    let shift = scale.unsigned_abs() as usize;
    if scale <= 0 {
        format!("{sign}{digits}{}", "0".repeat(shift))
    } else if digits.len() > shift {
        let (whole, fraction) = digits.split_at(digits.len() - shift);
        format!("{sign}{whole}.{fraction}")
    } else {
        format!("{sign}0.{}{digits}", "0".repeat(shift - digits.len()))
    }
}

/// Evaluate `left op right` in exact-decimal arithmetic.
///
/// Division by zero is the one guarded failure; operands have no upper
/// bound on size or precision. A quotient that does not terminate is
/// rounded to the decimal type's division precision.
pub fn evaluate(left: &str, op: BinaryOp, right: &str) -> Result<String> {
    let lhs = parse_operand(left)?;
    let rhs = parse_operand(right)?;

    let value = match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Subtract => lhs - rhs,
        BinaryOp::Multiply => lhs * rhs,
        BinaryOp::Divide => {
            if rhs.is_zero() {
                return Err(CalcError::DivideByZero);
            }
            lhs / rhs
        }
    };

    Ok(to_canonical(&value))
}
