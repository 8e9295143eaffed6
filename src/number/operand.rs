//! String-level editing of the operand under construction.

use crate::number::decimal::{parse_operand, to_canonical};
use crate::number::error::{CalcError, Result};
use bigdecimal::BigDecimal;

/// Append a digit keypress to an operand.
///
/// A lone zero (signed or not) is replaced rather than extended, so
/// `"0"` never becomes `"00"`.
pub fn append_digit(operand: &str, digit: u8) -> Result<String> {
    let ch = char::from_digit(u32::from(digit), 10)
        .ok_or_else(|| CalcError::ParseFailure(digit.to_string()))?;

    let appended = match operand {
        "0" | "-0" if digit == 0 => operand.to_string(),
        "0" => ch.to_string(),
        "-0" => format!("-{ch}"),
        _ => format!("{operand}{ch}"),
    };
    Ok(appended)
}

/// Append a decimal point unless the operand already has one.
pub fn append_decimal_point(operand: &str) -> String {
    if operand.contains('.') {
        operand.to_string()
    } else {
        format!("{operand}.")
    }
}

/// Toggle the leading minus sign.
pub fn negate(operand: &str) -> String {
    match operand.strip_prefix('-') {
        Some(rest) => rest.to_string(),
        None => format!("-{operand}"),
    }
}

/// Divide the operand by exactly one hundred.
///
/// Implemented as a two-place shift of the decimal scale, so no precision
/// is ever lost however long the operand is.
pub fn percent(operand: &str) -> Result<String> {
    let (mantissa, scale) = parse_operand(operand)?.into_bigint_and_exponent();
    Ok(to_canonical(&BigDecimal::new(mantissa, scale + 2)))
}
