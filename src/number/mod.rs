//! Operand editing, formatting, and exact-decimal arithmetic.
//!
//! Operands are decimal strings, never binary floats. Editing works on the
//! string directly; arithmetic parses into an exact decimal and serializes
//! the result back into canonical operand form.

mod decimal;
pub mod error;
mod format;
mod operand;

pub use decimal::{evaluate, parse_operand, to_canonical};
pub use error::{CalcError, Result};
pub use format::{finished_formatted, pending_formatted, NumberFormat, ERROR_DISPLAY};
pub use operand::{append_decimal_point, append_digit, negate, percent};
