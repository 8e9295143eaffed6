//! Numeric error types.

use thiserror::Error;

/// Result type alias for operand and evaluation helpers.
pub type Result<T> = std::result::Result<T, CalcError>;

/// Errors that can occur while parsing, editing, or evaluating operands.
///
/// None of these reach the presentation layer directly: the calculator
/// state machine collapses every one of them into its `Error` variant.
#[derive(Debug, Error)]
pub enum CalcError {
    /// Operand string is not a valid decimal
    #[error("cannot parse operand '{0}'")]
    ParseFailure(String),

    /// Right operand of a division was zero
    #[error("division by zero")]
    DivideByZero,

    /// Grouping separator would be read as part of a number
    #[error("'{0}' cannot be used as a group separator")]
    InvalidSeparator(char),

    /// Number format configuration could not be loaded
    #[error("invalid format config: {0}")]
    Config(#[from] serde_json::Error),
}
