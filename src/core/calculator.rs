//! The calculator state machine.
//!
//! [`CalculatorState::apply`] is the whole transition function: one input
//! in, one new state out. It is total. Any numeric failure (an unparsable
//! operand or division by zero) collapses into [`CalculatorState::Error`],
//! which every later input recovers from.

use super::item::{BinaryOp, Command, InputItem};
use super::state::State;
use crate::number::{
    append_decimal_point, append_digit, evaluate, negate, parse_operand, percent, NumberFormat,
    Result, ERROR_DISPLAY,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Position of one calculator within a computation.
///
/// Operands are canonical decimal strings. Binary operations are evaluated
/// strictly in entry order: `2 + 2 x 3 =` is `(2 + 2) x 3`.
///
/// # Example
///
/// ```rust
/// use bicalc::core::{CalculatorState, InputItem, Operator};
///
/// let state = [
///     InputItem::Digit(8),
///     InputItem::Digit(9),
///     InputItem::Operator(Operator::Multiply),
///     InputItem::Digit(1),
///     InputItem::Digit(5),
///     InputItem::Operator(Operator::Equals),
/// ]
/// .iter()
/// .fold(CalculatorState::initial(), |state, item| state.apply(item));
///
/// assert_eq!(state, CalculatorState::LeftDone("1335".to_string()));
/// assert_eq!(state.output(), "1,335");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CalculatorState {
    /// First operand under construction
    LeftPending(String),
    /// First operand is a finished result; a digit starts a fresh number
    LeftDone(String),
    /// Operator chosen, second operand not started
    LeftOp { left: String, op: BinaryOp },
    /// Second operand under construction
    LeftOpRightPending {
        left: String,
        op: BinaryOp,
        right: String,
    },
    /// Second operand committed but the operation not yet evaluated
    LeftOpRightDone {
        left: String,
        op: BinaryOp,
        right: String,
    },
    /// An invalid operation occurred
    Error,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::initial()
    }
}

impl State for CalculatorState {
    fn name(&self) -> &str {
        match self {
            Self::LeftPending(_) => "LeftPending",
            Self::LeftDone(_) => "LeftDone",
            Self::LeftOp { .. } => "LeftOp",
            Self::LeftOpRightPending { .. } => "LeftOpRightPending",
            Self::LeftOpRightDone { .. } => "LeftOpRightDone",
            Self::Error => "Error",
        }
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    fn is_pending(&self) -> bool {
        matches!(self, Self::LeftPending(_) | Self::LeftOpRightPending { .. })
    }
}

impl CalculatorState {
    /// The state shown at start-up and after `AC`.
    pub fn initial() -> Self {
        Self::LeftPending(String::from("0"))
    }

    /// Apply one input, producing the next state.
    pub fn apply(&self, item: &InputItem) -> Self {
        let next = match item {
            InputItem::Digit(digit) => self.take_digit(*digit),
            InputItem::DecimalPoint => Ok(self.take_decimal_point()),
            InputItem::Command(Command::Clear) => Ok(Self::initial()),
            InputItem::Command(Command::Negate) => Ok(self.take_negate()),
            InputItem::Command(Command::Percent) => self.take_percent(),
            InputItem::Operator(op) => match op.binary() {
                Some(op) => self.take_operator(op),
                None => self.take_equals(),
            },
            InputItem::CrossFeedValue(value) => self.take_cross_feed(value),
        };

        match next {
            Ok(state) => {
                trace!(from = self.name(), to = state.name(), input = %item.title(), "applied input");
                state
            }
            Err(err) => {
                debug!(from = self.name(), input = %item.title(), error = %err, "input collapsed into error state");
                Self::Error
            }
        }
    }

    fn take_digit(&self, digit: u8) -> Result<Self> {
        let next = match self {
            Self::LeftPending(left) => Self::LeftPending(append_digit(left, digit)?),
            Self::LeftDone(_) | Self::LeftOpRightDone { .. } | Self::Error => {
                Self::LeftPending(append_digit("0", digit)?)
            }
            Self::LeftOp { left, op } => Self::LeftOpRightPending {
                left: left.clone(),
                op: *op,
                right: append_digit("0", digit)?,
            },
            Self::LeftOpRightPending { left, op, right } => Self::LeftOpRightPending {
                left: left.clone(),
                op: *op,
                right: append_digit(right, digit)?,
            },
        };
        Ok(next)
    }

    fn take_decimal_point(&self) -> Self {
        match self {
            Self::LeftPending(left) => Self::LeftPending(append_decimal_point(left)),
            Self::LeftDone(_) | Self::LeftOpRightDone { .. } | Self::Error => {
                Self::LeftPending(String::from("0."))
            }
            Self::LeftOp { left, op } => Self::LeftOpRightPending {
                left: left.clone(),
                op: *op,
                right: String::from("0."),
            },
            Self::LeftOpRightPending { left, op, right } => Self::LeftOpRightPending {
                left: left.clone(),
                op: *op,
                right: append_decimal_point(right),
            },
        }
    }

    fn take_negate(&self) -> Self {
        match self {
            Self::LeftPending(left) => Self::LeftPending(negate(left)),
            Self::LeftDone(left) => Self::LeftDone(negate(left)),
            Self::LeftOp { left, op } => Self::LeftOpRightPending {
                left: left.clone(),
                op: *op,
                right: String::from("-0"),
            },
            Self::LeftOpRightPending { left, op, right } => Self::LeftOpRightPending {
                left: left.clone(),
                op: *op,
                right: negate(right),
            },
            Self::LeftOpRightDone { right, .. } => Self::LeftPending(negate(right)),
            Self::Error => Self::LeftPending(String::from("-0")),
        }
    }

    fn take_percent(&self) -> Result<Self> {
        let next = match self {
            Self::LeftPending(left) | Self::LeftDone(left) => Self::LeftDone(percent(left)?),
            Self::LeftOp { left, op } => Self::LeftOp {
                left: percent(left)?,
                op: *op,
            },
            Self::LeftOpRightPending { left, op, right }
            | Self::LeftOpRightDone { left, op, right } => Self::LeftOpRightDone {
                left: left.clone(),
                op: *op,
                right: percent(right)?,
            },
            Self::Error => Self::initial(),
        };
        Ok(next)
    }

    fn take_operator(&self, new_op: BinaryOp) -> Result<Self> {
        let next = match self {
            Self::LeftPending(left) | Self::LeftDone(left) | Self::LeftOp { left, .. } => {
                Self::LeftOp {
                    left: left.clone(),
                    op: new_op,
                }
            }
            Self::LeftOpRightPending { left, op, right }
            | Self::LeftOpRightDone { left, op, right } => Self::LeftOp {
                left: evaluate(left, *op, right)?,
                op: new_op,
            },
            Self::Error => Self::LeftOp {
                left: String::from("0"),
                op: new_op,
            },
        };
        Ok(next)
    }

    fn take_equals(&self) -> Result<Self> {
        let next = match self {
            Self::LeftPending(left) | Self::LeftDone(left) => Self::LeftDone(left.clone()),
            // No right operand was entered: the left operand doubles as the right.
            Self::LeftOp { left, op } => Self::LeftDone(evaluate(left, *op, left)?),
            Self::LeftOpRightPending { left, op, right }
            | Self::LeftOpRightDone { left, op, right } => {
                Self::LeftDone(evaluate(left, *op, right)?)
            }
            Self::Error => Self::initial(),
        };
        Ok(next)
    }

    /// A cross-fed value always lands committed, never digit-appendable.
    fn take_cross_feed(&self, value: &str) -> Result<Self> {
        parse_operand(value)?;

        let next = match self {
            Self::LeftPending(_) | Self::LeftDone(_) | Self::Error => {
                Self::LeftDone(value.to_string())
            }
            Self::LeftOp { left, op }
            | Self::LeftOpRightPending { left, op, .. }
            | Self::LeftOpRightDone { left, op, .. } => Self::LeftOpRightDone {
                left: left.clone(),
                op: *op,
                right: value.to_string(),
            },
        };
        Ok(next)
    }

    /// First operand, absent on `Error`.
    pub fn left(&self) -> Option<&str> {
        match self {
            Self::LeftPending(left)
            | Self::LeftDone(left)
            | Self::LeftOp { left, .. }
            | Self::LeftOpRightPending { left, .. }
            | Self::LeftOpRightDone { left, .. } => Some(left.as_str()),
            Self::Error => None,
        }
    }

    /// Pending binary operation, if one has been chosen.
    pub fn op(&self) -> Option<BinaryOp> {
        match self {
            Self::LeftOp { op, .. }
            | Self::LeftOpRightPending { op, .. }
            | Self::LeftOpRightDone { op, .. } => Some(*op),
            Self::LeftPending(_) | Self::LeftDone(_) | Self::Error => None,
        }
    }

    /// Second operand, if one has been started.
    pub fn right(&self) -> Option<&str> {
        match self {
            Self::LeftOpRightPending { right, .. } | Self::LeftOpRightDone { right, .. } => {
                Some(right.as_str())
            }
            Self::LeftPending(_) | Self::LeftDone(_) | Self::LeftOp { .. } | Self::Error => None,
        }
    }

    /// Display string using default grouping.
    pub fn output(&self) -> String {
        self.output_with(&NumberFormat::default())
    }

    /// Display string for the active operand.
    pub fn output_with(&self, format: &NumberFormat) -> String {
        match self {
            Self::LeftPending(left) => format.pending(left),
            Self::LeftOpRightPending { right, .. } => format.pending(right),
            Self::LeftDone(left) | Self::LeftOp { left, .. } => format.finished(left),
            Self::LeftOpRightDone { right, .. } => format.finished(right),
            Self::Error => ERROR_DISPLAY.to_string(),
        }
    }
}
