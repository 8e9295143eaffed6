//! Input events consumed by the calculator state machine.

use serde::{Deserialize, Serialize};

/// Unary actions that carry no numeric argument.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Command {
    Clear,
    Negate,
    Percent,
}

impl Command {
    /// Keypad caption.
    pub fn title(self) -> &'static str {
        match self {
            Self::Clear => "AC",
            Self::Negate => "+/-",
            Self::Percent => "%",
        }
    }
}

/// Operator keys, including `=`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equals,
}

impl Operator {
    /// The binary operation this key starts, or `None` for `=`.
    pub fn binary(self) -> Option<BinaryOp> {
        match self {
            Self::Add => Some(BinaryOp::Add),
            Self::Subtract => Some(BinaryOp::Subtract),
            Self::Multiply => Some(BinaryOp::Multiply),
            Self::Divide => Some(BinaryOp::Divide),
            Self::Equals => None,
        }
    }

    /// Keypad caption, also used in record strings.
    pub fn symbol(self) -> &'static str {
        match self.binary() {
            Some(op) => op.symbol(),
            None => "=",
        }
    }
}

/// An operator that can sit in a pending binary operation.
///
/// `=` is deliberately absent: it is only ever an input, never stored.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Symbol used on the keypad and in record strings.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "x",
            Self::Divide => "÷",
        }
    }
}

impl From<BinaryOp> for Operator {
    fn from(op: BinaryOp) -> Self {
        match op {
            BinaryOp::Add => Self::Add,
            BinaryOp::Subtract => Self::Subtract,
            BinaryOp::Multiply => Self::Multiply,
            BinaryOp::Divide => Self::Divide,
        }
    }
}

/// Keypad button category, used by hosts to pick a colour.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonKind {
    Command,
    Digit,
    Operator,
}

/// One discrete input event.
///
/// `CrossFeedValue` is synthesized by the dual coordinator from the other
/// calculator's display; it never comes from a keypad button.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum InputItem {
    Command(Command),
    Digit(u8),
    Operator(Operator),
    DecimalPoint,
    CrossFeedValue(String),
}

impl InputItem {
    /// Button caption; a cross-fed value is shown as itself.
    pub fn title(&self) -> String {
        match self {
            Self::Command(command) => command.title().to_string(),
            Self::Digit(digit) => digit.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::DecimalPoint => ".".to_string(),
            Self::CrossFeedValue(value) => value.clone(),
        }
    }

    /// Button category, or `None` for a cross-fed value, which has no key.
    pub fn kind(&self) -> Option<ButtonKind> {
        match self {
            Self::Command(_) => Some(ButtonKind::Command),
            Self::Digit(_) | Self::DecimalPoint => Some(ButtonKind::Digit),
            Self::Operator(_) => Some(ButtonKind::Operator),
            Self::CrossFeedValue(_) => None,
        }
    }

    /// The zero key spans two button widths.
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Digit(0))
    }

    /// Whether this is the `AC` key.
    pub fn is_clear(&self) -> bool {
        matches!(self, Self::Command(Command::Clear))
    }

    /// Whether this value was fed in from the other calculator.
    pub fn is_cross_feed(&self) -> bool {
        matches!(self, Self::CrossFeedValue(_))
    }
}

/// The fixed 5x4 keypad, top row first. The last row has three keys
/// because zero is double width.
pub fn keypad() -> Vec<Vec<InputItem>> {
    use InputItem::{Command as Cmd, DecimalPoint, Digit, Operator as Op};

    vec![
        vec![
            Cmd(Command::Clear),
            Cmd(Command::Negate),
            Cmd(Command::Percent),
            Op(Operator::Divide),
        ],
        vec![Digit(7), Digit(8), Digit(9), Op(Operator::Multiply)],
        vec![Digit(4), Digit(5), Digit(6), Op(Operator::Subtract)],
        vec![Digit(1), Digit(2), Digit(3), Op(Operator::Add)],
        vec![Digit(0), DecimalPoint, Op(Operator::Equals)],
    ]
}
