//! Input log for one calculator.
//!
//! The log is immutable: `record` and the other edit methods return a new
//! log, leaving the original untouched.

use crate::core::{CalculatorState, InputItem};
use serde::{Deserialize, Serialize};

/// Ordered record of accepted inputs.
///
/// Every log starts with an implicit `Digit(0)` seed standing for the
/// initial "0" on the display. The seed is never replayed or removed.
///
/// # Example
///
/// ```rust
/// use bicalc::core::{InputItem, Operator};
/// use bicalc::history::InputLog;
///
/// let log = InputLog::new()
///     .record(InputItem::Digit(7))
///     .record(InputItem::Operator(Operator::Add))
///     .record(InputItem::Digit(3));
///
/// assert_eq!(log.inputs().len(), 3);
/// assert_eq!(log.items().len(), 4); // seed included
/// assert_eq!(log.replay().output(), "3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLog {
    items: Vec<InputItem>,
}

impl Default for InputLog {
    fn default() -> Self {
        Self::new()
    }
}

impl InputLog {
    /// Create a log holding only the seed entry.
    pub fn new() -> Self {
        Self {
            items: vec![InputItem::Digit(0)],
        }
    }

    /// Record an input, returning a new log.
    ///
    /// ```rust
    /// use bicalc::core::InputItem;
    /// use bicalc::history::InputLog;
    ///
    /// let log = InputLog::new();
    /// let longer = log.record(InputItem::Digit(4));
    ///
    /// assert_eq!(longer.inputs().len(), 1);
    /// assert_eq!(log.inputs().len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, item: InputItem) -> Self {
        let mut items = self.items.clone();
        items.push(item);
        Self { items }
    }

    /// A log truncated back to the seed entry.
    pub fn cleared(&self) -> Self {
        Self::new()
    }

    /// All entries, seed first.
    pub fn items(&self) -> &[InputItem] {
        &self.items
    }

    /// Entries after the seed, in the order they were accepted.
    pub fn inputs(&self) -> &[InputItem] {
        self.items.get(1..).unwrap_or_default()
    }

    /// Most recent input, or `None` if only the seed is present.
    pub fn last_input(&self) -> Option<&InputItem> {
        self.inputs().last()
    }

    /// Drop the last entry if it is a cross-fed value.
    ///
    /// Returns `None` when the last entry is anything else, including the
    /// seed.
    pub fn without_last_cross_feed(&self) -> Option<Self> {
        if !self.last_input()?.is_cross_feed() {
            return None;
        }

        let mut items = self.items.clone();
        items.pop();
        Some(Self { items })
    }

    /// Rebuild the calculator state by applying every input to the initial
    /// state.
    pub fn replay(&self) -> CalculatorState {
        self.inputs()
            .iter()
            .fold(CalculatorState::initial(), |state, item| state.apply(item))
    }
}
