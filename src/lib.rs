//! Bicalc: a dual-pane calculator core
//!
//! Two independent four-function calculators share one display surface and
//! can feed each other's current result as a committed input. The core is
//! a pure state machine. Every keypress produces a new state value, and the
//! record trail is re-derived by replaying the input log.
//!
//! # Core Concepts
//!
//! - **Operands**: exact decimal strings, never binary floats
//! - **CalculatorState**: the transition function for one calculator
//! - **InputLog**: the replayable history behind the record string
//! - **DualCalculator**: routes input and handles cross-feed and its undo
//!
//! Presentation (layout, buttons, rotation) is left to the host, which
//! forwards button taps and reads back display and record strings.
//!
//! # Example
//!
//! ```rust
//! use bicalc::core::{InputItem, Operator};
//! use bicalc::dual::{CrossFeed, DualCalculator, Side};
//!
//! let mut calc = DualCalculator::new();
//!
//! for item in [
//!     InputItem::Digit(8),
//!     InputItem::Digit(9),
//!     InputItem::Operator(Operator::Multiply),
//!     InputItem::Digit(1),
//!     InputItem::Digit(5),
//!     InputItem::Operator(Operator::Equals),
//! ] {
//!     calc.apply(Side::Primary, item);
//! }
//! assert_eq!(calc.output(Side::Primary), "1,335");
//! assert_eq!(calc.record(Side::Primary), "89x15=1,335");
//!
//! calc.push_cross_feed(CrossFeed::PrimaryToSecondary);
//! assert_eq!(calc.output(Side::Secondary), "1,335");
//!
//! calc.undo_last_cross_feed();
//! assert_eq!(calc.output(Side::Secondary), "0");
//! ```

pub mod core;
pub mod dual;
pub mod history;
pub mod number;

// Re-export commonly used types
pub use self::core::{CalculatorState, InputItem, State};
pub use dual::{CrossFeed, DualCalculator, Side};
pub use history::InputLog;
pub use number::{CalcError, NumberFormat};
