//! Core calculator types and the transition function.
//!
//! This module contains the pure core of one calculator:
//! - Input events via `InputItem` and the fixed keypad layout
//! - The `State` trait for inspecting states
//! - `CalculatorState`, the state machine itself
//!
//! All logic in this module is pure (no side effects). Each input
//! produces a new state value; nothing is mutated in place.

mod calculator;
mod item;
mod state;

pub use calculator::CalculatorState;
pub use item::{keypad, BinaryOp, ButtonKind, Command, InputItem, Operator};
pub use state::State;
