//! Dual-calculator coordination.
//!
//! Two calculators run side by side. Either one can push its displayed
//! value into the other as a committed input, and the most recent push
//! can be withdrawn.

mod coordinator;

pub use coordinator::{CrossFeed, DualCalculator, Side};
