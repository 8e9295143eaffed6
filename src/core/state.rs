//! State trait shared by calculator states.
//!
//! The trait exposes pure inspection methods used for logging and by the
//! presentation layer without matching on concrete variants.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are immutable values: applying an input
/// produces a brand-new state rather than mutating the old one.
///
/// # Required Traits
///
/// - `Clone`: states are copied into replay and undo paths
/// - `PartialEq`: transitions are compared in tests and property checks
/// - `Debug`: states are debuggable for diagnostics
/// - `Serialize` + `Deserialize`: hosts may snapshot a session in memory
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }

    /// Check if the active operand still accepts digits and a point.
    ///
    /// Default implementation returns `false`.
    fn is_pending(&self) -> bool {
        false
    }
}
