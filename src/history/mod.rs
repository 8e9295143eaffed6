//! Input logs and the record strings replayed from them.
//!
//! The calculator state is kept incrementally by its owner. The log exists
//! alongside it so the record trail can be re-derived and so a cross-fed
//! value can be withdrawn by replaying everything before it.

mod log;
mod record;

pub use log::InputLog;
pub use record::{build_record, latest_record};
