//! Selection module - Caller-owned user choices.
//!
//! - `selection` - The Selection value and its validated mutations
//! - `status` - Default/Configured lifecycle
//! - `errors` - Rejected mutations

mod errors;
mod selection;
mod status;

pub use errors::SelectionError;
pub use selection::Selection;
pub use status::{SelectionEvent, SelectionStatus};
