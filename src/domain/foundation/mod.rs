//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, numeric helpers and error types
//! that form the vocabulary of the configurator domain.

mod errors;
mod ids;
mod numeric;
mod percentage;

pub use errors::ValidationError;
pub use ids::{ModuleId, ParameterId, PresetId};
pub use numeric::{ceil_stable, round_currency, round_to_places, STABLE_DECIMAL_PLACES};
pub use percentage::Percentage;
