//! Errors raised when a selection mutation references the catalog.

use thiserror::Error;

use crate::domain::catalog::EngagementType;
use crate::domain::foundation::{ModuleId, ParameterId, PresetId};

/// A mutation was rejected because it does not match the catalog.
///
/// The selection is left unchanged when any of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Module '{0}' is not in the catalog")]
    UnknownModule(ModuleId),

    #[error("Module '{module}' has no '{engagement}' variant")]
    UnknownVariant {
        module: ModuleId,
        engagement: EngagementType,
    },

    #[error("Module '{0}' is not selected")]
    ModuleNotSelected(ModuleId),

    #[error("Parameter '{0}' is not in the catalog")]
    UnknownParameter(ParameterId),

    #[error("Preset '{0}' is not in the catalog")]
    UnknownPreset(PresetId),
}
