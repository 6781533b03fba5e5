//! Engagement types offered as module variants.

use serde::{Deserialize, Serialize};

/// Depth of a consulting engagement for a single module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementType {
    /// Light advisory pass: assessment, roadmap, enablement.
    Primer,

    /// Full implementation carried out alongside the client team.
    IntegratedExecution,
}

impl EngagementType {
    /// All engagement types in display order.
    pub const ALL: [EngagementType; 2] = [EngagementType::Primer, EngagementType::IntegratedExecution];

    /// Returns the display name for this engagement type.
    pub fn display_name(&self) -> &'static str {
        match self {
            EngagementType::Primer => "Primer",
            EngagementType::IntegratedExecution => "Integrated Execution",
        }
    }
}

impl std::fmt::Display for EngagementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
