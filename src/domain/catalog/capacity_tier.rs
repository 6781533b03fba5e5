//! Weekly production-capacity tiers.

use serde::{Deserialize, Serialize};

use super::table::CatalogKey;
use crate::domain::foundation::ceil_stable;

/// Selectable weekly throughput level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityTier {
    Pilot,
    Core,
    Accelerated,
    Enterprise,
}

impl CapacityTier {
    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            CapacityTier::Pilot => "Pilot",
            CapacityTier::Core => "Core",
            CapacityTier::Accelerated => "Accelerated",
            CapacityTier::Enterprise => "Enterprise",
        }
    }
}

impl CatalogKey for CapacityTier {
    const ALL: &'static [Self] = &[
        CapacityTier::Pilot,
        CapacityTier::Core,
        CapacityTier::Accelerated,
        CapacityTier::Enterprise,
    ];

    fn key(&self) -> &'static str {
        match self {
            CapacityTier::Pilot => "pilot",
            CapacityTier::Core => "core",
            CapacityTier::Accelerated => "accelerated",
            CapacityTier::Enterprise => "enterprise",
        }
    }

    fn index(&self) -> usize {
        match self {
            CapacityTier::Pilot => 0,
            CapacityTier::Core => 1,
            CapacityTier::Accelerated => 2,
            CapacityTier::Enterprise => 3,
        }
    }
}

impl std::fmt::Display for CapacityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Configured output rate of a capacity tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityProfile {
    pub tier: CapacityTier,
    pub label: String,
    /// Work units produced per week. Always > 0 once loaded.
    pub weekly_rate: f64,
}

impl CapacityProfile {
    /// Weekly rate rounded up to a whole number of work units.
    pub fn base_capacity(&self) -> f64 {
        ceil_stable(self.weekly_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_capacity_rounds_fractional_rates_up() {
        let profile = CapacityProfile {
            tier: CapacityTier::Core,
            label: "Core".to_string(),
            weekly_rate: 37.2,
        };
        assert_eq!(profile.base_capacity(), 38.0);
    }

    #[test]
    fn base_capacity_keeps_whole_rates() {
        let profile = CapacityProfile {
            tier: CapacityTier::Pilot,
            label: "Pilot".to_string(),
            weekly_rate: 20.0,
        };
        assert_eq!(profile.base_capacity(), 20.0);
    }

    #[test]
    fn tiers_are_ordered_by_size() {
        assert!(CapacityTier::Pilot < CapacityTier::Enterprise);
        assert_eq!(CapacityTier::Accelerated.index(), 2);
    }
}
