//! Resource-allocation strategies and their switching overheads.

use serde::{Deserialize, Serialize};

use super::table::CatalogKey;
use crate::domain::foundation::Percentage;

/// How effort is spread across concurrently active initiatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationStrategy {
    /// One initiative at a time. No switching overhead.
    Focused,

    /// Two initiatives run side by side.
    Parallel,

    /// Effort spread across a portfolio of initiatives.
    Portfolio,
}

impl AllocationStrategy {
    /// Returns the display name for this strategy.
    pub fn display_name(&self) -> &'static str {
        match self {
            AllocationStrategy::Focused => "Focused",
            AllocationStrategy::Parallel => "Parallel",
            AllocationStrategy::Portfolio => "Portfolio",
        }
    }
}

impl CatalogKey for AllocationStrategy {
    const ALL: &'static [Self] = &[
        AllocationStrategy::Focused,
        AllocationStrategy::Parallel,
        AllocationStrategy::Portfolio,
    ];

    fn key(&self) -> &'static str {
        match self {
            AllocationStrategy::Focused => "focused",
            AllocationStrategy::Parallel => "parallel",
            AllocationStrategy::Portfolio => "portfolio",
        }
    }

    fn index(&self) -> usize {
        match self {
            AllocationStrategy::Focused => 0,
            AllocationStrategy::Parallel => 1,
            AllocationStrategy::Portfolio => 2,
        }
    }
}

impl std::fmt::Display for AllocationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Configured behaviour of an allocation strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationProfile {
    pub strategy: AllocationStrategy,
    pub label: String,
    /// Extra work consumed when focus is split.
    pub switching_overhead: Percentage,
    /// Production multiplier. Always 1: overhead affects consumption only.
    pub output_multiplier: f64,
}

impl AllocationProfile {
    /// Returns true when the strategy carries no switching overhead.
    pub fn is_zero_overhead(&self) -> bool {
        self.switching_overhead.is_zero()
    }

    /// Human readable description used by presenters.
    pub fn describe(&self) -> String {
        if self.is_zero_overhead() {
            format!("{} (no switching overhead)", self.label)
        } else {
            format!(
                "{} (+{} switching overhead on required work)",
                self.label, self.switching_overhead
            )
        }
    }
}
