//! Work Estimator - Required work from selected modules and allocation overhead.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Catalog, EngagementType};
use crate::domain::foundation::{ModuleId, Percentage};
use crate::domain::selection::Selection;

/// Work contributed by one selected module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleWorkLine {
    pub module: ModuleId,
    pub name: String,
    pub pillar: String,
    pub engagement: EngagementType,
    pub work_units: f64,
    /// True when no variant was chosen and the first catalog variant was used.
    pub defaulted: bool,
}

/// Output of [`WorkEstimator::estimate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkEstimate {
    /// Sum of variant costs.
    pub base_work: f64,
    /// Base work after switching overhead.
    pub effective_work: f64,
    pub switching_overhead: Percentage,
    /// One line per selected module, in selection order.
    pub lines: Vec<ModuleWorkLine>,
}

/// Computes base and effective work.
pub struct WorkEstimator;

impl WorkEstimator {
    /// Sums the chosen (or default) variant cost of every selected module and
    /// applies the allocation strategy's switching overhead.
    ///
    /// # Edge Cases
    /// - No modules: base and effective work are both 0
    /// - No variant chosen: the module's first catalog variant is used
    /// - Zero-overhead strategy: effective work equals base work exactly
    pub fn estimate(selection: &Selection, catalog: &Catalog) -> WorkEstimate {
        let lines: Vec<ModuleWorkLine> = selection
            .modules()
            .iter()
            .filter_map(|id| Self::line_for(selection, catalog, id))
            .collect();

        let base_work: f64 = lines.iter().map(|l| l.work_units).sum();
        let overhead = catalog.allocation(selection.allocation()).switching_overhead;

        WorkEstimate {
            base_work,
            effective_work: overhead.apply_surcharge(base_work),
            switching_overhead: overhead,
            lines,
        }
    }

    fn line_for(selection: &Selection, catalog: &Catalog, id: &ModuleId) -> Option<ModuleWorkLine> {
        let Some(module) = catalog.module(id) else {
            // Selections are validated on mutation; this only happens when a
            // selection is reused against a different catalog.
            tracing::warn!(module = %id, "Selected module missing from catalog, skipping");
            return None;
        };

        let chosen = selection
            .variant(id)
            .and_then(|engagement| module.variant(engagement));
        let defaulted = chosen.is_none();
        let variant = chosen.or_else(|| module.default_variant())?;

        Some(ModuleWorkLine {
            module: id.clone(),
            name: module.name.clone(),
            pillar: module.pillar.clone(),
            engagement: variant.engagement,
            work_units: variant.work_units,
            defaulted,
        })
    }
}
