//! Capacity Resolver - Weekly capacity and add-on surcharges.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Catalog, CostKind};
use crate::domain::foundation::ParameterId;
use crate::domain::selection::Selection;

/// Weekly work units charged for one enabled add-on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOnLine {
    pub parameter: ParameterId,
    pub label: String,
    pub kind: CostKind,
    /// Configured rule value (units or percent).
    pub rule_value: f64,
    pub work_units: f64,
}

/// Output of [`CapacityResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityEstimate {
    /// Tier rate rounded up. Drives the timeline.
    pub base_capacity: f64,
    pub total_add_on_cost: f64,
    /// Base capacity plus add-ons. Drives pricing only.
    pub pricing_capacity: f64,
    pub add_ons: Vec<AddOnLine>,
}

/// Resolves weekly capacity figures for a selection.
pub struct CapacityResolver;

impl CapacityResolver {
    /// Computes base capacity from the selected tier and prices enabled
    /// add-ons on top of it.
    ///
    /// Add-ons consume budget but do not accelerate module work, so
    /// `pricing_capacity` is kept apart from `base_capacity`. With no modules
    /// selected no team capacity is booked and only add-ons are priced.
    pub fn resolve(selection: &Selection, catalog: &Catalog) -> CapacityEstimate {
        let base_capacity = catalog.capacity(selection.capacity_tier()).base_capacity();

        let add_ons: Vec<AddOnLine> = catalog
            .parameters()
            .iter()
            .filter(|p| selection.is_parameter_enabled(&p.id))
            .filter_map(|p| {
                p.cost.map(|rule| AddOnLine {
                    parameter: p.id.clone(),
                    label: p.label.clone(),
                    kind: rule.kind,
                    rule_value: rule.value,
                    work_units: rule.surcharge(base_capacity),
                })
            })
            .collect();

        let total_add_on_cost: f64 = add_ons.iter().map(|a| a.work_units).sum();
        let booked_capacity = if selection.modules().is_empty() {
            0.0
        } else {
            base_capacity
        };

        CapacityEstimate {
            base_capacity,
            total_add_on_cost,
            pricing_capacity: booked_capacity + total_add_on_cost,
            add_ons,
        }
    }
}
