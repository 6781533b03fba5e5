//! Quote engine - Runs the full recompute pipeline.

use super::{CapacityResolver, PricingResolver, Quote, QuoteConfiguration, TimelineEstimator, WorkEstimator};
use crate::domain::catalog::Catalog;
use crate::domain::selection::Selection;

/// Stateless entry point for recomputation.
///
/// Work → capacity → timeline → pricing → presentation, recomputed in full on
/// every call. Inputs are only borrowed and never modified.
pub struct QuoteEngine;

impl QuoteEngine {
    /// Derives a fresh [`Quote`] from the current selection.
    pub fn recompute(selection: &Selection, catalog: &Catalog) -> Quote {
        let work = WorkEstimator::estimate(selection, catalog);
        let capacity = CapacityResolver::resolve(selection, catalog);
        let completion_weeks = TimelineEstimator::completion_weeks(work.effective_work, capacity.base_capacity);
        let payment = catalog.payment(selection.payment());
        let price = PricingResolver::resolve(
            capacity.pricing_capacity,
            catalog.base_unit_price(),
            catalog.discounts(),
            payment.price_multiplier,
        );

        tracing::debug!(
            revision = selection.revision(),
            base_work = work.base_work,
            effective_work = work.effective_work,
            pricing_capacity = capacity.pricing_capacity,
            completion_weeks,
            final_price = price.final_price,
            "Recomputed quote"
        );

        let configuration = QuoteConfiguration {
            status: selection.status(),
            preset: selection.preset().cloned(),
            capacity_tier: selection.capacity_tier(),
            allocation: selection.allocation(),
            payment: selection.payment(),
        };

        Quote::assemble(
            configuration,
            catalog.allocation(selection.allocation()),
            work,
            capacity,
            completion_weeks,
            price,
        )
    }
}
