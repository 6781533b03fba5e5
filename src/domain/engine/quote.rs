//! Presenter - Immutable snapshot of everything derived from a selection.

use serde::{Deserialize, Serialize};

use super::{AddOnLine, BandCharge, CapacityEstimate, ModuleWorkLine, PriceBreakdown, WorkEstimate};
use crate::domain::catalog::{AllocationProfile, AllocationStrategy, CapacityTier, PaymentOption};
use crate::domain::foundation::{Percentage, PresetId};
use crate::domain::selection::SelectionStatus;

/// The choices a quote was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteConfiguration {
    pub status: SelectionStatus,
    pub preset: Option<PresetId>,
    pub capacity_tier: CapacityTier,
    pub allocation: AllocationStrategy,
    pub payment: PaymentOption,
}

/// Derived values for display and export.
///
/// Headline figures sit at the top level; the breakdown vectors explain how
/// they were reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub configuration: QuoteConfiguration,

    pub base_work: f64,
    pub effective_work: f64,
    pub base_capacity: f64,
    pub pricing_capacity: f64,
    pub completion_weeks: u32,
    pub final_price: f64,
    pub effective_unit_price: f64,
    pub volume_discount_percentage: f64,
    pub allocation_description: String,

    pub switching_overhead: Percentage,
    pub total_add_on_cost: f64,
    pub discounted_price: f64,
    pub payment_multiplier: f64,
    pub base_unit_price: f64,

    pub modules: Vec<ModuleWorkLine>,
    pub add_ons: Vec<AddOnLine>,
    pub bands: Vec<BandCharge>,
}

impl Quote {
    /// Packages estimator outputs. No arithmetic happens here.
    pub fn assemble(
        configuration: QuoteConfiguration,
        allocation: &AllocationProfile,
        work: WorkEstimate,
        capacity: CapacityEstimate,
        completion_weeks: u32,
        price: PriceBreakdown,
    ) -> Self {
        Self {
            configuration,
            base_work: work.base_work,
            effective_work: work.effective_work,
            base_capacity: capacity.base_capacity,
            pricing_capacity: capacity.pricing_capacity,
            completion_weeks,
            final_price: price.final_price,
            effective_unit_price: price.effective_unit_price,
            volume_discount_percentage: price.volume_discount_percentage,
            allocation_description: allocation.describe(),
            switching_overhead: work.switching_overhead,
            total_add_on_cost: capacity.total_add_on_cost,
            discounted_price: price.discounted_price,
            payment_multiplier: price.payment_multiplier,
            base_unit_price: price.base_unit_price,
            modules: work.lines,
            add_ons: capacity.add_ons,
            bands: price.bands,
        }
    }

    /// True when nothing has been selected yet.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Price of the whole engagement: weekly price times completion weeks.
    ///
    /// `None` when there is no delivery timeline, as for an add-on-only
    /// quote whose weekly price is still non-zero.
    pub fn engagement_total(&self) -> Option<f64> {
        if self.completion_weeks == 0 {
            return None;
        }
        Some(self.final_price * f64::from(self.completion_weeks))
    }
}
