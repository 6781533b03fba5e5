//! Raw catalog document as read from YAML.
//!
//! Only shape and per-value syntax are checked here. Cross references and
//! numeric ranges are validated by [`Catalog::from_document`](super::Catalog::from_document).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{
    AllocationStrategy, CapacityTier, ModuleCatalogEntry, PaymentOption, Preset, ServiceParameter,
    VolumeDiscountTier,
};
use crate::domain::foundation::Percentage;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Price of one work unit before any discount.
    pub base_unit_price: f64,
    pub defaults: CatalogDefaults,
    pub allocation_strategies: BTreeMap<AllocationStrategy, AllocationEntry>,
    pub capacity_tiers: BTreeMap<CapacityTier, CapacityEntry>,
    pub payment_options: BTreeMap<PaymentOption, PaymentEntry>,
    #[serde(default)]
    pub volume_discounts: Vec<VolumeDiscountTier>,
    #[serde(default)]
    pub parameters: Vec<ServiceParameter>,
    pub modules: Vec<ModuleCatalogEntry>,
    #[serde(default)]
    pub presets: Vec<Preset>,
}

/// Selection defaults used at cold start and after a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDefaults {
    pub allocation: AllocationStrategy,
    pub capacity_tier: CapacityTier,
    pub payment: PaymentOption,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub label: String,
    pub switching_overhead: Percentage,
    #[serde(default = "default_output_multiplier")]
    pub output_multiplier: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityEntry {
    pub label: String,
    pub weekly_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentEntry {
    pub label: String,
    pub price_multiplier: f64,
}

fn default_output_multiplier() -> f64 {
    1.0
}
