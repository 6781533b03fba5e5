//! Catalog module - Static configuration consumed by the quote engine.
//!
//! # Module Structure
//!
//! - `engagement` - Engagement types (module variants)
//! - `module` - Module catalog entries and variants
//! - `allocation` - Allocation strategies and switching overhead
//! - `capacity_tier` - Weekly capacity tiers
//! - `payment` - Payment options and price multipliers
//! - `parameter` - Optional add-ons and their cost rules
//! - `discount` - Marginal volume-discount schedule
//! - `preset` - Business-intent presets
//! - `document` - Raw YAML document shape
//! - `catalog` - Validated, immutable catalog

mod allocation;
mod capacity_tier;
mod catalog;
mod discount;
mod document;
mod engagement;
mod errors;
mod module;
mod parameter;
mod payment;
mod preset;
mod table;

pub use allocation::{AllocationProfile, AllocationStrategy};
pub use capacity_tier::{CapacityProfile, CapacityTier};
pub use catalog::Catalog;
pub use discount::{DiscountBand, DiscountSchedule, VolumeDiscountTier};
pub use document::{AllocationEntry, CapacityEntry, CatalogDefaults, CatalogDocument, PaymentEntry};
pub use engagement::EngagementType;
pub use errors::CatalogError;
pub use module::{ModuleCatalogEntry, Variant};
pub use parameter::{CostKind, CostRule, ServiceParameter};
pub use payment::{PaymentOption, PaymentTerms};
pub use preset::{Preset, PresetModule};
pub use table::{CatalogKey, KeyedTable};

#[cfg(test)]
pub(crate) mod fixtures;
