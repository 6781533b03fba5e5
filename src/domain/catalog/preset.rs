//! Named presets that map a business intent onto a full selection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{AllocationStrategy, CapacityTier, EngagementType, PaymentOption};
use crate::domain::foundation::{ModuleId, ParameterId, PresetId};

/// A module included by a preset, optionally pinned to a variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetModule {
    pub module: ModuleId,
    /// None means the module's default (first) variant.
    #[serde(default)]
    pub variant: Option<EngagementType>,
}

/// A business intent expressed as a ready-made selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: PresetId,
    /// Short label of the business intent, e.g. "Launch a new product line".
    pub intent: String,
    #[serde(default)]
    pub description: String,
    pub modules: Vec<PresetModule>,
    pub allocation: AllocationStrategy,
    pub payment: PaymentOption,
    /// Parameters not listed fall back to their catalog defaults.
    #[serde(default)]
    pub parameters: BTreeMap<ParameterId, bool>,
    #[serde(default)]
    pub recommended_tier: Option<CapacityTier>,
}
