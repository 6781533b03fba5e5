//! The caller-owned selection.

use serde::Serialize;
use std::collections::BTreeMap;

use super::{SelectionError, SelectionEvent, SelectionStatus};
use crate::domain::catalog::{
    AllocationStrategy, CapacityTier, Catalog, EngagementType, PaymentOption,
};
use crate::domain::foundation::{ModuleId, ParameterId, PresetId};

/// Current user choices.
///
/// A `Selection` is a plain value passed to the engine by reference. Every
/// mutation is validated against the catalog, so an existing selection never
/// references unknown modules, variants or parameters. The `revision` counter
/// increases on each successful mutation so callers can tell snapshots apart.
///
/// Selections can be serialised for display but not deserialised: the only
/// way to build one is [`Selection::new`] followed by validated mutations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    revision: u64,
    status: SelectionStatus,
    /// Selected modules in the order they were added.
    modules: Vec<ModuleId>,
    /// Explicit variant choices. Keys are always a subset of `modules`.
    variants: BTreeMap<ModuleId, EngagementType>,
    allocation: AllocationStrategy,
    capacity_tier: CapacityTier,
    payment: PaymentOption,
    parameters: BTreeMap<ParameterId, bool>,
    preset: Option<PresetId>,
}

impl Selection {
    /// Creates the cold-start selection for a catalog.
    pub fn new(catalog: &Catalog) -> Self {
        let defaults = catalog.defaults();
        Self {
            revision: 0,
            status: SelectionStatus::Default,
            modules: Vec::new(),
            variants: BTreeMap::new(),
            allocation: defaults.allocation,
            capacity_tier: defaults.capacity_tier,
            payment: defaults.payment,
            parameters: default_parameters(catalog),
            preset: None,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn status(&self) -> SelectionStatus {
        self.status
    }

    pub fn modules(&self) -> &[ModuleId] {
        &self.modules
    }

    pub fn is_selected(&self, id: &ModuleId) -> bool {
        self.modules.contains(id)
    }

    /// Explicitly chosen variant, if any.
    pub fn variant(&self, id: &ModuleId) -> Option<EngagementType> {
        self.variants.get(id).copied()
    }

    pub fn allocation(&self) -> AllocationStrategy {
        self.allocation
    }

    pub fn capacity_tier(&self) -> CapacityTier {
        self.capacity_tier
    }

    pub fn payment(&self) -> PaymentOption {
        self.payment
    }

    pub fn parameters(&self) -> &BTreeMap<ParameterId, bool> {
        &self.parameters
    }

    pub fn is_parameter_enabled(&self, id: &ParameterId) -> bool {
        self.parameters.get(id).copied().unwrap_or(false)
    }

    /// Preset most recently applied, cleared by a reset.
    pub fn preset(&self) -> Option<&PresetId> {
        self.preset.as_ref()
    }

    /// Compares user choices, ignoring the revision counter.
    pub fn same_choices(&self, other: &Selection) -> bool {
        Self {
            revision: other.revision,
            ..self.clone()
        } == *other
    }

    /// Adds a module. Selecting an already selected module is a no-op edit.
    pub fn select_module(&mut self, catalog: &Catalog, id: &ModuleId) -> Result<(), SelectionError> {
        if catalog.module(id).is_none() {
            return Err(SelectionError::UnknownModule(id.clone()));
        }
        if !self.is_selected(id) {
            self.modules.push(id.clone());
        }
        self.record(SelectionEvent::ManualEdit);
        Ok(())
    }

    /// Removes a module along with its variant choice.
    pub fn deselect_module(&mut self, id: &ModuleId) -> Result<(), SelectionError> {
        let position = self
            .modules
            .iter()
            .position(|m| m == id)
            .ok_or_else(|| SelectionError::ModuleNotSelected(id.clone()))?;
        self.modules.remove(position);
        self.variants.remove(id);
        self.record(SelectionEvent::ManualEdit);
        Ok(())
    }

    /// Selects the module if absent, deselects it otherwise.
    pub fn toggle_module(&mut self, catalog: &Catalog, id: &ModuleId) -> Result<(), SelectionError> {
        if self.is_selected(id) {
            self.deselect_module(id)
        } else {
            self.select_module(catalog, id)
        }
    }

    /// Chooses the engagement variant of a selected module.
    pub fn set_variant(
        &mut self,
        catalog: &Catalog,
        id: &ModuleId,
        engagement: EngagementType,
    ) -> Result<(), SelectionError> {
        let module = catalog
            .module(id)
            .ok_or_else(|| SelectionError::UnknownModule(id.clone()))?;
        if module.variant(engagement).is_none() {
            return Err(SelectionError::UnknownVariant {
                module: id.clone(),
                engagement,
            });
        }
        if !self.is_selected(id) {
            return Err(SelectionError::ModuleNotSelected(id.clone()));
        }
        self.variants.insert(id.clone(), engagement);
        self.record(SelectionEvent::ManualEdit);
        Ok(())
    }

    pub fn set_allocation(&mut self, strategy: AllocationStrategy) {
        self.allocation = strategy;
        self.record(SelectionEvent::ManualEdit);
    }

    pub fn set_capacity_tier(&mut self, tier: CapacityTier) {
        self.capacity_tier = tier;
        self.record(SelectionEvent::ManualEdit);
    }

    pub fn set_payment(&mut self, option: PaymentOption) {
        self.payment = option;
        self.record(SelectionEvent::ManualEdit);
    }

    pub fn set_parameter(
        &mut self,
        catalog: &Catalog,
        id: &ParameterId,
        enabled: bool,
    ) -> Result<(), SelectionError> {
        if catalog.parameter(id).is_none() {
            return Err(SelectionError::UnknownParameter(id.clone()));
        }
        self.parameters.insert(id.clone(), enabled);
        self.record(SelectionEvent::ManualEdit);
        Ok(())
    }

    /// Replaces the selection with a preset's choices.
    ///
    /// Modules, variants, allocation, payment and parameters are all taken
    /// from the preset; parameters it does not mention return to their catalog
    /// defaults. The capacity tier only changes when the preset recommends one.
    pub fn apply_preset(&mut self, catalog: &Catalog, id: &PresetId) -> Result<(), SelectionError> {
        let preset = catalog
            .preset(id)
            .ok_or_else(|| SelectionError::UnknownPreset(id.clone()))?;

        self.modules = preset.modules.iter().map(|m| m.module.clone()).collect();
        self.variants = preset
            .modules
            .iter()
            .filter_map(|m| m.variant.map(|v| (m.module.clone(), v)))
            .collect();
        self.allocation = preset.allocation;
        self.payment = preset.payment;
        self.parameters = default_parameters(catalog);
        for (parameter, enabled) in &preset.parameters {
            self.parameters.insert(parameter.clone(), *enabled);
        }
        if let Some(tier) = preset.recommended_tier {
            self.capacity_tier = tier;
        }
        self.preset = Some(preset.id.clone());

        tracing::debug!(preset = %preset.id, modules = self.modules.len(), "Applied preset");
        self.record(SelectionEvent::PresetApplied);
        Ok(())
    }

    /// Restores the cold-start choices. The revision keeps counting.
    pub fn reset(&mut self, catalog: &Catalog) {
        let revision = self.revision;
        *self = Self {
            revision,
            ..Self::new(catalog)
        };
        self.record(SelectionEvent::Reset);
    }

    fn record(&mut self, event: SelectionEvent) {
        self.revision += 1;
        self.status = self.status.on(event);
        if event == SelectionEvent::ManualEdit {
            self.preset = None;
        }
    }
}

fn default_parameters(catalog: &Catalog) -> BTreeMap<ParameterId, bool> {
    catalog
        .parameters()
        .iter()
        .map(|p| (p.id.clone(), p.default_enabled))
        .collect()
}
