//! Validated, immutable catalog.

use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use super::document::{AllocationEntry, CapacityEntry, CatalogDefaults, CatalogDocument, PaymentEntry};
use super::{
    AllocationProfile, AllocationStrategy, CapacityProfile, CapacityTier, CatalogError, CatalogKey,
    DiscountSchedule, KeyedTable, ModuleCatalogEntry, PaymentOption, PaymentTerms, Preset,
    ServiceParameter,
};
use crate::domain::foundation::{ModuleId, ParameterId, PresetId, ValidationError};

const BUNDLED_CATALOG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/catalog/default.yaml"));

static BUNDLED: Lazy<Result<Catalog, CatalogError>> = Lazy::new(|| Catalog::from_yaml_str(BUNDLED_CATALOG));

/// Everything the quote engine reads besides the selection.
///
/// A `Catalog` can only be obtained through validation, so every id, table
/// entry and discount band it exposes is known to be consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    base_unit_price: f64,
    defaults: CatalogDefaults,
    modules: Vec<ModuleCatalogEntry>,
    module_index: HashMap<ModuleId, usize>,
    allocation: KeyedTable<AllocationStrategy, AllocationProfile>,
    capacity: KeyedTable<CapacityTier, CapacityProfile>,
    payment: KeyedTable<PaymentOption, PaymentTerms>,
    parameters: Vec<ServiceParameter>,
    discounts: DiscountSchedule,
    presets: Vec<Preset>,
}

impl Catalog {
    /// Returns the catalog shipped with the crate.
    pub fn bundled() -> Result<&'static Catalog, CatalogError> {
        BUNDLED
            .as_ref()
            .map_err(|e| CatalogError::Bundled(e.to_string()))
    }

    /// Reads and validates a YAML catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_yaml_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            modules = catalog.modules.len(),
            presets = catalog.presets.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Parses and validates a YAML catalog document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_yaml::from_str(yaml)?;
        Ok(Self::from_document(document)?)
    }

    /// Validates a parsed document.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if:
    /// - The base unit price is not a positive number
    /// - A module id is duplicated or a module is malformed
    /// - An allocation strategy, capacity tier or payment option has no entry
    /// - Table values are out of range (rates, overheads, multipliers)
    /// - Discount tiers overlap or decrease
    /// - A parameter id is duplicated or its cost rule is negative
    /// - A preset references an unknown module, variant or parameter
    pub fn from_document(document: CatalogDocument) -> Result<Self, ValidationError> {
        let CatalogDocument {
            base_unit_price,
            defaults,
            allocation_strategies,
            capacity_tiers,
            payment_options,
            volume_discounts,
            parameters,
            modules,
            presets,
        } = document;

        if !base_unit_price.is_finite() || base_unit_price <= 0.0 {
            return Err(ValidationError::out_of_range(
                "base_unit_price",
                f64::MIN_POSITIVE,
                f64::MAX,
                base_unit_price,
            ));
        }

        if modules.is_empty() {
            return Err(ValidationError::empty_field("modules"));
        }
        let mut module_index = HashMap::with_capacity(modules.len());
        for (i, module) in modules.iter().enumerate() {
            module.validate()?;
            if module_index.insert(module.id.clone(), i).is_some() {
                return Err(ValidationError::duplicate("modules", module.id.as_str()));
            }
        }

        let allocation = KeyedTable::from_map(
            "allocation_strategies",
            allocation_profiles(allocation_strategies)?,
        )?;
        let capacity = KeyedTable::from_map("capacity_tiers", capacity_profiles(capacity_tiers)?)?;
        let payment = KeyedTable::from_map("payment_options", payment_terms(payment_options)?)?;
        let discounts = DiscountSchedule::try_new(volume_discounts)?;

        let mut parameter_ids = HashSet::with_capacity(parameters.len());
        for parameter in &parameters {
            parameter.validate()?;
            if !parameter_ids.insert(parameter.id.clone()) {
                return Err(ValidationError::duplicate("parameters", parameter.id.as_str()));
            }
        }

        let catalog = Self {
            base_unit_price,
            defaults,
            modules,
            module_index,
            allocation,
            capacity,
            payment,
            parameters,
            discounts,
            presets: Vec::new(),
        };

        let mut preset_ids = HashSet::with_capacity(presets.len());
        for preset in &presets {
            if !preset_ids.insert(preset.id.clone()) {
                return Err(ValidationError::duplicate("presets", preset.id.as_str()));
            }
            catalog.validate_preset(preset)?;
        }

        Ok(Self { presets, ..catalog })
    }

    fn validate_preset(&self, preset: &Preset) -> Result<(), ValidationError> {
        let field = |name: &str| format!("presets.{}.{}", preset.id, name);

        if preset.intent.trim().is_empty() {
            return Err(ValidationError::empty_field(field("intent")));
        }

        let mut seen = HashSet::with_capacity(preset.modules.len());
        for entry in &preset.modules {
            let module = self
                .module(&entry.module)
                .ok_or_else(|| ValidationError::unknown_reference(field("modules"), entry.module.as_str()))?;
            if !seen.insert(&entry.module) {
                return Err(ValidationError::duplicate(field("modules"), entry.module.as_str()));
            }
            if let Some(engagement) = entry.variant {
                if module.variant(engagement).is_none() {
                    return Err(ValidationError::unknown_reference(
                        field(&format!("modules.{}.variant", entry.module)),
                        engagement.to_string(),
                    ));
                }
            }
        }

        for id in preset.parameters.keys() {
            if self.parameter(id).is_none() {
                return Err(ValidationError::unknown_reference(field("parameters"), id.as_str()));
            }
        }

        Ok(())
    }

    /// Price of one work unit before discounts.
    pub fn base_unit_price(&self) -> f64 {
        self.base_unit_price
    }

    pub fn defaults(&self) -> CatalogDefaults {
        self.defaults
    }

    /// Modules in catalog order.
    pub fn modules(&self) -> &[ModuleCatalogEntry] {
        &self.modules
    }

    pub fn module(&self, id: &ModuleId) -> Option<&ModuleCatalogEntry> {
        self.module_index.get(id).map(|&i| &self.modules[i])
    }

    pub fn allocation(&self, strategy: AllocationStrategy) -> &AllocationProfile {
        self.allocation.get(strategy)
    }

    pub fn allocation_profiles(&self) -> impl Iterator<Item = &AllocationProfile> {
        self.allocation.iter().map(|(_, profile)| profile)
    }

    pub fn capacity(&self, tier: CapacityTier) -> &CapacityProfile {
        self.capacity.get(tier)
    }

    pub fn capacity_profiles(&self) -> impl Iterator<Item = &CapacityProfile> {
        self.capacity.iter().map(|(_, profile)| profile)
    }

    pub fn payment(&self, option: PaymentOption) -> &PaymentTerms {
        self.payment.get(option)
    }

    pub fn payment_terms(&self) -> impl Iterator<Item = &PaymentTerms> {
        self.payment.iter().map(|(_, terms)| terms)
    }

    pub fn parameters(&self) -> &[ServiceParameter] {
        &self.parameters
    }

    pub fn parameter(&self, id: &ParameterId) -> Option<&ServiceParameter> {
        self.parameters.iter().find(|p| &p.id == id)
    }

    pub fn discounts(&self) -> &DiscountSchedule {
        &self.discounts
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn preset(&self, id: &PresetId) -> Option<&Preset> {
        self.presets.iter().find(|p| &p.id == id)
    }
}

fn allocation_profiles(
    entries: BTreeMap<AllocationStrategy, AllocationEntry>,
) -> Result<BTreeMap<AllocationStrategy, AllocationProfile>, ValidationError> {
    entries
        .into_iter()
        .map(|(strategy, entry)| {
            let field = |name: &str| format!("allocation_strategies.{}.{}", strategy.key(), name);
            if entry.label.trim().is_empty() {
                return Err(ValidationError::empty_field(field("label")));
            }
            if entry.output_multiplier != 1.0 {
                return Err(ValidationError::out_of_range(
                    field("output_multiplier"),
                    1.0,
                    1.0,
                    entry.output_multiplier,
                ));
            }
            if strategy == AllocationStrategy::Focused && !entry.switching_overhead.is_zero() {
                return Err(ValidationError::out_of_range(
                    field("switching_overhead"),
                    0.0,
                    0.0,
                    entry.switching_overhead.value(),
                ));
            }
            Ok((
                strategy,
                AllocationProfile {
                    strategy,
                    label: entry.label,
                    switching_overhead: entry.switching_overhead,
                    output_multiplier: entry.output_multiplier,
                },
            ))
        })
        .collect()
}

fn capacity_profiles(
    entries: BTreeMap<CapacityTier, CapacityEntry>,
) -> Result<BTreeMap<CapacityTier, CapacityProfile>, ValidationError> {
    entries
        .into_iter()
        .map(|(tier, entry)| {
            let field = |name: &str| format!("capacity_tiers.{}.{}", tier.key(), name);
            if entry.label.trim().is_empty() {
                return Err(ValidationError::empty_field(field("label")));
            }
            if !entry.weekly_rate.is_finite() || entry.weekly_rate <= 0.0 {
                return Err(ValidationError::out_of_range(
                    field("weekly_rate"),
                    f64::MIN_POSITIVE,
                    f64::MAX,
                    entry.weekly_rate,
                ));
            }
            Ok((
                tier,
                CapacityProfile {
                    tier,
                    label: entry.label,
                    weekly_rate: entry.weekly_rate,
                },
            ))
        })
        .collect()
}

fn payment_terms(
    entries: BTreeMap<PaymentOption, PaymentEntry>,
) -> Result<BTreeMap<PaymentOption, PaymentTerms>, ValidationError> {
    entries
        .into_iter()
        .map(|(option, entry)| {
            let field = |name: &str| format!("payment_options.{}.{}", option.key(), name);
            if entry.label.trim().is_empty() {
                return Err(ValidationError::empty_field(field("label")));
            }
            let multiplier = entry.price_multiplier;
            if !multiplier.is_finite() || multiplier <= 0.0 || multiplier > 1.0 {
                return Err(ValidationError::out_of_range(
                    field("price_multiplier"),
                    0.0,
                    1.0,
                    multiplier,
                ));
            }
            Ok((
                option,
                PaymentTerms {
                    option,
                    label: entry.label,
                    price_multiplier: multiplier,
                },
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::fixtures;

    #[test]
    fn bundled_catalog_is_valid() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.modules().is_empty());
        assert!(!catalog.presets().is_empty());
        assert_eq!(catalog.allocation_profiles().count(), AllocationStrategy::ALL.len());
    }

    #[test]
    fn module_lookup_uses_index() {
        let catalog = fixtures::catalog();
        let id = ModuleId::try_new("process-audit").unwrap();
        assert_eq!(catalog.module(&id).map(|m| m.name.as_str()), Some("Process Audit"));
        assert!(catalog.module(&ModuleId::try_new("ghost").unwrap()).is_none());
    }

    #[test]
    fn rejects_non_positive_base_price() {
        let mut doc = fixtures::document();
        doc.base_unit_price = 0.0;
        assert!(Catalog::from_document(doc).is_err());
    }

    #[test]
    fn rejects_duplicate_module_ids() {
        let mut doc = fixtures::document();
        let copy = doc.modules[0].clone();
        doc.modules.push(copy);
        assert!(matches!(
            Catalog::from_document(doc),
            Err(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn rejects_missing_capacity_tier() {
        let mut doc = fixtures::document();
        doc.capacity_tiers.remove(&CapacityTier::Enterprise);
        let err = Catalog::from_document(doc).unwrap_err();
        assert_eq!(err.field(), "capacity_tiers");
    }

    #[test]
    fn rejects_zero_weekly_rate() {
        let mut doc = fixtures::document();
        if let Some(entry) = doc.capacity_tiers.get_mut(&CapacityTier::Pilot) {
            entry.weekly_rate = 0.0;
        }
        assert!(Catalog::from_document(doc).is_err());
    }

    #[test]
    fn rejects_payment_multiplier_above_one() {
        let mut doc = fixtures::document();
        if let Some(entry) = doc.payment_options.get_mut(&PaymentOption::PrepaidAnnual) {
            entry.price_multiplier = 1.2;
        }
        assert!(Catalog::from_document(doc).is_err());
    }

    #[test]
    fn rejects_overhead_on_focused_strategy() {
        let mut doc = fixtures::document();
        if let Some(entry) = doc.allocation_strategies.get_mut(&AllocationStrategy::Focused) {
            entry.switching_overhead = crate::domain::foundation::Percentage::new(5.0);
        }
        assert!(Catalog::from_document(doc).is_err());
    }

    #[test]
    fn rejects_output_multiplier_other_than_one() {
        let mut doc = fixtures::document();
        if let Some(entry) = doc.allocation_strategies.get_mut(&AllocationStrategy::Portfolio) {
            entry.output_multiplier = 0.8;
        }
        assert!(Catalog::from_document(doc).is_err());
    }

    #[test]
    fn rejects_preset_with_unknown_module() {
        let mut doc = fixtures::document();
        doc.presets[0].modules.push(crate::domain::catalog::PresetModule {
            module: ModuleId::try_new("ghost").unwrap(),
            variant: None,
        });
        assert!(matches!(
            Catalog::from_document(doc),
            Err(ValidationError::UnknownReference { .. })
        ));
    }

    #[test]
    fn rejects_preset_with_unknown_parameter() {
        let mut doc = fixtures::document();
        doc.presets[0]
            .parameters
            .insert(ParameterId::try_new("ghost").unwrap(), true);
        assert!(Catalog::from_document(doc).is_err());
    }

    #[test]
    fn rejects_duplicate_parameters() {
        let mut doc = fixtures::document();
        let copy = doc.parameters[0].clone();
        doc.parameters.push(copy);
        assert!(matches!(
            Catalog::from_document(doc),
            Err(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn from_yaml_str_reports_parse_errors() {
        assert!(matches!(
            Catalog::from_yaml_str("base_unit_price: [not, a, number]"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn from_path_reports_missing_file() {
        assert!(matches!(
            Catalog::from_path("/definitely/not/here.yaml"),
            Err(CatalogError::Io { .. })
        ));
    }
}
