//! Small in-memory catalogs for unit tests.

use std::collections::BTreeMap;

use super::*;
use crate::domain::foundation::{ModuleId, ParameterId, Percentage, PresetId};

pub(crate) fn module(id: &str, name: &str, variants: Vec<Variant>) -> ModuleCatalogEntry {
    ModuleCatalogEntry {
        id: ModuleId::try_new(id).unwrap(),
        name: name.to_string(),
        pillar: "operations".to_string(),
        variants,
    }
}

/// Catalog document with round numbers:
/// - base price 10, capacity rates 20/40/80/160
/// - overheads 0/20/35
/// - one discount tier at 30 units (10% off)
/// - modules: process-audit (100 / 40), data-foundation (60 / 150), kickoff (10, single)
pub(crate) fn document() -> CatalogDocument {
    let allocation_strategies = BTreeMap::from([
        (
            AllocationStrategy::Focused,
            AllocationEntry {
                label: "Focused".to_string(),
                switching_overhead: Percentage::ZERO,
                output_multiplier: 1.0,
            },
        ),
        (
            AllocationStrategy::Parallel,
            AllocationEntry {
                label: "Parallel".to_string(),
                switching_overhead: Percentage::new(20.0),
                output_multiplier: 1.0,
            },
        ),
        (
            AllocationStrategy::Portfolio,
            AllocationEntry {
                label: "Portfolio".to_string(),
                switching_overhead: Percentage::new(35.0),
                output_multiplier: 1.0,
            },
        ),
    ]);

    let capacity_tiers = BTreeMap::from([
        (CapacityTier::Pilot, CapacityEntry { label: "Pilot".to_string(), weekly_rate: 20.0 }),
        (CapacityTier::Core, CapacityEntry { label: "Core".to_string(), weekly_rate: 40.0 }),
        (
            CapacityTier::Accelerated,
            CapacityEntry { label: "Accelerated".to_string(), weekly_rate: 80.0 },
        ),
        (
            CapacityTier::Enterprise,
            CapacityEntry { label: "Enterprise".to_string(), weekly_rate: 160.0 },
        ),
    ]);

    let payment_options = BTreeMap::from([
        (
            PaymentOption::Standard,
            PaymentEntry { label: "Standard".to_string(), price_multiplier: 1.0 },
        ),
        (
            PaymentOption::PrepaidQuarterly,
            PaymentEntry { label: "Quarterly".to_string(), price_multiplier: 0.95 },
        ),
        (
            PaymentOption::PrepaidAnnual,
            PaymentEntry { label: "Annual".to_string(), price_multiplier: 0.9 },
        ),
    ]);

    let mut kickoff = Variant::new(EngagementType::Primer, 10.0);
    kickoff.single_variant = true;

    let modules = vec![
        module(
            "process-audit",
            "Process Audit",
            vec![
                Variant::new(EngagementType::IntegratedExecution, 100.0),
                Variant::new(EngagementType::Primer, 40.0),
            ],
        ),
        module(
            "data-foundation",
            "Data Foundation",
            vec![
                Variant::new(EngagementType::Primer, 60.0),
                Variant::new(EngagementType::IntegratedExecution, 150.0),
            ],
        ),
        module("kickoff", "Kickoff Workshop", vec![kickoff]),
    ];

    let parameters = vec![
        ServiceParameter {
            id: ParameterId::try_new("dedicated_lead").unwrap(),
            label: "Dedicated engagement lead".to_string(),
            default_enabled: false,
            cost: Some(CostRule::absolute(5.0)),
        },
        ServiceParameter {
            id: ParameterId::try_new("priority_support").unwrap(),
            label: "Priority support".to_string(),
            default_enabled: false,
            cost: Some(CostRule::relative(10.0)),
        },
        ServiceParameter {
            id: ParameterId::try_new("weekly_digest").unwrap(),
            label: "Weekly digest".to_string(),
            default_enabled: true,
            cost: None,
        },
    ];

    let presets = vec![Preset {
        id: PresetId::try_new("modernise-operations").unwrap(),
        intent: "Modernise operations".to_string(),
        description: String::new(),
        modules: vec![
            PresetModule {
                module: ModuleId::try_new("process-audit").unwrap(),
                variant: Some(EngagementType::Primer),
            },
            PresetModule {
                module: ModuleId::try_new("data-foundation").unwrap(),
                variant: None,
            },
        ],
        allocation: AllocationStrategy::Parallel,
        payment: PaymentOption::PrepaidAnnual,
        parameters: BTreeMap::from([(ParameterId::try_new("priority_support").unwrap(), true)]),
        recommended_tier: Some(CapacityTier::Core),
    }];

    CatalogDocument {
        base_unit_price: 10.0,
        defaults: CatalogDefaults {
            allocation: AllocationStrategy::Focused,
            capacity_tier: CapacityTier::Pilot,
            payment: PaymentOption::Standard,
        },
        allocation_strategies,
        capacity_tiers,
        payment_options,
        volume_discounts: vec![VolumeDiscountTier::new(30.0, 0.1)],
        parameters,
        modules,
        presets,
    }
}

pub(crate) fn catalog() -> Catalog {
    Catalog::from_document(document()).unwrap()
}
