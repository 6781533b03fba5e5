//! Shared catalog fixture for integration tests.

#![allow(dead_code)]

use solution_configurator::domain::catalog::Catalog;
use solution_configurator::domain::foundation::{ModuleId, ParameterId, PresetId};

/// Round-number catalog: base price 10, tier rates 20/40/80/160,
/// overheads 0/20/35 and one 10% discount tier from 30 units.
pub const CATALOG_YAML: &str = r#"
base_unit_price: 10
defaults:
  allocation: focused
  capacity_tier: pilot
  payment: standard
allocation_strategies:
  focused:
    label: Focused
    switching_overhead: 0
  parallel:
    label: Parallel
    switching_overhead: 20
  portfolio:
    label: Portfolio
    switching_overhead: 35
capacity_tiers:
  pilot:
    label: Pilot
    weekly_rate: 20
  core:
    label: Core
    weekly_rate: 40
  accelerated:
    label: Accelerated
    weekly_rate: 80
  enterprise:
    label: Enterprise
    weekly_rate: 160
payment_options:
  standard:
    label: Standard
    price_multiplier: 1.0
  prepaid_quarterly:
    label: Quarterly
    price_multiplier: 0.95
  prepaid_annual:
    label: Annual
    price_multiplier: 0.9
volume_discounts:
  - threshold: 30
    discount: 0.1
parameters:
  - id: dedicated_lead
    label: Dedicated lead
    cost:
      kind: absolute
      value: 10
  - id: priority_support
    label: Priority support
    cost:
      kind: relative
      value: 10
  - id: weekly_digest
    label: Weekly digest
    default_enabled: true
modules:
  - id: process-audit
    name: Process Audit
    pillar: operations
    variants:
      - engagement: integrated_execution
        work_units: 100
      - engagement: primer
        work_units: 40
  - id: data-foundation
    name: Data Foundation
    pillar: technology
    variants:
      - engagement: primer
        work_units: 60
      - engagement: integrated_execution
        work_units: 150
  - id: kickoff
    name: Kickoff Workshop
    pillar: people
    variants:
      - engagement: primer
        work_units: 10
        single_variant: true
presets:
  - id: modernise-operations
    intent: Modernise operations
    modules:
      - module: process-audit
        variant: primer
      - module: data-foundation
    allocation: parallel
    payment: prepaid_annual
    parameters:
      priority_support: true
    recommended_tier: core
"#;

pub fn catalog() -> Catalog {
    Catalog::from_yaml_str(CATALOG_YAML).expect("fixture catalog is valid")
}

pub fn module(id: &str) -> ModuleId {
    ModuleId::try_new(id).unwrap()
}

pub fn parameter(id: &str) -> ParameterId {
    ParameterId::try_new(id).unwrap()
}

pub fn preset(id: &str) -> PresetId {
    PresetId::try_new(id).unwrap()
}
